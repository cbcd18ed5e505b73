use iced::widget::{
    Space, column, container, mouse_area, row, scrollable, stack,
};
use iced::{Alignment, Element, Length, mouse};

use super::document_list::{self, DocumentListEvent, DocumentListProps};
use super::sidebar_item::{self, SidebarItemEvent, SidebarItemProps};
use super::user_item::{self, UserItemEvent, UserItemProps};
use crate::features::documents::{DocumentId, DocumentRow};
use crate::fonts::FontsConfig;
use crate::icons;
use crate::theme::ThemeProps;
use crate::ui::components::icon_button::{
    IconButton, IconButtonProps, IconButtonVariant,
};

const SIDEBAR_RAIL_WIDTH: f32 = 4.0;
const SIDEBAR_COLLAPSE_BUTTON_SIZE: f32 = 24.0;
const SIDEBAR_COLLAPSE_ICON_SIZE: f32 = 18.0;
const SIDEBAR_HEADER_RIGHT_PADDING: f32 = 8.0;
const SIDEBAR_SECTION_SPACING: f32 = 16.0;

/// UI events emitted by the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarEvent {
    CollapsePressed,
    UserPressed,
    SettingsPressed,
    NewPagePressed,
    AddPagePressed,
    TrashPressed,
    ResizePressed,
    DocumentList(DocumentListEvent),
}

/// Props for rendering the side panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarProps<'a> {
    pub(crate) width: f32,
    pub(crate) user_name: &'a str,
    pub(crate) rows: &'a [DocumentRow],
    pub(crate) active_document: Option<DocumentId>,
    pub(crate) loading: bool,
    pub(crate) spinner_frame: u8,
    pub(crate) trash_open: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the side panel with its resize rail on the right edge.
pub(crate) fn view<'a>(props: SidebarProps<'a>) -> Element<'a, SidebarEvent> {
    let palette = props.theme.theme.iced_palette();
    let panel = palette.panel;
    let border = palette.border;

    let user = user_item::view(UserItemProps {
        user_name: props.user_name,
        theme: props.theme,
        fonts: props.fonts,
    })
    .map(|event| match event {
        UserItemEvent::Pressed => SidebarEvent::UserPressed,
    });

    let collapse = IconButton::new(IconButtonProps {
        icon: icons::COLLAPSE,
        theme: props.theme,
        size: SIDEBAR_COLLAPSE_BUTTON_SIZE,
        icon_size: SIDEBAR_COLLAPSE_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .view()
    .map(|_| SidebarEvent::CollapsePressed);

    let header = row![
        user,
        collapse,
        Space::new().width(Length::Fixed(SIDEBAR_HEADER_RIGHT_PADDING))
    ]
    .align_y(Alignment::Center);

    let actions = column![
        action_item("Settings", icons::SETTINGS, false, props)
            .map(|_| SidebarEvent::SettingsPressed),
        action_item("New page", icons::PLUS_CIRCLE, false, props)
            .map(|_| SidebarEvent::NewPagePressed),
    ];

    let documents = document_list::view(DocumentListProps {
        rows: props.rows,
        active: props.active_document,
        loading: props.loading,
        spinner_frame: props.spinner_frame,
        theme: props.theme,
        fonts: props.fonts,
    })
    .map(SidebarEvent::DocumentList);

    let footer = column![
        action_item("Add a page", icons::PLUS, false, props)
            .map(|_| SidebarEvent::AddPagePressed),
        action_item("Trash", icons::TRASH, props.trash_open, props)
            .map(|_| SidebarEvent::TrashPressed),
    ];

    let tree = scrollable(column![documents, footer].width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let content = column![header, actions, tree]
        .spacing(SIDEBAR_SECTION_SPACING)
        .width(Length::Fill)
        .height(Length::Fill);

    let rail = mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fixed(SIDEBAR_RAIL_WIDTH))
            .height(Length::Fill)
            .style(move |_| iced::widget::container::Style {
                background: Some(border.into()),
                ..Default::default()
            }),
    )
    .on_press(SidebarEvent::ResizePressed)
    .interaction(mouse::Interaction::ResizingHorizontally);

    let rail_row = row![Space::new().width(Length::Fill), rail]
        .width(Length::Fill)
        .height(Length::Fill);

    container(stack![content, rail_row])
        .width(Length::Fixed(props.width.max(0.0)))
        .height(Length::Fill)
        .clip(true)
        .style(move |_| iced::widget::container::Style {
            background: Some(panel.into()),
            ..Default::default()
        })
        .into()
}

fn action_item<'a>(
    label: &'a str,
    icon: &'static [u8],
    active: bool,
    props: SidebarProps<'a>,
) -> Element<'a, SidebarItemEvent> {
    sidebar_item::view(SidebarItemProps {
        label,
        icon,
        level: 0,
        expanded: None,
        active,
        show_actions: false,
        theme: props.theme,
        fonts: props.fonts,
    })
}
