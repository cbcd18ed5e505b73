use iced::widget::text::Wrapping;
use iced::widget::{
    Space, button, column, container, row, scrollable, svg, text, text_input,
};
use iced::{Alignment, Border, Element, Length};

use crate::features::documents::{Document, DocumentId};
use crate::fonts::FontsConfig;
use crate::icons;
use crate::theme::ThemeProps;
use crate::ui::components::icon_button::{
    IconButton, IconButtonEvent, IconButtonProps, IconButtonVariant,
};

pub(crate) const TRASH_BOX_WIDTH: f32 = 320.0;
const TRASH_BOX_MAX_HEIGHT: f32 = 360.0;
const TRASH_BOX_PADDING: f32 = 8.0;
const TRASH_BOX_RADIUS: f32 = 6.0;
const TRASH_ROW_HEIGHT: f32 = 28.0;
const TRASH_ACTION_SIZE: f32 = 22.0;
const TRASH_ACTION_ICON_SIZE: f32 = 14.0;
const TRASH_SEARCH_ICON_SIZE: f32 = 14.0;

/// UI events emitted by the trash popover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TrashBoxEvent {
    SearchChanged(String),
    Open(DocumentId),
    Restore(DocumentId),
    Remove(DocumentId),
}

/// Props for rendering the trash popover.
#[derive(Debug, Clone)]
pub(crate) struct TrashBoxProps<'a> {
    pub(crate) documents: Vec<&'a Document>,
    pub(crate) search: &'a str,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render archived documents with a title filter.
pub(crate) fn view<'a>(props: TrashBoxProps<'a>) -> Element<'a, TrashBoxEvent> {
    let TrashBoxProps {
        documents,
        search,
        theme,
        fonts,
    } = props;
    let palette = theme.theme.iced_palette();
    let overlay = palette.overlay;
    let border = palette.border;
    let foreground = palette.foreground;
    let muted = palette.muted_foreground;

    let search_icon = svg::Svg::new(svg::Handle::from_memory(icons::SEARCH))
        .width(Length::Fixed(TRASH_SEARCH_ICON_SIZE))
        .height(Length::Fixed(TRASH_SEARCH_ICON_SIZE))
        .style(move |_, _| svg::Style { color: Some(muted) });

    let search = text_input("Filter by page title...", search)
        .on_input(TrashBoxEvent::SearchChanged)
        .size(fonts.ui.size)
        .width(Length::Fill);

    let search_row = row![search_icon, search]
        .spacing(TRASH_BOX_PADDING)
        .align_y(Alignment::Center);

    let body: Element<'a, TrashBoxEvent> = if documents.is_empty() {
        container(
            text("No documents found.")
                .size(fonts.ui.size * 0.9)
                .style(move |_| text::Style { color: Some(muted) }),
        )
        .width(Length::Fill)
        .padding(TRASH_BOX_PADDING)
        .align_x(Alignment::Center)
        .into()
    } else {
        let mut list = column![].width(Length::Fill);
        for document in documents {
            list = list.push(trash_row(document, theme, fonts));
        }
        scrollable(list)
            .width(Length::Fill)
            .height(Length::Shrink)
            .into()
    };

    container(column![search_row, body].spacing(TRASH_BOX_PADDING))
        .width(Length::Fixed(TRASH_BOX_WIDTH))
        .max_height(TRASH_BOX_MAX_HEIGHT)
        .padding(TRASH_BOX_PADDING)
        .style(move |_| iced::widget::container::Style {
            background: Some(overlay.into()),
            text_color: Some(foreground),
            border: Border {
                color: border,
                width: 1.0,
                radius: TRASH_BOX_RADIUS.into(),
            },
            ..Default::default()
        })
        .into()
}

fn trash_row<'a>(
    document: &'a Document,
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, TrashBoxEvent> {
    let id = document.id;
    let hover = theme.theme.iced_palette().hover;

    let title = text(document.title.as_str())
        .size(fonts.ui.size)
        .width(Length::Fill)
        .wrapping(Wrapping::None);

    let restore =
        action_button(icons::UNDO, IconButtonVariant::Standard, theme)
            .map(move |_| TrashBoxEvent::Restore(id));
    let remove =
        action_button(icons::TRASH, IconButtonVariant::Danger, theme)
            .map(move |_| TrashBoxEvent::Remove(id));

    let content = row![title, restore, remove, Space::new().width(4.0)]
        .spacing(4.0)
        .align_y(Alignment::Center)
        .padding([0.0, TRASH_BOX_PADDING]);

    button(content)
        .on_press(TrashBoxEvent::Open(id))
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(TRASH_ROW_HEIGHT))
        .style(move |theme: &iced::Theme, status| button::Style {
            background: matches!(
                status,
                button::Status::Hovered | button::Status::Pressed
            )
            .then(|| hover.into()),
            text_color: theme.palette().text,
            ..Default::default()
        })
        .into()
}

fn action_button<'a>(
    icon: &'static [u8],
    variant: IconButtonVariant,
    theme: ThemeProps<'a>,
) -> Element<'a, IconButtonEvent> {
    IconButton::new(IconButtonProps {
        icon,
        theme,
        size: TRASH_ACTION_SIZE,
        icon_size: TRASH_ACTION_ICON_SIZE,
        variant,
    })
    .view()
}
