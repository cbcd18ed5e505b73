use iced::widget::text::Wrapping;
use iced::widget::{Space, container, row, text};
use iced::{Alignment, Element, Length};

use crate::fonts::FontsConfig;
use crate::icons;
use crate::theme::ThemeProps;
use crate::ui::components::icon_button::{
    IconButton, IconButtonEvent, IconButtonProps, IconButtonVariant,
};

pub(crate) const NAVBAR_HEIGHT: f32 = 48.0;
const NAVBAR_PADDING: f32 = 12.0;
const NAVBAR_SPACING: f32 = 8.0;
const NAVBAR_BUTTON_SIZE: f32 = 28.0;
const NAVBAR_ICON_SIZE: f32 = 20.0;

/// UI events emitted by the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavbarEvent {
    /// The menu icon asks the panel to reopen at its default width.
    ResetWidth,
    Archive,
}

/// Props for rendering the top bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavbarProps<'a> {
    pub(crate) is_collapsed: bool,
    /// Title of the open document, if any.
    pub(crate) title: Option<&'a str>,
    /// Whether the open document can be moved to the trash.
    pub(crate) can_archive: bool,
    pub(crate) width: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the bar above the main area.
pub(crate) fn view<'a>(props: NavbarProps<'a>) -> Element<'a, NavbarEvent> {
    let palette = props.theme.theme.iced_palette();
    let background = palette.background;
    let foreground = palette.foreground;

    let mut content = row![]
        .spacing(NAVBAR_SPACING)
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill);

    if props.is_collapsed {
        content = content.push(
            icon_button(icons::MENU, IconButtonVariant::Standard, props)
                .map(|_| NavbarEvent::ResetWidth),
        );
    }

    if let Some(title) = props.title {
        content = content.push(
            text(title)
                .size(props.fonts.ui.size)
                .font(props.fonts.ui.font_type)
                .wrapping(Wrapping::None),
        );
    }

    content = content.push(Space::new().width(Length::Fill));

    if props.can_archive {
        content = content.push(
            icon_button(icons::TRASH, IconButtonVariant::Danger, props)
                .map(|_| NavbarEvent::Archive),
        );
    }

    container(content)
        .width(Length::Fixed(props.width.max(0.0)))
        .height(Length::Fixed(NAVBAR_HEIGHT))
        .padding([0.0, NAVBAR_PADDING])
        .clip(true)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            ..Default::default()
        })
        .into()
}

fn icon_button<'a>(
    icon: &'static [u8],
    variant: IconButtonVariant,
    props: NavbarProps<'a>,
) -> Element<'a, IconButtonEvent> {
    IconButton::new(IconButtonProps {
        icon,
        theme: props.theme,
        size: NAVBAR_BUTTON_SIZE,
        icon_size: NAVBAR_ICON_SIZE,
        variant,
    })
    .view()
}
