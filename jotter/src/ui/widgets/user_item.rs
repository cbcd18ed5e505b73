use iced::widget::text::Wrapping;
use iced::widget::{button, container, row, text};
use iced::{Alignment, Border, Element, Length};

use crate::fonts::FontsConfig;
use crate::theme::ThemeProps;

const USER_ITEM_HEIGHT: f32 = 48.0;
const USER_ITEM_AVATAR_SIZE: f32 = 22.0;
const USER_ITEM_PADDING: f32 = 12.0;
const USER_ITEM_SPACING: f32 = 8.0;

/// UI events emitted by the user badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UserItemEvent {
    Pressed,
}

/// Props for rendering the user badge.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UserItemProps<'a> {
    pub(crate) user_name: &'a str,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the avatar initial and workspace label.
pub(crate) fn view<'a>(props: UserItemProps<'a>) -> Element<'a, UserItemEvent> {
    let palette = props.theme.theme.iced_palette();
    let accent = palette.accent;
    let background = palette.background;
    let hover = palette.hover;
    let foreground = palette.foreground;

    let avatar = container(
        text(avatar_initial(props.user_name)).size(props.fonts.ui.size * 0.9),
    )
    .width(Length::Fixed(USER_ITEM_AVATAR_SIZE))
    .height(Length::Fixed(USER_ITEM_AVATAR_SIZE))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(move |_| iced::widget::container::Style {
        background: Some(accent.into()),
        text_color: Some(background),
        border: Border {
            radius: (USER_ITEM_AVATAR_SIZE / 2.0).into(),
            ..Border::default()
        },
        ..Default::default()
    });

    let label = text(workspace_label(props.user_name))
        .size(props.fonts.ui.size)
        .font(props.fonts.ui.font_type)
        .width(Length::Fill)
        .wrapping(Wrapping::None);

    let content = row![avatar, label]
        .spacing(USER_ITEM_SPACING)
        .align_y(Alignment::Center)
        .padding([0.0, USER_ITEM_PADDING]);

    button(content)
        .on_press(UserItemEvent::Pressed)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(USER_ITEM_HEIGHT))
        .style(move |_, status| button::Style {
            background: matches!(
                status,
                button::Status::Hovered | button::Status::Pressed
            )
            .then(|| hover.into()),
            text_color: foreground,
            ..Default::default()
        })
        .into()
}

fn avatar_initial(user_name: &str) -> String {
    user_name
        .trim()
        .chars()
        .next()
        .map(|initial| initial.to_uppercase().collect())
        .unwrap_or_else(|| String::from("?"))
}

fn workspace_label(user_name: &str) -> String {
    format!("{}'s Jotter", user_name.trim())
}
