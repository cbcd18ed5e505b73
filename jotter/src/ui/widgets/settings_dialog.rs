use iced::alignment;
use iced::widget::button::Status as ButtonStatus;
use iced::widget::text::Wrapping;
use iced::widget::{
    Space, button, column, container, mouse_area, opaque, row, text,
    text_input,
};
use iced::{Border, Color, Element, Length};

use crate::features::settings::Appearance;
use crate::fonts::FontsConfig;
use crate::theme::{IcedColorPalette, ThemeProps};

const DIALOG_WIDTH: f32 = 420.0;
const DIALOG_PADDING: f32 = 20.0;
const DIALOG_SPACING: f32 = 16.0;
const DIALOG_RADIUS: f32 = 8.0;
const FORM_LABEL_WIDTH: f32 = 120.0;
const FORM_ROW_HEIGHT: f32 = 30.0;
const FORM_ROW_SPACING: f32 = 10.0;
const BUTTON_HEIGHT: f32 = 28.0;
const BUTTON_PADDING_X: f32 = 12.0;
const BACKDROP_ALPHA: f32 = 0.45;

/// UI events emitted by the settings dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingsDialogEvent {
    UserNameChanged(String),
    AppearanceSelected(Appearance),
    Save,
    Close,
}

/// Props for rendering the settings dialog.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsDialogProps<'a> {
    pub(crate) user_name: &'a str,
    pub(crate) appearance: Appearance,
    pub(crate) is_dirty: bool,
    pub(crate) is_saving: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the modal dialog over a dimmed backdrop.
pub(crate) fn view<'a>(
    props: SettingsDialogProps<'a>,
) -> Element<'a, SettingsDialogEvent> {
    let palette = props.theme.theme.iced_palette().clone();
    let overlay = palette.overlay;
    let border = palette.border;
    let foreground = palette.foreground;

    let title = text("My settings")
        .size(props.fonts.ui.size * 1.3)
        .font(props.fonts.heading.font_type);

    let name_input = text_input("Your name", props.user_name)
        .on_input(SettingsDialogEvent::UserNameChanged)
        .on_submit(SettingsDialogEvent::Save)
        .size(props.fonts.ui.size)
        .width(Length::Fill);

    let mut appearance_row = row![].spacing(FORM_ROW_SPACING);
    for appearance in Appearance::ALL {
        appearance_row = appearance_row.push(action_button(
            appearance_label(appearance),
            appearance != props.appearance,
            props.appearance == appearance,
            SettingsDialogEvent::AppearanceSelected(appearance),
            &palette,
        ));
    }

    let can_save = props.is_dirty && !props.is_saving;
    let save_label = if props.is_saving { "Saving..." } else { "Save" };
    let actions = row![
        Space::new().width(Length::Fill),
        action_button(
            "Close",
            true,
            false,
            SettingsDialogEvent::Close,
            &palette
        ),
        action_button(
            save_label,
            can_save,
            true,
            SettingsDialogEvent::Save,
            &palette
        ),
    ]
    .spacing(FORM_ROW_SPACING);

    let dialog = container(
        column![
            title,
            form_row("Name", name_input.into()),
            form_row("Appearance", appearance_row.into()),
            actions,
        ]
        .spacing(DIALOG_SPACING),
    )
    .width(Length::Fixed(DIALOG_WIDTH))
    .padding(DIALOG_PADDING)
    .style(move |_| iced::widget::container::Style {
        background: Some(overlay.into()),
        text_color: Some(foreground),
        border: Border {
            color: border,
            width: 1.0,
            radius: DIALOG_RADIUS.into(),
        },
        ..Default::default()
    });

    let backdrop = container(opaque(dialog))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_| iced::widget::container::Style {
            background: Some(Color::BLACK.scale_alpha(BACKDROP_ALPHA).into()),
            ..Default::default()
        });

    opaque(mouse_area(backdrop).on_press(SettingsDialogEvent::Close))
}

fn appearance_label(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "Light",
        Appearance::Dark => "Dark",
    }
}

fn form_row<'a>(
    label: &'a str,
    input: Element<'a, SettingsDialogEvent>,
) -> Element<'a, SettingsDialogEvent> {
    let label = text(label)
        .width(Length::Fixed(FORM_LABEL_WIDTH))
        .wrapping(Wrapping::None);

    row![label, input]
        .spacing(FORM_ROW_SPACING)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fixed(FORM_ROW_HEIGHT))
        .into()
}

fn action_button<'a>(
    label: &'a str,
    enabled: bool,
    selected: bool,
    event: SettingsDialogEvent,
    palette: &IcedColorPalette,
) -> Element<'a, SettingsDialogEvent> {
    let palette = palette.clone();
    let content = container(text(label))
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    let mut button = button(content)
        .padding([0.0, BUTTON_PADDING_X])
        .height(Length::Fixed(BUTTON_HEIGHT))
        .style(move |_, status| {
            button_style(&palette, status, enabled, selected)
        });

    if enabled {
        button = button.on_press(event);
    }

    button.into()
}

fn button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    enabled: bool,
    selected: bool,
) -> iced::widget::button::Style {
    let base_color = match (selected, status) {
        (true, _) => palette.accent,
        (false, ButtonStatus::Hovered | ButtonStatus::Pressed) if enabled => {
            palette.hover
        },
        _ => palette.panel,
    };
    let text_color = if selected {
        palette.background
    } else {
        palette.foreground
    };
    let alpha = if enabled || selected { 1.0 } else { 0.5 };

    iced::widget::button::Style {
        background: Some(base_color.scale_alpha(alpha).into()),
        text_color: text_color.scale_alpha(alpha),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}
