use iced::widget::{button, column, container, row, svg, text};
use iced::{Alignment, Border, Element, Length};

use crate::fonts::FontsConfig;
use crate::icons;
use crate::theme::ThemeProps;
use crate::ui::widgets::spinner::{self, SpinnerProps, SpinnerSize};

const CREATE_ICON_SIZE: f32 = 16.0;
const CREATE_BUTTON_PADDING: [f32; 2] = [8.0, 14.0];
const CREATE_BUTTON_RADIUS: f32 = 6.0;
const EMPTY_SPACING: f32 = 16.0;

/// UI events emitted by the empty documents page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentsEmptyEvent {
    CreatePressed,
}

/// Props for rendering the empty documents page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DocumentsEmptyProps<'a> {
    pub(crate) user_name: &'a str,
    /// A store operation is in flight; the create button is withheld.
    pub(crate) busy: bool,
    pub(crate) spinner_frame: u8,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the welcome message and the create button, or a spinner while
/// the store is busy.
pub(crate) fn view<'a>(
    props: DocumentsEmptyProps<'a>,
) -> Element<'a, DocumentsEmptyEvent> {
    let palette = props.theme.theme.iced_palette();
    let accent = palette.accent;
    let on_accent = palette.background;

    let heading = text(format!("Welcome to {}'s Jotter", props.user_name))
        .size(props.fonts.heading.size * 0.75)
        .font(props.fonts.heading.font_type);

    if props.busy {
        let spinner = spinner::view(SpinnerProps {
            size: SpinnerSize::Lg,
            frame: props.spinner_frame,
            theme: props.theme,
        })
        .map(|event| match event {});

        return centered(column![heading, spinner]);
    }

    let plus = svg::Svg::new(svg::Handle::from_memory(icons::PLUS_CIRCLE))
        .width(Length::Fixed(CREATE_ICON_SIZE))
        .height(Length::Fixed(CREATE_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(on_accent),
        });

    let create = button(
        row![plus, text("Create a Note").size(props.fonts.ui.size)]
            .spacing(8.0)
            .align_y(Alignment::Center),
    )
    .on_press(DocumentsEmptyEvent::CreatePressed)
    .padding(CREATE_BUTTON_PADDING)
    .style(move |_, status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => 0.85,
            _ => 1.0,
        };
        button::Style {
            background: Some(accent.scale_alpha(alpha).into()),
            text_color: on_accent,
            border: Border {
                radius: CREATE_BUTTON_RADIUS.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    });

    centered(column![heading, create])
}

fn centered<'a>(
    content: iced::widget::Column<'a, DocumentsEmptyEvent>,
) -> Element<'a, DocumentsEmptyEvent> {
    container(content.spacing(EMPTY_SPACING).align_x(Alignment::Center))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}
