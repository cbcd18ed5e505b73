use std::f32::consts::TAU;

use iced::widget::{container, svg};
use iced::{Element, Length, Radians, Rotation};

use crate::icons;
use crate::theme::ThemeProps;

/// Number of rotation steps in one spinner turn.
pub(crate) const SPINNER_FRAMES: u8 = 12;

/// Rendered spinner size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SpinnerSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl SpinnerSize {
    pub(crate) fn pixels(self) -> f32 {
        match self {
            SpinnerSize::Default => 16.0,
            SpinnerSize::Sm => 8.0,
            SpinnerSize::Lg => 24.0,
            SpinnerSize::Icon => 40.0,
        }
    }
}

/// The spinner emits no events.
#[derive(Debug, Clone)]
pub(crate) enum SpinnerEvent {}

/// Props for rendering the loading spinner.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SpinnerProps<'a> {
    pub(crate) size: SpinnerSize,
    pub(crate) frame: u8,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a loader icon rotated to the given animation frame.
pub(crate) fn view<'a>(props: SpinnerProps<'a>) -> Element<'a, SpinnerEvent> {
    let color = props.theme.theme.iced_palette().muted_foreground;
    let size = props.size.pixels();

    let icon = svg::Svg::new(svg::Handle::from_memory(icons::LOADER))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .rotation(Rotation::Floating(Radians(frame_angle(props.frame))))
        .style(move |_, _| svg::Style { color: Some(color) });

    container(icon)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .into()
}

fn frame_angle(frame: u8) -> f32 {
    TAU * f32::from(frame % SPINNER_FRAMES) / f32::from(SPINNER_FRAMES)
}
