use iced::widget::{button, container, svg};
use iced::{Background, Border, Element, Length, alignment};

use crate::theme::{StyleOverrides, ThemeProps};

const ICON_BUTTON_RADIUS: f32 = 4.0;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) enum IconButtonVariant {
    Standard,
    Danger,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: IconButtonVariant,
}

/// A small square button showing a single tinted icon.
pub(crate) struct IconButton<'a> {
    props: IconButtonProps<'a>,
}

impl<'a> IconButton<'a> {
    pub fn new(props: IconButtonProps<'a>) -> Self {
        Self { props }
    }

    pub fn view(self) -> Element<'a, IconButtonEvent> {
        let palette = self.props.theme.theme.iced_palette();
        let (base_color, hover_color) = resolve_variant_colors(
            self.props.variant,
            palette.muted_foreground,
            palette.foreground,
            palette.danger,
            self.props.theme.overrides,
        );
        let hover_background = self
            .props
            .theme
            .overrides
            .and_then(|overrides| overrides.background)
            .unwrap_or(palette.hover);

        let icon = svg::Svg::new(svg::Handle::from_memory(self.props.icon))
            .width(Length::Fixed(self.props.icon_size))
            .height(Length::Fixed(self.props.icon_size))
            .style(move |_, status| {
                let color = if matches!(status, svg::Status::Hovered) {
                    hover_color
                } else {
                    base_color
                };

                svg::Style { color: Some(color) }
            });

        let icon_container = container(icon)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        button(icon_container)
            .on_press(IconButtonEvent::Pressed)
            .padding(0)
            .width(Length::Fixed(self.props.size))
            .height(Length::Fixed(self.props.size))
            .style(move |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        Some(Background::Color(hover_background))
                    },
                    _ => None,
                };

                button::Style {
                    background,
                    border: Border {
                        radius: ICON_BUTTON_RADIUS.into(),
                        ..Border::default()
                    },
                    ..Default::default()
                }
            })
            .into()
    }
}

fn resolve_variant_colors(
    variant: IconButtonVariant,
    default_base: iced::Color,
    accent: iced::Color,
    danger: iced::Color,
    overrides: Option<StyleOverrides>,
) -> (iced::Color, iced::Color) {
    if let Some(color) = overrides.and_then(|overrides| overrides.foreground)
    {
        return (color, color);
    }

    match variant {
        IconButtonVariant::Standard => (default_base, accent),
        IconButtonVariant::Danger => (default_base, danger),
    }
}
