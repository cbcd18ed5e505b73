use iced::widget::text::Wrapping;
use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Border, Color, Element, Length};

use super::spinner::{self, SpinnerProps, SpinnerSize};
use crate::features::toast::{Toast, ToastKey, ToastKind};
use crate::fonts::FontsConfig;
use crate::icons;
use crate::theme::ThemeProps;
use crate::ui::components::icon_button::{
    IconButton, IconButtonProps, IconButtonVariant,
};

const TOAST_WIDTH: f32 = 320.0;
const TOAST_PADDING: f32 = 12.0;
const TOAST_SPACING: f32 = 8.0;
const TOAST_RADIUS: f32 = 6.0;
const TOAST_MARKER_SIZE: f32 = 16.0;
const TOAST_CLOSE_SIZE: f32 = 20.0;
const TOAST_CLOSE_ICON_SIZE: f32 = 14.0;

/// UI events emitted by the notification stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastStackEvent {
    Dismiss(ToastKey),
}

/// Props for rendering the notification stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToastStackProps<'a> {
    pub(crate) toasts: &'a [Toast],
    pub(crate) spinner_frame: u8,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render toasts bottom-right, newest last.
pub(crate) fn view<'a>(
    props: ToastStackProps<'a>,
) -> Element<'a, ToastStackEvent> {
    let mut stack = column![].spacing(TOAST_SPACING).align_x(Alignment::End);
    for toast in props.toasts {
        stack = stack.push(toast_view(toast, props));
    }

    container(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(TOAST_PADDING)
        .align_x(Alignment::End)
        .align_y(Alignment::End)
        .into()
}

fn toast_view<'a>(
    toast: &'a Toast,
    props: ToastStackProps<'a>,
) -> Element<'a, ToastStackEvent> {
    let palette = props.theme.theme.iced_palette();
    let overlay = palette.overlay;
    let border = palette.border;
    let foreground = palette.foreground;
    let key = toast.key();

    let marker: Element<'a, ToastStackEvent> = match toast.kind() {
        ToastKind::Pending => spinner::view(SpinnerProps {
            size: SpinnerSize::Sm,
            frame: props.spinner_frame,
            theme: props.theme,
        })
        .map(|event| match event {}),
        ToastKind::Success => marker_dot(palette.success),
        ToastKind::Error => marker_dot(palette.danger),
    };

    let message = text(toast.message())
        .size(props.fonts.ui.size)
        .width(Length::Fill)
        .wrapping(Wrapping::Word);

    let close = IconButton::new(IconButtonProps {
        icon: icons::CLOSE,
        theme: props.theme,
        size: TOAST_CLOSE_SIZE,
        icon_size: TOAST_CLOSE_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .view()
    .map(move |_| ToastStackEvent::Dismiss(key));

    container(
        row![marker, message, close]
            .spacing(TOAST_SPACING)
            .align_y(Alignment::Center),
    )
    .width(Length::Fixed(TOAST_WIDTH))
    .padding(TOAST_PADDING)
    .style(move |_| iced::widget::container::Style {
        background: Some(overlay.into()),
        text_color: Some(foreground),
        border: Border {
            color: border,
            width: 1.0,
            radius: TOAST_RADIUS.into(),
        },
        ..Default::default()
    })
    .into()
}

fn marker_dot<'a>(color: Color) -> Element<'a, ToastStackEvent> {
    container(Space::new())
        .width(Length::Fixed(TOAST_MARKER_SIZE / 2.0))
        .height(Length::Fixed(TOAST_MARKER_SIZE / 2.0))
        .style(move |_| iced::widget::container::Style {
            background: Some(color.into()),
            border: Border {
                radius: (TOAST_MARKER_SIZE / 4.0).into(),
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}
