use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Color, Element, Length};

use crate::fonts::FontsConfig;
use crate::theme::ThemeProps;

const BANNER_HEIGHT: f32 = 40.0;
const BANNER_SPACING: f32 = 8.0;
const BANNER_BUTTON_PADDING: [f32; 2] = [4.0, 10.0];
const BANNER_BUTTON_RADIUS: f32 = 4.0;
const PAGE_PADDING: [f32; 2] = [48.0, 54.0];

/// UI events emitted by an open document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentPageEvent {
    Restore,
    Remove,
}

/// Props for rendering an open document.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DocumentPageProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) is_archived: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the document heading, with a banner while it sits in the trash.
pub(crate) fn view<'a>(
    props: DocumentPageProps<'a>,
) -> Element<'a, DocumentPageEvent> {
    let palette = props.theme.theme.iced_palette();
    let danger = palette.danger;
    let foreground = palette.foreground;

    let heading = container(
        text(props.title)
            .size(props.fonts.heading.size)
            .font(props.fonts.heading.font_type),
    )
    .padding(PAGE_PADDING);

    let mut page = column![].width(Length::Fill).height(Length::Fill);

    if props.is_archived {
        let banner = row![
            Space::new().width(Length::Fill),
            text("This page is in the Trash.").size(props.fonts.ui.size),
            banner_button("Restore page", DocumentPageEvent::Restore),
            banner_button("Delete forever", DocumentPageEvent::Remove),
            Space::new().width(Length::Fill),
        ]
        .spacing(BANNER_SPACING)
        .align_y(Alignment::Center);

        page = page.push(
            container(banner)
                .width(Length::Fill)
                .height(Length::Fixed(BANNER_HEIGHT))
                .align_y(Alignment::Center)
                .style(move |_| iced::widget::container::Style {
                    background: Some(danger.into()),
                    text_color: Some(Color::WHITE),
                    ..Default::default()
                }),
        );
    }

    page = page.push(heading);

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            text_color: Some(foreground),
            ..Default::default()
        })
        .into()
}

fn banner_button<'a>(
    label: &'a str,
    event: DocumentPageEvent,
) -> Element<'a, DocumentPageEvent> {
    button(text(label))
        .on_press(event)
        .padding(BANNER_BUTTON_PADDING)
        .style(|_, status| {
            let alpha = match status {
                button::Status::Hovered | button::Status::Pressed => 0.25,
                _ => 0.0,
            };
            button::Style {
                background: Some(Color::WHITE.scale_alpha(alpha).into()),
                text_color: Color::WHITE,
                border: Border {
                    color: Color::WHITE,
                    width: 1.0,
                    radius: BANNER_BUTTON_RADIUS.into(),
                },
                ..Default::default()
            }
        })
        .into()
}
