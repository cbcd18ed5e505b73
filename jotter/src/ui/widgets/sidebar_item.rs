use iced::widget::text::Wrapping;
use iced::widget::{Space, button, container, mouse_area, row, svg, text};
use iced::{Alignment, Border, Element, Length, alignment};

use crate::fonts::FontsConfig;
use crate::icons;
use crate::theme::{StyleOverrides, ThemeProps};
use crate::ui::components::icon_button::{
    IconButton, IconButtonEvent, IconButtonProps, IconButtonVariant,
};

pub(crate) const SIDEBAR_ITEM_HEIGHT: f32 = 28.0;
const SIDEBAR_ITEM_BASE_INDENT: f32 = 12.0;
const SIDEBAR_ITEM_LEVEL_INDENT: f32 = 12.0;
const SIDEBAR_ITEM_ICON_SIZE: f32 = 16.0;
const SIDEBAR_ITEM_CHEVRON_SIZE: f32 = 14.0;
const SIDEBAR_ITEM_ACTION_SIZE: f32 = 20.0;
const SIDEBAR_ITEM_ACTION_ICON_SIZE: f32 = 14.0;
const SIDEBAR_ITEM_SPACING: f32 = 6.0;
const SIDEBAR_ITEM_RIGHT_PADDING: f32 = 6.0;
const SIDEBAR_ITEM_ACTION_HOVER_ALPHA: f32 = 0.12;

/// UI events emitted by a sidebar row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarItemEvent {
    Pressed,
    ToggleExpanded,
    AddChild,
    Archive,
}

/// Props for rendering a single sidebar row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarItemProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) icon: &'static [u8],
    pub(crate) level: usize,
    /// `Some` for tree rows, carrying the expansion state.
    pub(crate) expanded: Option<bool>,
    pub(crate) active: bool,
    /// Show the add-child and archive actions on the right.
    pub(crate) show_actions: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render a clickable, optionally indented sidebar row.
pub(crate) fn view<'a>(
    props: SidebarItemProps<'a>,
) -> Element<'a, SidebarItemEvent> {
    let palette = props.theme.theme.iced_palette();
    let muted = palette.muted_foreground;
    let foreground = palette.foreground;
    let hover = palette.hover;
    let active = props.active;

    let mut content =
        row![Space::new().width(Length::Fixed(indent(props.level)))]
            .spacing(SIDEBAR_ITEM_SPACING)
            .align_y(Alignment::Center)
            .height(Length::Fill);

    if let Some(expanded) = props.expanded {
        let chevron = if expanded {
            icons::CHEVRON_DOWN
        } else {
            icons::CHEVRON_RIGHT
        };
        let chevron = svg::Svg::new(svg::Handle::from_memory(chevron))
            .width(Length::Fixed(SIDEBAR_ITEM_CHEVRON_SIZE))
            .height(Length::Fixed(SIDEBAR_ITEM_CHEVRON_SIZE))
            .style(move |_, _| svg::Style { color: Some(muted) });
        content = content.push(
            mouse_area(chevron).on_press(SidebarItemEvent::ToggleExpanded),
        );
    }

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(SIDEBAR_ITEM_ICON_SIZE))
        .height(Length::Fixed(SIDEBAR_ITEM_ICON_SIZE))
        .style(move |_, _| svg::Style { color: Some(muted) });

    let label = text(props.label)
        .size(props.fonts.ui.size)
        .font(props.fonts.ui.font_type)
        .width(Length::Fill)
        .wrapping(Wrapping::None);

    content = content.push(icon).push(label);

    if props.show_actions {
        content = content
            .push(
                action_button(icons::TRASH, IconButtonVariant::Danger, props)
                    .map(|_| SidebarItemEvent::Archive),
            )
            .push(
                action_button(icons::PLUS, IconButtonVariant::Standard, props)
                    .map(|_| SidebarItemEvent::AddChild),
            );
    }

    let content = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([0.0, SIDEBAR_ITEM_RIGHT_PADDING])
        .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(SidebarItemEvent::Pressed)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(SIDEBAR_ITEM_HEIGHT))
        .style(move |_, status| {
            let highlighted = active
                || matches!(
                    status,
                    button::Status::Hovered | button::Status::Pressed
                );
            button::Style {
                background: highlighted.then(|| hover.into()),
                text_color: if active { foreground } else { muted },
                border: Border::default(),
                ..Default::default()
            }
        })
        .into()
}

fn indent(level: usize) -> f32 {
    SIDEBAR_ITEM_BASE_INDENT + SIDEBAR_ITEM_LEVEL_INDENT * level as f32
}

fn action_button<'a>(
    icon: &'static [u8],
    variant: IconButtonVariant,
    props: SidebarItemProps<'a>,
) -> Element<'a, IconButtonEvent> {
    // Actions sit on an already hovered row.
    let foreground = props.theme.theme.iced_palette().foreground;
    let hover = foreground.scale_alpha(SIDEBAR_ITEM_ACTION_HOVER_ALPHA);
    let theme = props.theme.with_overrides(StyleOverrides {
        background: Some(hover),
        foreground: None,
    });

    IconButton::new(IconButtonProps {
        icon,
        theme,
        size: SIDEBAR_ITEM_ACTION_SIZE,
        icon_size: SIDEBAR_ITEM_ACTION_ICON_SIZE,
        variant,
    })
    .view()
}
