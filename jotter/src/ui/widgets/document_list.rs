use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::sidebar_item::{self, SidebarItemEvent, SidebarItemProps};
use super::spinner::{self, SpinnerProps, SpinnerSize};
use crate::features::documents::{DocumentId, DocumentRow};
use crate::fonts::FontsConfig;
use crate::icons;
use crate::theme::ThemeProps;

const EMPTY_ROW_BASE_INDENT: f32 = 25.0;
const EMPTY_ROW_LEVEL_INDENT: f32 = 12.0;
const EMPTY_ROW_HEIGHT: f32 = 24.0;
const LOADING_ROW_HEIGHT: f32 = 32.0;

/// UI events emitted by the document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentListEvent {
    Open(DocumentId),
    ToggleExpanded(DocumentId),
    AddChild(DocumentId),
    Archive(DocumentId),
}

/// Props for rendering the document tree.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DocumentListProps<'a> {
    pub(crate) rows: &'a [DocumentRow],
    pub(crate) active: Option<DocumentId>,
    pub(crate) loading: bool,
    pub(crate) spinner_frame: u8,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the flattened document tree, one row per visible node.
pub(crate) fn view<'a>(
    props: DocumentListProps<'a>,
) -> Element<'a, DocumentListEvent> {
    if props.loading {
        return loading_view(props);
    }

    let mut list = column![].spacing(0).width(Length::Fill);
    for document_row in props.rows {
        list = list.push(row_view(document_row, props));
    }

    list.into()
}

fn row_view<'a>(
    document_row: &'a DocumentRow,
    props: DocumentListProps<'a>,
) -> Element<'a, DocumentListEvent> {
    match document_row {
        DocumentRow::Item {
            id,
            title,
            level,
            expanded,
        } => {
            let id = *id;
            let item = sidebar_item::view(SidebarItemProps {
                label: title,
                icon: icons::FILE,
                level: *level,
                expanded: Some(*expanded),
                active: props.active == Some(id),
                show_actions: true,
                theme: props.theme,
                fonts: props.fonts,
            });

            item.map(move |event| match event {
                SidebarItemEvent::Pressed => DocumentListEvent::Open(id),
                SidebarItemEvent::ToggleExpanded => {
                    DocumentListEvent::ToggleExpanded(id)
                },
                SidebarItemEvent::AddChild => DocumentListEvent::AddChild(id),
                SidebarItemEvent::Archive => DocumentListEvent::Archive(id),
            })
        },
        DocumentRow::Empty { level } => empty_row(*level, props),
    }
}

fn empty_row<'a>(
    level: usize,
    props: DocumentListProps<'a>,
) -> Element<'a, DocumentListEvent> {
    let muted = props.theme.theme.iced_palette().muted_foreground;
    let indent = EMPTY_ROW_BASE_INDENT + EMPTY_ROW_LEVEL_INDENT * level as f32;

    let label = text("No pages inside")
        .size(props.fonts.ui.size * 0.9)
        .style(move |_| text::Style { color: Some(muted) });

    container(row![Space::new().width(Length::Fixed(indent)), label])
        .height(Length::Fixed(EMPTY_ROW_HEIGHT))
        .align_y(Alignment::Center)
        .into()
}

fn loading_view<'a>(
    props: DocumentListProps<'a>,
) -> Element<'a, DocumentListEvent> {
    let spinner = spinner::view(SpinnerProps {
        size: SpinnerSize::Default,
        frame: props.spinner_frame,
        theme: props.theme,
    })
    .map(|event| match event {});

    container(spinner)
        .width(Length::Fill)
        .height(Length::Fixed(LOADING_ROW_HEIGHT))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}
