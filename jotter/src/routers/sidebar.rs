use iced::Task;

use super::{documents, panel};
use crate::app::{App, Event as AppEvent};
use crate::features::documents::DocumentsEvent;
use crate::features::panel::{DEFAULT_DOCUMENT_TITLE, PanelEvent};
use crate::ui::widgets::document_list::DocumentListEvent;
use crate::ui::widgets::navbar::NavbarEvent;
use crate::ui::widgets::sidebar::SidebarEvent;

/// Translate side panel UI event into a panel controller event.
pub(crate) fn route_sidebar(
    app: &mut App,
    event: SidebarEvent,
) -> Task<AppEvent> {
    panel::route_event(app, panel_event(event))
}

/// Route top bar UI event.
pub(crate) fn route_navbar(
    app: &mut App,
    event: NavbarEvent,
) -> Task<AppEvent> {
    match event {
        NavbarEvent::ResetWidth => {
            panel::route_event(app, PanelEvent::ResetWidth)
        },
        NavbarEvent::Archive => match app.state().route().document() {
            Some(id) => {
                documents::route_event(app, DocumentsEvent::Archive(id))
            },
            None => Task::none(),
        },
    }
}

fn panel_event(event: SidebarEvent) -> PanelEvent {
    match event {
        SidebarEvent::CollapsePressed => PanelEvent::CollapsePressed,
        SidebarEvent::UserPressed | SidebarEvent::SettingsPressed => {
            PanelEvent::OpenSettings
        },
        SidebarEvent::NewPagePressed | SidebarEvent::AddPagePressed => {
            PanelEvent::CreateDocument
        },
        SidebarEvent::TrashPressed => PanelEvent::ToggleTrash,
        SidebarEvent::ResizePressed => PanelEvent::HandlePressed,
        SidebarEvent::DocumentList(event) => {
            PanelEvent::Documents(documents_event(event))
        },
    }
}

fn documents_event(event: DocumentListEvent) -> DocumentsEvent {
    match event {
        DocumentListEvent::Open(id) => DocumentsEvent::Open(id),
        DocumentListEvent::ToggleExpanded(id) => {
            DocumentsEvent::ToggleExpanded(id)
        },
        DocumentListEvent::AddChild(id) => DocumentsEvent::Create {
            title: String::from(DEFAULT_DOCUMENT_TITLE),
            parent: Some(id),
        },
        DocumentListEvent::Archive(id) => DocumentsEvent::Archive(id),
    }
}

#[cfg(test)]
mod tests {
    use super::{documents_event, panel_event};
    use crate::features::documents::{DocumentId, DocumentsEvent};
    use crate::features::panel::PanelEvent;
    use crate::ui::widgets::document_list::DocumentListEvent;
    use crate::ui::widgets::sidebar::SidebarEvent;

    #[test]
    fn given_rail_press_when_translated_then_panel_starts_resizing() {
        assert!(matches!(
            panel_event(SidebarEvent::ResizePressed),
            PanelEvent::HandlePressed
        ));
    }

    #[test]
    fn given_page_buttons_when_translated_then_both_create_documents() {
        let events =
            [SidebarEvent::NewPagePressed, SidebarEvent::AddPagePressed];

        for event in events {
            assert!(matches!(panel_event(event), PanelEvent::CreateDocument));
        }
    }

    #[test]
    fn given_add_child_when_translated_then_create_targets_parent() {
        let parent = DocumentId::new();

        let event = documents_event(DocumentListEvent::AddChild(parent));

        match event {
            DocumentsEvent::Create { title, parent: Some(id) } => {
                assert_eq!(title, "Untitled Document");
                assert_eq!(id, parent);
            },
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
