use iced::Task;

use crate::app::{App, Event as AppEvent};
use crate::features::Feature;
use crate::features::documents::{DocumentsCtx, DocumentsEvent};
use crate::features::panel::DEFAULT_DOCUMENT_TITLE;
use crate::ui::widgets::document_page::DocumentPageEvent;
use crate::ui::widgets::documents_empty::DocumentsEmptyEvent;
use crate::ui::widgets::trash_box::TrashBoxEvent;

/// Route a documents event into the documents feature.
pub(crate) fn route_event(
    app: &mut App,
    event: DocumentsEvent,
) -> Task<AppEvent> {
    let ctx = DocumentsCtx {
        open_document: app.state().route().document(),
    };
    app.features.documents_mut().reduce(event, &ctx)
}

/// Route trash popover UI event.
pub(crate) fn route_trash_box(
    app: &mut App,
    event: TrashBoxEvent,
) -> Task<AppEvent> {
    let event = match event {
        TrashBoxEvent::SearchChanged(value) => {
            DocumentsEvent::TrashSearchChanged(value)
        },
        TrashBoxEvent::Open(id) => DocumentsEvent::Open(id),
        TrashBoxEvent::Restore(id) => DocumentsEvent::Restore(id),
        TrashBoxEvent::Remove(id) => DocumentsEvent::Remove(id),
    };
    route_event(app, event)
}

/// Route empty-page UI event.
pub(crate) fn route_documents_empty(
    app: &mut App,
    event: DocumentsEmptyEvent,
) -> Task<AppEvent> {
    match event {
        DocumentsEmptyEvent::CreatePressed => route_event(
            app,
            DocumentsEvent::Create {
                title: String::from(DEFAULT_DOCUMENT_TITLE),
                parent: None,
            },
        ),
    }
}

/// Route open-document UI event against the document in view.
pub(crate) fn route_document_page(
    app: &mut App,
    event: DocumentPageEvent,
) -> Task<AppEvent> {
    let Some(id) = app.state().route().document() else {
        return Task::none();
    };

    match event {
        DocumentPageEvent::Restore => {
            route_event(app, DocumentsEvent::Restore(id))
        },
        DocumentPageEvent::Remove => {
            route_event(app, DocumentsEvent::Remove(id))
        },
    }
}
