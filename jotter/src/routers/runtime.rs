use iced::Task;

use super::documents;
use crate::app::{App, Event as AppEvent};
use crate::features::documents::DocumentsEvent;

/// Kick off the initial document list read.
pub(crate) fn route_iced_ready(app: &mut App) -> Task<AppEvent> {
    documents::route_event(app, DocumentsEvent::Load)
}

/// Advance the loader animation by one frame.
pub(crate) fn route_spinner_tick(app: &mut App) -> Task<AppEvent> {
    app.state_mut().advance_spinner();
    Task::none()
}
