use iced::Task;

use crate::app::{App, Event as AppEvent};
use crate::features::Feature;
use crate::features::toast::ToastEvent;
use crate::ui::widgets::toast_stack::ToastStackEvent;

/// Route a notification event into the toast stack.
pub(crate) fn route_event(app: &mut App, event: ToastEvent) -> Task<AppEvent> {
    app.features.toast_mut().reduce(event, &())
}

/// Route toast stack UI event.
pub(crate) fn route_toast_stack(
    app: &mut App,
    event: ToastStackEvent,
) -> Task<AppEvent> {
    match event {
        ToastStackEvent::Dismiss(key) => {
            route_event(app, ToastEvent::Dismiss(key))
        },
    }
}
