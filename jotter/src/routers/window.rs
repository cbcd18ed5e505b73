use iced::keyboard::{self, Key, key};
use iced::{Size, Task, window};

use super::{documents, panel, settings};
use crate::app::{App, Event as AppEvent};
use crate::features::documents::DocumentsEvent;
use crate::features::panel::PanelEvent;
use crate::features::settings::SettingsEvent;
use crate::guards::{OverlayGuard, settings_dialog_guard, trash_popover_guard};

/// Resolve overlay guards and return early task when dispatch must stop.
pub(crate) fn resolve_overlay_guard(
    app: &mut App,
    event: &AppEvent,
) -> Option<Task<AppEvent>> {
    let guard = if app.features.settings().is_dialog_open() {
        settings_dialog_guard(event)
    } else if app.features.documents().is_trash_open() {
        trash_popover_guard(event)
    } else {
        return None;
    };

    match guard {
        OverlayGuard::Allow => None,
        OverlayGuard::Ignore => Some(Task::none()),
        OverlayGuard::Dismiss => Some(close_overlays(app)),
    }
}

/// Route window runtime event.
pub(crate) fn route_window_event(
    app: &mut App,
    event: window::Event,
) -> Task<AppEvent> {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => {
            apply_window_size(app, size)
        },
        window::Event::Unfocused | window::Event::CloseRequested => {
            panel::route_event(app, PanelEvent::DragCancelled)
        },
        _ => Task::none(),
    }
}

/// Route keyboard input: Escape closes the topmost overlay.
pub(crate) fn route_keyboard(
    app: &mut App,
    event: keyboard::Event,
) -> Task<AppEvent> {
    match event {
        keyboard::Event::KeyPressed {
            key: Key::Named(key::Named::Escape),
            ..
        } => close_overlays(app),
        _ => Task::none(),
    }
}

fn apply_window_size(app: &mut App, size: Size) -> Task<AppEvent> {
    app.state_mut().window_size = size;
    panel::route_event(app, PanelEvent::ViewportResized { width: size.width })
}

fn close_overlays(app: &mut App) -> Task<AppEvent> {
    if app.features.settings().is_dialog_open() {
        return settings::route_event(app, SettingsEvent::Close);
    }
    if app.features.documents().is_trash_open() {
        return documents::route_event(app, DocumentsEvent::CloseTrash);
    }
    Task::none()
}
