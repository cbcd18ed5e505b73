use crate::app::Event;
use crate::features::documents::DocumentsEvent;
use crate::features::panel::PanelEvent;
use crate::ui::widgets::sidebar::SidebarEvent;

/// Determines how the event loop should treat an incoming event while an
/// overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OverlayGuard {
    /// Let the event pass through to normal dispatch.
    Allow,
    /// Silently drop the event without closing the overlay.
    Ignore,
    /// Close the overlay instead of dispatching.
    Dismiss,
}

/// Classify an incoming event while the trash popover is open.
pub(crate) fn trash_popover_guard(event: &Event) -> OverlayGuard {
    use OverlayGuard::*;

    match event {
        Event::TrashBox(_) => Allow,
        Event::Sidebar(SidebarEvent::TrashPressed) => Allow,
        Event::Sidebar(_)
        | Event::Navbar(_)
        | Event::DocumentsEmpty(_)
        | Event::DocumentPage(_) => Dismiss,
        Event::Panel(event) if is_user_panel_event(event) => Dismiss,
        Event::Documents(event) if is_user_documents_event(event) => Dismiss,
        _ => Allow,
    }
}

/// Classify an incoming event while the settings dialog is open.
///
/// The dialog is modal: surfaces behind it never receive input.
pub(crate) fn settings_dialog_guard(event: &Event) -> OverlayGuard {
    use OverlayGuard::*;

    match event {
        Event::SettingsDialog(_) | Event::ToastStack(_) => Allow,
        Event::Sidebar(_)
        | Event::Navbar(_)
        | Event::TrashBox(_)
        | Event::DocumentsEmpty(_)
        | Event::DocumentPage(_) => Ignore,
        Event::Panel(event) if is_user_panel_event(event) => Ignore,
        Event::Documents(event) if is_user_documents_event(event) => Ignore,
        _ => Allow,
    }
}

/// Panel events caused by direct interaction rather than the environment.
fn is_user_panel_event(event: &PanelEvent) -> bool {
    matches!(
        event,
        PanelEvent::HandlePressed
            | PanelEvent::ResetWidth
            | PanelEvent::CollapsePressed
            | PanelEvent::CreateDocument
            | PanelEvent::OpenSettings
            | PanelEvent::ToggleTrash
            | PanelEvent::Documents(_)
    )
}

fn is_user_documents_event(event: &DocumentsEvent) -> bool {
    matches!(
        event,
        DocumentsEvent::Create { .. }
            | DocumentsEvent::ToggleExpanded(_)
            | DocumentsEvent::Open(_)
            | DocumentsEvent::Archive(_)
    )
}
