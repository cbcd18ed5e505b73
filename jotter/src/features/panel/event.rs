use crate::features::documents::DocumentsEvent;

/// Events driving the panel layout controller.
#[derive(Debug, Clone)]
pub(crate) enum PanelEvent {
    /// Window width changed.
    ViewportResized { width: f32 },
    /// The current route changed.
    RouteChanged,
    /// Pointer went down on the resize rail.
    HandlePressed,
    /// Window-level pointer movement while resizing.
    PointerMoved { x: f32 },
    /// Window-level pointer release while resizing.
    PointerReleased,
    /// The window lost focus or is closing mid-drag.
    DragCancelled,
    ResetWidth,
    CollapsePressed,
    CreateDocument,
    OpenSettings,
    ToggleTrash,
    Documents(DocumentsEvent),
    Tick,
}
