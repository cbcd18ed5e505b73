use iced::Task;

use crate::app::{App, Event as AppEvent};
use crate::features::Feature;
use crate::features::panel::PanelEvent;

/// Route a panel event into the layout controller.
pub(crate) fn route_event(app: &mut App, event: PanelEvent) -> Task<AppEvent> {
    let before = app.features.panel().mode();
    let task = app.features.panel_mut().reduce(event, &());
    let after = app.features.panel().mode();

    if before != after {
        log::debug!("panel mode changed: {before:?} -> {after:?}");
    }

    task
}
