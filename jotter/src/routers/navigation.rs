use iced::Task;

use super::panel;
use crate::app::{App, Event as AppEvent};
use crate::features::panel::PanelEvent;
use crate::state::Route;

/// Switch the main area and let the panel react to the route change.
pub(crate) fn route_navigate(app: &mut App, route: Route) -> Task<AppEvent> {
    if !app.state_mut().navigate(route) {
        return Task::none();
    }

    log::debug!("navigated to {route:?}");
    panel::route_event(app, PanelEvent::RouteChanged)
}
