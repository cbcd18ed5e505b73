use iced::Task;

use super::{App, Event, routers};

pub(super) fn update(app: &mut App, event: Event) -> Task<Event> {
    if let Some(task) = routers::window::resolve_overlay_guard(app, &event) {
        return task;
    }

    route(app, event)
}

fn route(app: &mut App, event: Event) -> Task<Event> {
    use Event::*;

    match event {
        IcedReady => routers::runtime::route_iced_ready(app),
        // Widget surfaces
        Sidebar(event) => routers::sidebar::route_sidebar(app, event),
        Navbar(event) => routers::sidebar::route_navbar(app, event),
        TrashBox(event) => routers::documents::route_trash_box(app, event),
        DocumentsEmpty(event) => {
            routers::documents::route_documents_empty(app, event)
        },
        DocumentPage(event) => {
            routers::documents::route_document_page(app, event)
        },
        SettingsDialog(event) => {
            routers::settings::route_dialog(app, event)
        },
        ToastStack(event) => routers::toast::route_toast_stack(app, event),
        // Features
        Panel(event) => routers::panel::route_event(app, event),
        Documents(event) => routers::documents::route_event(app, event),
        Toast(event) => routers::toast::route_event(app, event),
        Settings(event) => routers::settings::route_event(app, event),
        SettingsApplied(settings) => {
            routers::settings::route_applied(app, &settings)
        },
        // Environment
        Navigate(route) => routers::navigation::route_navigate(app, route),
        SpinnerTick => routers::runtime::route_spinner_tick(app),
        Keyboard(event) => routers::window::route_keyboard(app, event),
        Window(event) => routers::window::route_window_event(app, event),
    }
}
