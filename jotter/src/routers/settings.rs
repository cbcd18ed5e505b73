use iced::Task;

use crate::app::{App, Event as AppEvent};
use crate::features::Feature;
use crate::features::settings::{SettingsData, SettingsEvent};
use crate::ui::widgets::settings_dialog::SettingsDialogEvent;

/// Route settings event into feature reduction.
pub(crate) fn route_event(
    app: &mut App,
    event: SettingsEvent,
) -> Task<AppEvent> {
    app.features.settings_mut().reduce(event, &())
}

/// Route settings dialog UI event.
pub(crate) fn route_dialog(
    app: &mut App,
    event: SettingsDialogEvent,
) -> Task<AppEvent> {
    let event = match event {
        SettingsDialogEvent::UserNameChanged(value) => {
            SettingsEvent::UserNameChanged(value)
        },
        SettingsDialogEvent::AppearanceSelected(value) => {
            SettingsEvent::AppearanceChanged(value)
        },
        SettingsDialogEvent::Save => SettingsEvent::Save,
        SettingsDialogEvent::Close => SettingsEvent::Close,
    };
    route_event(app, event)
}

/// Apply persisted settings to the running app.
pub(crate) fn route_applied(
    app: &mut App,
    settings: &SettingsData,
) -> Task<AppEvent> {
    if app.theme_manager_mut().set_appearance(settings.appearance()) {
        log::info!("appearance switched to {}", settings.appearance());
    }
    Task::none()
}
