use iced::Task;

use super::event::SettingsEvent;
use super::model::SettingsData;
use super::state::SettingsState;
use super::storage::{SettingsFile, SettingsSource};
use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::features::toast::{ToastEvent, ToastKey};

const SAVED_MESSAGE: &str = "Settings saved.";
const SAVE_FAILED_MESSAGE: &str = "Failed to save settings.";

/// Settings feature root that owns settings state and reduction logic.
#[derive(Debug)]
pub(crate) struct SettingsFeature {
    state: SettingsState,
    file: SettingsFile,
}

impl SettingsFeature {
    /// Construct the settings feature with the given initial state.
    pub(crate) fn new(state: SettingsState, file: SettingsFile) -> Self {
        Self { state, file }
    }

    /// Return read-only access to settings state for the view layer.
    pub(crate) fn state(&self) -> &SettingsState {
        &self.state
    }

    /// Return the settings currently in effect.
    pub(crate) fn current(&self) -> &SettingsData {
        self.state.baseline()
    }

    pub(crate) fn is_dialog_open(&self) -> bool {
        self.state.is_dialog_open()
    }
}

impl Feature for SettingsFeature {
    type Event = SettingsEvent;
    type Ctx<'a> = ();

    fn reduce<'a>(
        &mut self,
        event: SettingsEvent,
        _ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            SettingsEvent::Open => {
                self.state.open_dialog();
                Task::none()
            },
            SettingsEvent::Close => {
                self.state.close_dialog();
                Task::none()
            },
            SettingsEvent::UserNameChanged(value) => {
                self.state.set_user_name(value);
                Task::none()
            },
            SettingsEvent::AppearanceChanged(value) => {
                self.state.set_appearance(value);
                Task::none()
            },
            SettingsEvent::Save => {
                if self.state.is_saving() {
                    return Task::none();
                }
                self.state.begin_save();
                request_save_settings(&self.state, self.file.clone())
            },
            SettingsEvent::SaveCompleted(settings) => {
                self.state.mark_saved(settings.clone());
                Task::batch([
                    Task::done(AppEvent::SettingsApplied(settings)),
                    Task::done(AppEvent::Toast(ToastEvent::success(
                        ToastKey::Settings,
                        SAVED_MESSAGE,
                    ))),
                ])
            },
            SettingsEvent::SaveFailed(message) => {
                log::warn!("settings save failed: {message}");
                self.state.mark_save_failed();
                Task::done(AppEvent::Toast(ToastEvent::error(
                    ToastKey::Settings,
                    SAVE_FAILED_MESSAGE,
                )))
            },
        }
    }
}

/// Read settings synchronously for the first frame.
pub(crate) fn load_initial_settings_state(
    file: &SettingsFile,
) -> SettingsState {
    let mut state = SettingsState::default();
    match file.load() {
        Ok((settings, source)) => {
            apply_loaded_settings(&mut state, settings, source);
        },
        Err(err) => log::warn!("settings read failed: {err}"),
    }
    state
}

fn request_save_settings(
    state: &SettingsState,
    file: SettingsFile,
) -> Task<AppEvent> {
    let normalized = state.normalized_draft();
    Task::perform(
        async move {
            match file.save(&normalized) {
                Ok(()) => Ok(normalized),
                Err(err) => Err(format!("{err}")),
            }
        },
        |result| match result {
            Ok(settings) => {
                AppEvent::Settings(SettingsEvent::SaveCompleted(settings))
            },
            Err(message) => {
                AppEvent::Settings(SettingsEvent::SaveFailed(message))
            },
        },
    )
}

fn apply_loaded_settings(
    state: &mut SettingsState,
    settings: SettingsData,
    source: SettingsSource,
) {
    match &source {
        SettingsSource::Invalid(message) => {
            log::warn!("settings file invalid: {message}");
        },
        SettingsSource::Defaults => {
            log::info!("settings file missing, using defaults");
        },
        SettingsSource::File => {},
    }

    state.replace_with_settings(settings);
}

#[cfg(test)]
mod tests {
    use super::{SettingsFeature, apply_loaded_settings};
    use crate::features::Feature;
    use crate::features::settings::event::SettingsEvent;
    use crate::features::settings::model::{Appearance, SettingsData};
    use crate::features::settings::state::SettingsState;
    use crate::features::settings::storage::{SettingsFile, SettingsSource};

    fn feature() -> SettingsFeature {
        let path = std::env::temp_dir()
            .join(format!("jotter-settings-feature-{}", std::process::id()))
            .join("settings.json");
        SettingsFeature::new(SettingsState::default(), SettingsFile::new(path))
    }

    #[test]
    fn given_save_event_when_save_succeeds_then_marks_state_saved() {
        let mut f = feature();
        let _task = f.reduce(SettingsEvent::Open, &());
        let _task = f.reduce(
            SettingsEvent::UserNameChanged(String::from("Ada")),
            &(),
        );
        let _task = f.reduce(SettingsEvent::Save, &());
        assert!(f.state.is_saving());
        let normalized = f.state.normalized_draft();

        let _task = f.reduce(SettingsEvent::SaveCompleted(normalized), &());

        assert!(!f.state.is_dirty());
        assert!(!f.state.is_saving());
        assert!(!f.is_dialog_open());
        assert_eq!(f.current().user_name(), "Ada");
    }

    #[test]
    fn given_save_event_when_save_fails_then_keeps_state_dirty() {
        let mut f = feature();
        let _task = f.reduce(SettingsEvent::Open, &());
        let _task = f.reduce(
            SettingsEvent::AppearanceChanged(Appearance::Light),
            &(),
        );
        let _task = f.reduce(SettingsEvent::Save, &());

        let _task = f.reduce(
            SettingsEvent::SaveFailed(String::from("save failed")),
            &(),
        );

        assert!(f.state.is_dirty());
        assert!(!f.state.is_saving());
        assert!(f.is_dialog_open());
        assert_ne!(f.state.baseline(), f.state.draft());
    }

    #[test]
    fn given_loaded_file_when_applied_then_state_is_replaced() {
        let mut settings_state = SettingsState::default();
        settings_state.set_user_name(String::from("Someone"));
        let loaded = SettingsData::default();

        apply_loaded_settings(
            &mut settings_state,
            loaded.clone(),
            SettingsSource::File,
        );

        assert_eq!(settings_state.draft(), &loaded);
        assert!(!settings_state.is_dirty());
    }

    #[test]
    fn given_invalid_load_when_applied_then_defaults_are_kept() {
        let mut settings_state = SettingsState::default();

        apply_loaded_settings(
            &mut settings_state,
            SettingsData::default(),
            SettingsSource::Invalid(String::from("bad json")),
        );

        assert_eq!(settings_state.baseline(), &SettingsData::default());
    }
}
