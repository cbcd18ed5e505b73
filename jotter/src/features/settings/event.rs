use super::model::{Appearance, SettingsData};

/// UI and internal events handled by the settings feature reducer.
#[derive(Debug, Clone)]
pub(crate) enum SettingsEvent {
    Open,
    Close,
    UserNameChanged(String),
    AppearanceChanged(Appearance),
    Save,
    SaveCompleted(SettingsData),
    SaveFailed(String),
}
