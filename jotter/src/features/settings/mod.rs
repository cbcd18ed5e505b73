mod errors;
mod event;
mod feature;
mod model;
mod state;
mod storage;

#[allow(unused_imports)]
pub(crate) use errors::SettingsError;
pub(crate) use event::SettingsEvent;
pub(crate) use feature::{SettingsFeature, load_initial_settings_state};
pub(crate) use model::{Appearance, SettingsData};
pub(crate) use state::SettingsState;
pub(crate) use storage::SettingsFile;
