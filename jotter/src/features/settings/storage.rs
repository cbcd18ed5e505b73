use std::path::PathBuf;

use super::errors::SettingsError;
use super::model::SettingsData;
use crate::config;

const SETTINGS_FILE_NAME: &str = "settings.json";

/// Where the settings in effect came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingsSource {
    File,
    /// No settings file exists yet.
    Defaults,
    /// The file exists but is not JSON; defaults are used instead.
    Invalid(String),
}

/// Handle to the settings file on disk.
#[derive(Debug, Clone)]
pub(crate) struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub(crate) fn open_default() -> Self {
        Self::new(config::config_file_path(SETTINGS_FILE_NAME))
    }

    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the file. Unknown or malformed fields fall back per field.
    pub(crate) fn load(
        &self,
    ) -> Result<(SettingsData, SettingsSource), SettingsError> {
        let Some(data) = config::read_optional(&self.path)? else {
            return Ok((SettingsData::default(), SettingsSource::Defaults));
        };

        Ok(match serde_json::from_str::<serde_json::Value>(&data) {
            Ok(value) => {
                (SettingsData::from_json(&value), SettingsSource::File)
            },
            Err(err) => (
                SettingsData::default(),
                SettingsSource::Invalid(err.to_string()),
            ),
        })
    }

    pub(crate) fn save(
        &self,
        settings: &SettingsData,
    ) -> Result<(), SettingsError> {
        let payload = serde_json::to_string_pretty(settings)?;
        config::write_atomic(&self.path, payload.as_bytes())?;
        Ok(())
    }
}
