use serde::Serialize;

const FALLBACK_USER_NAME: &str = "Guest";

/// Color scheme applied to the whole window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Appearance {
    Light,
    #[default]
    Dark,
}

impl Appearance {
    pub(crate) const ALL: [Self; 2] = [Self::Light, Self::Dark];

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Appearance::Light),
            "dark" => Some(Appearance::Dark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Appearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Appearance::Light => f.write_str("Light"),
            Appearance::Dark => f.write_str("Dark"),
        }
    }
}

/// Typed settings payload used for persistence and UI state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SettingsData {
    user_name: String,
    appearance: Appearance,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            appearance: Appearance::default(),
        }
    }
}

impl SettingsData {
    /// Return the name shown in the user badge.
    pub(crate) fn user_name(&self) -> &str {
        &self.user_name
    }

    pub(crate) fn set_user_name(&mut self, value: String) {
        self.user_name = value;
    }

    pub(crate) fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub(crate) fn set_appearance(&mut self, value: Appearance) {
        self.appearance = value;
    }

    /// Build settings from loosely typed JSON, keeping defaults for
    /// missing or invalid fields.
    pub(crate) fn from_json(value: &serde_json::Value) -> Self {
        let mut settings = SettingsData::default();

        if let Some(user_name) = read_string_field(value, "user_name")
            .filter(|value| is_non_empty(value))
        {
            settings.user_name = user_name;
        }

        if let Some(appearance) = read_string_field(value, "appearance")
            .and_then(|value| Appearance::parse(&value))
        {
            settings.appearance = appearance;
        }

        settings
    }

    pub(crate) fn normalized(&self) -> Self {
        let user_name = if is_non_empty(&self.user_name) {
            self.user_name.trim().to_string()
        } else {
            default_user_name()
        };

        Self {
            user_name,
            appearance: self.appearance,
        }
    }
}

fn default_user_name() -> String {
    std::env::var("USER")
        .ok()
        .filter(|value| is_non_empty(value))
        .unwrap_or_else(|| String::from(FALLBACK_USER_NAME))
}

fn read_string_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(ToString::to_string)
}

fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}
