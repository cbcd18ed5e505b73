use super::model::{Appearance, SettingsData};

/// Editable settings with a persisted baseline and dialog visibility.
#[derive(Debug, Clone)]
pub(crate) struct SettingsState {
    baseline: SettingsData,
    draft: SettingsData,
    dialog_open: bool,
    saving: bool,
    dirty: bool,
}

impl SettingsState {
    /// Return persisted settings currently in effect.
    pub(crate) fn baseline(&self) -> &SettingsData {
        &self.baseline
    }

    /// Return editable settings draft.
    pub(crate) fn draft(&self) -> &SettingsData {
        &self.draft
    }

    pub(crate) fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub(crate) fn is_saving(&self) -> bool {
        self.saving
    }

    /// Return whether the draft differs from the persisted baseline.
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Create state from a persisted settings payload.
    pub(crate) fn from_settings(settings: SettingsData) -> Self {
        Self {
            baseline: settings.clone(),
            draft: settings,
            dialog_open: false,
            saving: false,
            dirty: false,
        }
    }

    /// Replace persisted and draft values using freshly loaded settings.
    pub(crate) fn replace_with_settings(&mut self, settings: SettingsData) {
        self.baseline = settings.clone();
        self.draft = settings;
        self.dirty = false;
    }

    /// Show the dialog with a draft reset to the baseline.
    pub(crate) fn open_dialog(&mut self) {
        self.draft = self.baseline.clone();
        self.dirty = false;
        self.dialog_open = true;
    }

    /// Hide the dialog and drop unsaved edits.
    pub(crate) fn close_dialog(&mut self) {
        self.draft = self.baseline.clone();
        self.dirty = false;
        self.dialog_open = false;
    }

    /// Return normalized draft settings ready for persistence.
    pub(crate) fn normalized_draft(&self) -> SettingsData {
        self.draft.normalized()
    }

    pub(crate) fn begin_save(&mut self) {
        self.saving = true;
    }

    pub(crate) fn mark_saved(&mut self, settings: SettingsData) {
        self.replace_with_settings(settings);
        self.saving = false;
        self.dialog_open = false;
    }

    pub(crate) fn mark_save_failed(&mut self) {
        self.saving = false;
    }

    pub(crate) fn set_user_name(&mut self, value: String) {
        self.draft.set_user_name(value);
        self.update_dirty();
    }

    pub(crate) fn set_appearance(&mut self, value: Appearance) {
        self.draft.set_appearance(value);
        self.update_dirty();
    }

    fn update_dirty(&mut self) {
        self.dirty = self.draft != self.baseline;
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::from_settings(SettingsData::default())
    }
}

#[cfg(test)]
mod tests {
    use super::SettingsState;
    use crate::features::settings::model::Appearance;

    #[test]
    fn given_default_state_when_set_user_name_then_marks_dirty() {
        let mut state = SettingsState::default();

        state.set_user_name(String::from("Ada Lovelace"));

        assert!(state.is_dirty());
        assert_eq!(state.draft().user_name(), "Ada Lovelace");
    }

    #[test]
    fn given_dirty_draft_when_dialog_closed_then_restores_baseline() {
        let mut state = SettingsState::default();
        state.open_dialog();
        state.set_appearance(Appearance::Light);

        state.close_dialog();

        assert!(!state.is_dirty());
        assert!(!state.is_dialog_open());
        assert_eq!(state.draft(), state.baseline());
    }

    #[test]
    fn given_same_value_when_set_then_state_stays_clean() {
        let mut state = SettingsState::default();
        let appearance = state.draft().appearance();

        state.set_appearance(appearance);

        assert!(!state.is_dirty());
    }
}
