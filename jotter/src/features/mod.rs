use iced::Task;

use crate::app::Event as AppEvent;

pub(crate) mod documents;
pub(crate) mod panel;
pub(crate) mod settings;
pub(crate) mod toast;

/// Shared feature contract for stateful domain modules.
pub(crate) trait Feature {
    type Event;
    type Ctx<'a>
    where
        Self: 'a;

    /// Reduce a typed feature event into state mutations and routed app tasks.
    fn reduce<'a>(
        &mut self,
        event: Self::Event,
        ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent>;
}

/// Root container for all stateful features.
pub(crate) struct Features {
    documents: documents::DocumentsFeature,
    panel: panel::PanelFeature,
    settings: settings::SettingsFeature,
    toast: toast::ToastFeature,
}

impl Features {
    /// Create a features container for the initial window and settings.
    pub(crate) fn new(
        viewport_width: f32,
        settings_state: settings::SettingsState,
        settings_file: settings::SettingsFile,
        store: documents::SharedDocumentStore,
    ) -> Self {
        Self {
            documents: documents::DocumentsFeature::new(store),
            panel: panel::PanelFeature::new(viewport_width),
            settings: settings::SettingsFeature::new(
                settings_state,
                settings_file,
            ),
            toast: toast::ToastFeature::new(),
        }
    }

    /// Return read-only access to document tree and trash state.
    pub(crate) fn documents(&self) -> &documents::DocumentsFeature {
        &self.documents
    }

    /// Return mutable access for routing document events.
    pub(crate) fn documents_mut(
        &mut self,
    ) -> &mut documents::DocumentsFeature {
        &mut self.documents
    }

    /// Return read-only access to panel layout queries.
    pub(crate) fn panel(&self) -> &panel::PanelFeature {
        &self.panel
    }

    /// Return mutable access for routing panel events.
    pub(crate) fn panel_mut(&mut self) -> &mut panel::PanelFeature {
        &mut self.panel
    }

    /// Return read-only access to settings feature state and queries.
    pub(crate) fn settings(&self) -> &settings::SettingsFeature {
        &self.settings
    }

    /// Return mutable access for routing settings events.
    pub(crate) fn settings_mut(&mut self) -> &mut settings::SettingsFeature {
        &mut self.settings
    }

    /// Return read-only access to visible toasts.
    pub(crate) fn toast(&self) -> &toast::ToastFeature {
        &self.toast
    }

    /// Return mutable access for routing toast events.
    pub(crate) fn toast_mut(&mut self) -> &mut toast::ToastFeature {
        &mut self.toast
    }
}
