#[path = "routers/mod.rs"]
pub(crate) mod routers;
#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use std::sync::Arc;

use iced::{Element, Size, Subscription, Task, Theme};

use crate::features::Features;
use crate::features::documents::{
    DocumentsEvent, JsonDocumentStore, SharedDocumentStore,
};
use crate::features::panel::PanelEvent;
use crate::features::settings::{
    SettingsData, SettingsEvent, SettingsFile, load_initial_settings_state,
};
use crate::features::toast::ToastEvent;
use crate::fonts::FontsConfig;
use crate::state::{Route, State};
use crate::theme::ThemeManager;
use crate::ui::widgets::{
    document_page, documents_empty, navbar, settings_dialog, sidebar,
    toast_stack, trash_box,
};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1024.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum Event {
    IcedReady,
    Sidebar(sidebar::SidebarEvent),
    Navbar(navbar::NavbarEvent),
    TrashBox(trash_box::TrashBoxEvent),
    DocumentsEmpty(documents_empty::DocumentsEmptyEvent),
    DocumentPage(document_page::DocumentPageEvent),
    SettingsDialog(settings_dialog::SettingsDialogEvent),
    ToastStack(toast_stack::ToastStackEvent),
    Panel(PanelEvent),
    Documents(DocumentsEvent),
    Toast(ToastEvent),
    Settings(SettingsEvent),
    SettingsApplied(SettingsData),
    Navigate(Route),
    SpinnerTick,
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

pub(crate) struct App {
    theme_manager: ThemeManager,
    fonts: FontsConfig,
    state: State,
    pub(crate) features: Features,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Event>) {
        let store: SharedDocumentStore =
            Arc::new(JsonDocumentStore::open_default());
        Self::with_store(store)
    }

    /// Build the app around an explicit document store.
    pub(crate) fn with_store(
        store: SharedDocumentStore,
    ) -> (Self, Task<Event>) {
        let settings_file = SettingsFile::open_default();
        let settings_state = load_initial_settings_state(&settings_file);
        let theme_manager =
            ThemeManager::new(settings_state.baseline().appearance());
        let fonts = FontsConfig::default();

        let window_size = Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        };
        let state = State::new(window_size);
        let features = Features::new(
            window_size.width,
            settings_state,
            settings_file,
            store,
        );

        let app = App {
            theme_manager,
            fonts,
            state,
            features,
        };

        (app, Task::done(()).map(|_: ()| Event::IcedReady))
    }

    pub(crate) fn title(&self) -> String {
        let open = self
            .state
            .route()
            .document()
            .and_then(|id| self.features.documents().document(id));

        match open {
            Some(document) => format!("{} - Jotter", document.title),
            None => String::from("Jotter"),
        }
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    pub(crate) fn subscription(&self) -> Subscription<Event> {
        subscription::subscription(self)
    }

    pub(crate) fn update(&mut self, event: Event) -> Task<Event> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, Event, Theme, iced::Renderer> {
        view::view(self)
    }

    /// Return read-only app environment.
    pub(crate) fn state(&self) -> &State {
        &self.state
    }

    /// Return mutable app environment.
    pub(crate) fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Return mutable access to theme manager for appearance updates.
    pub(crate) fn theme_manager_mut(&mut self) -> &mut ThemeManager {
        &mut self.theme_manager
    }

    /// Return read-only access to theme manager.
    pub(crate) fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    /// Return read-only fonts configuration.
    pub(crate) fn fonts(&self) -> &FontsConfig {
        &self.fonts
    }
}
