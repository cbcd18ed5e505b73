use iced::Size;

use crate::features::documents::DocumentId;
use crate::ui::widgets::spinner::SPINNER_FRAMES;

/// Interval between spinner frames.
pub(crate) const SPINNER_TICK_MS: u64 = 80;

/// Screen shown in the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Route {
    #[default]
    Documents,
    Document(DocumentId),
}

impl Route {
    /// Return the document shown by this route, if any.
    pub(crate) fn document(self) -> Option<DocumentId> {
        match self {
            Route::Documents => None,
            Route::Document(id) => Some(id),
        }
    }
}

/// App-level environment shared by routers and the root view.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) window_size: Size,
    route: Route,
    spinner_frame: u8,
}

impl State {
    pub(crate) fn new(window_size: Size) -> Self {
        Self {
            window_size,
            ..Self::default()
        }
    }

    pub(crate) fn route(&self) -> Route {
        self.route
    }

    /// Switch route. Returns `false` when the route did not change.
    pub(crate) fn navigate(&mut self, route: Route) -> bool {
        if self.route == route {
            return false;
        }

        self.route = route;
        true
    }

    pub(crate) fn spinner_frame(&self) -> u8 {
        self.spinner_frame
    }

    pub(crate) fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES;
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::{Route, State};
    use crate::features::documents::DocumentId;
    use crate::ui::widgets::spinner::SPINNER_FRAMES;

    #[test]
    fn given_same_route_when_navigating_then_reports_no_change() {
        let mut state = State::new(Size::new(1024.0, 768.0));
        let id = DocumentId::new();

        assert!(!state.navigate(Route::Documents));
        assert!(state.navigate(Route::Document(id)));
        assert!(!state.navigate(Route::Document(id)));
        assert_eq!(state.route().document(), Some(id));
    }

    #[test]
    fn given_last_frame_when_spinner_advances_then_it_wraps() {
        let mut state = State::default();
        for _ in 0..SPINNER_FRAMES {
            state.advance_spinner();
        }

        assert_eq!(state.spinner_frame(), 0);
    }
}
