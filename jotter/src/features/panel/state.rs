use super::model::{
    PANEL_DEFAULT_WIDTH, PANEL_TRANSITION_MS, PanelGeometry, PanelMode,
    clamp_panel_width, is_narrow_viewport,
};

/// Owned handle for one pointer resize session.
///
/// The window-level pointer listener is subscribed only while a session is
/// held, so dropping the session is what detaches it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DragSession {
    moved: bool,
    last_x: Option<f32>,
}

impl DragSession {
    fn new() -> Self {
        Self {
            moved: false,
            last_x: None,
        }
    }

    /// Return whether any pointer movement happened during the session.
    pub(crate) fn moved(&self) -> bool {
        self.moved
    }

    /// Return the last pointer x coordinate seen by the session.
    pub(crate) fn last_x(&self) -> Option<f32> {
        self.last_x
    }
}

/// In-flight width animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Transition {
    from: PanelGeometry,
    elapsed_ms: u64,
}

impl Transition {
    fn progress(&self) -> f32 {
        (self.elapsed_ms as f32 / PANEL_TRANSITION_MS as f32).min(1.0)
    }
}

/// Result of applying a viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BreakpointCrossing {
    None,
    IntoNarrow,
    IntoWide,
}

/// Width and visibility state of the sidebar panel.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PanelState {
    width: f32,
    collapsed: bool,
    narrow: bool,
    viewport_width: f32,
    transition: Option<Transition>,
    drag: Option<DragSession>,
}

impl PanelState {
    /// Build initial state for the given viewport width.
    pub(crate) fn new(viewport_width: f32) -> Self {
        let narrow = is_narrow_viewport(viewport_width);
        Self {
            width: PANEL_DEFAULT_WIDTH,
            collapsed: narrow,
            narrow,
            viewport_width,
            transition: None,
            drag: None,
        }
    }

    pub(crate) fn width(&self) -> f32 {
        self.width
    }

    pub(crate) fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    #[cfg(test)]
    pub(crate) fn is_narrow(&self) -> bool {
        self.narrow
    }

    pub(crate) fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    pub(crate) fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }

    /// Return the logical mode of the panel.
    pub(crate) fn mode(&self) -> PanelMode {
        if self.collapsed {
            PanelMode::Collapsed
        } else {
            PanelMode::Expanded { width: self.width }
        }
    }

    /// Return the settled geometry for the current state.
    pub(crate) fn geometry(&self) -> PanelGeometry {
        if self.collapsed {
            PanelGeometry::collapsed(self.viewport_width)
        } else if self.narrow {
            PanelGeometry::takeover(self.viewport_width)
        } else {
            PanelGeometry::docked(self.width, self.viewport_width)
        }
    }

    /// Return the geometry to draw this frame, blending transitions.
    pub(crate) fn rendered_geometry(&self) -> PanelGeometry {
        let target = self.geometry();
        match self.transition {
            Some(transition) => {
                transition.from.lerp(target, transition.progress())
            },
            None => target,
        }
    }

    /// Apply a new viewport width and settle the breakpoint effect.
    ///
    /// Crossing into narrow collapses the panel and releases any drag
    /// session. Crossing into wide expands a collapsed panel at the default
    /// width; an expanded panel keeps its width.
    pub(crate) fn set_viewport_width(
        &mut self,
        viewport_width: f32,
    ) -> BreakpointCrossing {
        let narrow = is_narrow_viewport(viewport_width);
        let crossing = match (self.narrow, narrow) {
            (false, true) => BreakpointCrossing::IntoNarrow,
            (true, false) => BreakpointCrossing::IntoWide,
            _ => BreakpointCrossing::None,
        };

        if crossing != BreakpointCrossing::None {
            self.begin_transition();
        }
        self.viewport_width = viewport_width;
        self.narrow = narrow;

        match crossing {
            BreakpointCrossing::IntoNarrow => {
                self.drag = None;
                self.collapsed = true;
            },
            BreakpointCrossing::IntoWide if self.collapsed => {
                self.collapsed = false;
                self.width = PANEL_DEFAULT_WIDTH;
            },
            BreakpointCrossing::IntoWide | BreakpointCrossing::None => {},
        }

        crossing
    }

    /// Collapse on navigation when the viewport is narrow.
    pub(crate) fn route_changed(&mut self) -> bool {
        if !self.narrow {
            return false;
        }

        self.collapse()
    }

    /// Hide the panel. Returns `false` when it was already hidden.
    pub(crate) fn collapse(&mut self) -> bool {
        self.drag = None;
        if self.collapsed {
            return false;
        }

        self.begin_transition();
        self.collapsed = true;
        true
    }

    /// Show the panel at the default width.
    pub(crate) fn reset_width(&mut self) {
        self.begin_transition();
        self.collapsed = false;
        self.width = PANEL_DEFAULT_WIDTH;
    }

    /// Acquire a resize session, replacing any stale one.
    pub(crate) fn begin_drag(&mut self) {
        self.drag = Some(DragSession::new());
    }

    /// Track the pointer. Returns `false` when no session is active.
    pub(crate) fn drag_to(&mut self, pointer_x: f32) -> bool {
        let Some(session) = self.drag.as_mut() else {
            return false;
        };

        session.moved = true;
        session.last_x = Some(pointer_x);
        self.transition = None;
        self.collapsed = false;
        self.width = clamp_panel_width(pointer_x);
        true
    }

    /// Release the active resize session, if any.
    pub(crate) fn end_drag(&mut self) -> Option<DragSession> {
        self.drag.take()
    }

    /// Advance the transition clock. Returns `true` once it finishes.
    pub(crate) fn advance_transition(&mut self, elapsed_ms: u64) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };

        transition.elapsed_ms =
            transition.elapsed_ms.saturating_add(elapsed_ms);
        if transition.elapsed_ms >= PANEL_TRANSITION_MS {
            self.transition = None;
            return true;
        }

        false
    }

    fn begin_transition(&mut self) {
        let from = self.rendered_geometry();
        self.transition = Some(Transition {
            from,
            elapsed_ms: 0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{BreakpointCrossing, PanelState};
    use crate::features::panel::model::{
        PANEL_MAX_WIDTH, PANEL_TRANSITION_MS, PanelGeometry, PanelMode,
    };

    #[test]
    fn given_wide_viewport_when_created_then_panel_is_expanded_at_default_width()
     {
        let state = PanelState::new(1024.0);

        assert_eq!(state.mode(), PanelMode::Expanded { width: 240.0 });
        assert!(!state.is_transitioning());
        assert!(!state.is_resizing());
    }

    #[test]
    fn given_narrow_viewport_when_created_then_panel_starts_collapsed() {
        let state = PanelState::new(500.0);

        assert_eq!(state.mode(), PanelMode::Collapsed);
        assert_eq!(state.geometry(), PanelGeometry::collapsed(500.0));
    }

    #[test]
    fn given_no_session_when_dragging_then_state_is_untouched() {
        let mut state = PanelState::new(1024.0);
        let before = state.clone();

        assert!(!state.drag_to(400.0));
        assert_eq!(state, before);
    }

    #[test]
    fn given_transition_in_flight_when_dragging_then_it_is_cancelled() {
        let mut state = PanelState::new(1024.0);
        state.reset_width();
        state.begin_drag();

        assert!(state.drag_to(300.0));

        assert!(!state.is_transitioning());
        assert_eq!(state.width(), 300.0);
    }

    #[test]
    fn given_collapsed_panel_when_dragging_then_panel_expands_to_pointer() {
        let mut state = PanelState::new(1024.0);
        state.collapse();
        state.begin_drag();

        state.drag_to(900.0);

        let expected = PanelMode::Expanded {
            width: PANEL_MAX_WIDTH,
        };
        assert_eq!(state.mode(), expected);
    }

    #[test]
    fn given_transition_when_clock_reaches_duration_then_flag_clears() {
        let mut state = PanelState::new(1024.0);
        state.collapse();

        assert!(!state.advance_transition(PANEL_TRANSITION_MS - 1));
        assert!(state.is_transitioning());
        assert!(state.advance_transition(1));
        assert!(!state.is_transitioning());
    }

    #[test]
    fn given_transition_midway_when_rendered_then_geometry_is_between_endpoints()
     {
        let mut state = PanelState::new(1024.0);
        state.collapse();
        state.advance_transition(PANEL_TRANSITION_MS / 2);

        let rendered = state.rendered_geometry();

        assert!(rendered.panel_width > 0.0);
        assert!(rendered.panel_width < 240.0);
    }

    #[test]
    fn given_same_side_of_breakpoint_when_resized_then_no_crossing_reported() {
        let mut state = PanelState::new(1024.0);

        assert_eq!(state.set_viewport_width(900.0), BreakpointCrossing::None);
        assert!(!state.is_transitioning());
        assert_eq!(state.geometry(), PanelGeometry::docked(240.0, 900.0));
    }

    #[test]
    fn given_expanded_narrow_panel_when_geometry_then_takeover_is_used() {
        let mut state = PanelState::new(500.0);
        state.reset_width();

        assert_eq!(state.geometry(), PanelGeometry::takeover(500.0));
    }
}
