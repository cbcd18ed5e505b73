use iced::Task;

use super::event::PanelEvent;
use super::model::{
    DEFAULT_DOCUMENT_TITLE, PANEL_TICK_MS, PanelGeometry, PanelMode,
};
use super::state::{BreakpointCrossing, PanelState};
use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::features::documents::DocumentsEvent;
use crate::features::settings::SettingsEvent;

/// Panel layout controller: owns sidebar width and visibility.
pub(crate) struct PanelFeature {
    state: PanelState,
}

impl PanelFeature {
    /// Construct the controller for the initial viewport width.
    pub(crate) fn new(viewport_width: f32) -> Self {
        Self {
            state: PanelState::new(viewport_width),
        }
    }

    /// Return whether the panel is hidden.
    pub(crate) fn is_collapsed(&self) -> bool {
        self.state.is_collapsed()
    }

    /// Return whether the viewport is at or below the mobile breakpoint.
    #[cfg(test)]
    pub(crate) fn is_narrow(&self) -> bool {
        self.state.is_narrow()
    }

    /// Return whether a pointer resize session is active.
    pub(crate) fn is_resizing(&self) -> bool {
        self.state.is_resizing()
    }

    /// Return whether a width animation is in flight.
    pub(crate) fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    /// Return the logical panel mode.
    pub(crate) fn mode(&self) -> PanelMode {
        self.state.mode()
    }

    /// Return the geometry to render this frame.
    pub(crate) fn geometry(&self) -> PanelGeometry {
        self.state.rendered_geometry()
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &PanelState {
        &self.state
    }
}

impl Feature for PanelFeature {
    type Event = PanelEvent;
    type Ctx<'a> = ();

    fn reduce<'a>(
        &mut self,
        event: PanelEvent,
        _ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            PanelEvent::ViewportResized { width } => {
                apply_viewport_width(&mut self.state, width);
                Task::none()
            },
            PanelEvent::RouteChanged => {
                if self.state.route_changed() {
                    log::debug!("panel collapsed after navigation");
                }
                Task::none()
            },
            PanelEvent::HandlePressed => {
                self.state.begin_drag();
                Task::none()
            },
            PanelEvent::PointerMoved { x } => {
                self.state.drag_to(x);
                Task::none()
            },
            PanelEvent::PointerReleased => {
                finish_drag(&mut self.state);
                Task::none()
            },
            PanelEvent::DragCancelled => {
                if self.state.end_drag().is_some() {
                    log::debug!("panel resize cancelled");
                }
                Task::none()
            },
            PanelEvent::ResetWidth => {
                self.state.reset_width();
                Task::none()
            },
            PanelEvent::CollapsePressed => {
                self.state.collapse();
                Task::none()
            },
            PanelEvent::CreateDocument => {
                Task::done(AppEvent::Documents(DocumentsEvent::Create {
                    title: String::from(DEFAULT_DOCUMENT_TITLE),
                    parent: None,
                }))
            },
            PanelEvent::OpenSettings => {
                Task::done(AppEvent::Settings(SettingsEvent::Open))
            },
            PanelEvent::ToggleTrash => {
                Task::done(AppEvent::Documents(DocumentsEvent::ToggleTrash))
            },
            PanelEvent::Documents(event) => {
                Task::done(AppEvent::Documents(event))
            },
            PanelEvent::Tick => {
                self.state.advance_transition(PANEL_TICK_MS);
                Task::none()
            },
        }
    }
}

fn apply_viewport_width(state: &mut PanelState, width: f32) {
    match state.set_viewport_width(width) {
        BreakpointCrossing::IntoNarrow => {
            log::debug!("viewport {width}px is narrow, panel collapsed");
        },
        BreakpointCrossing::IntoWide => {
            log::debug!("viewport {width}px is wide, panel docked");
        },
        BreakpointCrossing::None => {},
    }
}

fn finish_drag(state: &mut PanelState) {
    let Some(session) = state.end_drag() else {
        return;
    };

    if session.moved() {
        log::debug!(
            "panel resized to {}px (pointer at {:?})",
            state.width(),
            session.last_x()
        );
    } else {
        state.reset_width();
    }
}

#[cfg(test)]
mod tests {
    use super::PanelFeature;
    use crate::features::Feature;
    use crate::features::panel::model::{
        PANEL_MAX_WIDTH, PANEL_MIN_WIDTH, PANEL_TICK_MS, PANEL_TRANSITION_MS,
        PanelGeometry, PanelMode,
    };
    use crate::features::panel::{PanelEvent, PanelState};

    fn reduce(feature: &mut PanelFeature, event: PanelEvent) {
        let _task = feature.reduce(event, &());
    }

    fn drag(feature: &mut PanelFeature, positions: &[f32]) {
        reduce(feature, PanelEvent::HandlePressed);
        for &x in positions {
            reduce(feature, PanelEvent::PointerMoved { x });
        }
        reduce(feature, PanelEvent::PointerReleased);
    }

    fn settle(feature: &mut PanelFeature) {
        while feature.is_transitioning() {
            reduce(feature, PanelEvent::Tick);
        }
    }

    #[test]
    fn given_active_drag_when_pointer_moves_then_width_tracks_clamped_pointer()
    {
        let mut feature = PanelFeature::new(1024.0);
        reduce(&mut feature, PanelEvent::HandlePressed);

        let mut previous = PANEL_MIN_WIDTH;
        for x in [-20.0, 100.0, 240.0, 300.5, 410.0, 480.0, 700.0, 2000.0] {
            reduce(&mut feature, PanelEvent::PointerMoved { x });
            let width = feature.state().width();

            assert_eq!(
                width,
                x.round().clamp(PANEL_MIN_WIDTH, PANEL_MAX_WIDTH)
            );
            assert!(width >= previous);
            assert!(!feature.is_transitioning());
            previous = width;
        }
    }

    #[test]
    fn given_dragged_panel_when_collapsed_and_expanded_then_width_resets_to_default()
     {
        let mut feature = PanelFeature::new(1024.0);
        drag(&mut feature, &[420.0]);
        assert_eq!(feature.mode(), PanelMode::Expanded { width: 420.0 });

        reduce(&mut feature, PanelEvent::CollapsePressed);
        reduce(&mut feature, PanelEvent::ResetWidth);

        assert_eq!(feature.mode(), PanelMode::Expanded {
            width: PANEL_MIN_WIDTH
        });
    }

    #[test]
    fn given_narrow_viewport_when_route_changes_then_panel_is_collapsed() {
        let mut feature = PanelFeature::new(500.0);
        reduce(&mut feature, PanelEvent::ResetWidth);
        assert!(!feature.is_collapsed());

        reduce(&mut feature, PanelEvent::RouteChanged);
        assert!(feature.is_collapsed());

        reduce(&mut feature, PanelEvent::RouteChanged);
        assert!(feature.is_collapsed());
    }

    #[test]
    fn given_wide_viewport_when_route_changes_then_panel_is_unchanged() {
        let mut feature = PanelFeature::new(1024.0);
        let before = feature.state().clone();

        reduce(&mut feature, PanelEvent::RouteChanged);

        assert_eq!(feature.state(), &before);
    }

    #[test]
    fn given_route_change_and_breakpoint_in_any_order_when_narrow_then_both_converge()
     {
        let mut first = PanelFeature::new(1024.0);
        reduce(&mut first, PanelEvent::ViewportResized { width: 600.0 });
        reduce(&mut first, PanelEvent::RouteChanged);

        let mut second = PanelFeature::new(1024.0);
        reduce(&mut second, PanelEvent::RouteChanged);
        reduce(&mut second, PanelEvent::ViewportResized { width: 600.0 });

        assert_eq!(first.mode(), PanelMode::Collapsed);
        assert_eq!(second.mode(), PanelMode::Collapsed);
    }

    #[test]
    fn given_drag_in_progress_when_viewport_turns_narrow_then_session_is_released()
     {
        let mut feature = PanelFeature::new(1024.0);
        reduce(&mut feature, PanelEvent::HandlePressed);
        reduce(&mut feature, PanelEvent::PointerMoved { x: 350.0 });
        assert!(feature.is_resizing());

        reduce(&mut feature, PanelEvent::ViewportResized { width: 700.0 });

        assert!(!feature.is_resizing());
        assert_eq!(feature.mode(), PanelMode::Collapsed);
    }

    #[test]
    fn given_no_drag_when_pointer_released_then_nothing_changes() {
        let mut feature = PanelFeature::new(1024.0);
        let before = feature.state().clone();

        reduce(&mut feature, PanelEvent::PointerReleased);
        reduce(&mut feature, PanelEvent::PointerReleased);

        assert_eq!(feature.state(), &before);
    }

    #[test]
    fn given_press_without_movement_when_released_then_width_is_reset() {
        let mut feature = PanelFeature::new(1024.0);
        drag(&mut feature, &[400.0]);
        settle(&mut feature);

        drag(&mut feature, &[]);

        assert_eq!(feature.mode(), PanelMode::Expanded {
            width: PANEL_MIN_WIDTH
        });
        assert!(feature.is_transitioning());
        assert!(!feature.is_resizing());
    }

    #[test]
    fn given_drag_when_window_loses_focus_then_session_ends_without_reset() {
        let mut feature = PanelFeature::new(1024.0);
        reduce(&mut feature, PanelEvent::HandlePressed);
        reduce(&mut feature, PanelEvent::PointerMoved { x: 360.0 });

        reduce(&mut feature, PanelEvent::DragCancelled);

        assert!(!feature.is_resizing());
        assert_eq!(feature.mode(), PanelMode::Expanded { width: 360.0 });
    }

    #[test]
    fn given_collapse_when_ticked_for_duration_then_transition_clears() {
        let mut feature = PanelFeature::new(1024.0);
        reduce(&mut feature, PanelEvent::CollapsePressed);

        let ticks = PANEL_TRANSITION_MS / PANEL_TICK_MS;
        for _ in 0..ticks - 1 {
            reduce(&mut feature, PanelEvent::Tick);
        }
        assert!(feature.is_transitioning());

        reduce(&mut feature, PanelEvent::Tick);
        assert!(!feature.is_transitioning());
    }

    #[test]
    fn given_create_document_when_reduced_then_panel_state_is_unchanged() {
        let mut feature = PanelFeature::new(1024.0);
        drag(&mut feature, &[333.0]);
        let before = feature.state().clone();

        reduce(&mut feature, PanelEvent::CreateDocument);
        reduce(&mut feature, PanelEvent::ToggleTrash);
        reduce(&mut feature, PanelEvent::OpenSettings);

        assert_eq!(feature.state(), &before);
    }

    #[test]
    fn given_wide_mount_when_dragged_past_max_and_viewport_narrows_then_panel_collapses()
     {
        let mut feature = PanelFeature::new(1024.0);
        assert_eq!(feature.mode(), PanelMode::Expanded {
            width: PANEL_MIN_WIDTH
        });

        reduce(&mut feature, PanelEvent::HandlePressed);
        reduce(&mut feature, PanelEvent::PointerMoved { x: 240.0 });
        reduce(&mut feature, PanelEvent::PointerMoved { x: 600.0 });
        reduce(&mut feature, PanelEvent::PointerReleased);
        assert_eq!(feature.state().width(), PANEL_MAX_WIDTH);

        reduce(&mut feature, PanelEvent::ViewportResized { width: 500.0 });
        settle(&mut feature);
        assert_eq!(feature.mode(), PanelMode::Collapsed);
        assert_eq!(feature.geometry(), PanelGeometry {
            panel_width: 0.0,
            top_bar_left: 0.0,
            top_bar_width: 500.0,
        });

        reduce(&mut feature, PanelEvent::RouteChanged);
        assert_eq!(feature.mode(), PanelMode::Collapsed);
        assert!(!feature.is_transitioning());
    }

    #[test]
    fn given_narrow_collapsed_panel_when_viewport_widens_then_panel_docks_at_default()
     {
        let mut feature = PanelFeature::new(500.0);

        reduce(&mut feature, PanelEvent::ViewportResized { width: 1200.0 });
        settle(&mut feature);

        assert_eq!(feature.geometry(), PanelGeometry::docked(240.0, 1200.0));
    }

    #[test]
    fn given_fresh_state_when_created_then_matches_state_constructor() {
        let feature = PanelFeature::new(1024.0);

        assert_eq!(feature.state(), &PanelState::new(1024.0));
    }
}
