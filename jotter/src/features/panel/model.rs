/// Smallest width the panel can be dragged to.
pub(crate) const PANEL_MIN_WIDTH: f32 = 240.0;
/// Largest width the panel can be dragged to.
pub(crate) const PANEL_MAX_WIDTH: f32 = 480.0;
/// Width restored by reset and expand.
pub(crate) const PANEL_DEFAULT_WIDTH: f32 = PANEL_MIN_WIDTH;
/// Viewports at or below this width use mobile geometry.
pub(crate) const NARROW_VIEWPORT_MAX_WIDTH: f32 = 768.0;
/// Duration of the width transition.
pub(crate) const PANEL_TRANSITION_MS: u64 = 300;
/// Interval of the transition tick subscription.
pub(crate) const PANEL_TICK_MS: u64 = 20;
/// Title used when the panel asks for a new document.
pub(crate) const DEFAULT_DOCUMENT_TITLE: &str = "Untitled Document";

/// Visible layout mode of the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PanelMode {
    Expanded { width: f32 },
    Collapsed,
}

/// Pixel geometry of the panel and the top bar next to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PanelGeometry {
    pub(crate) panel_width: f32,
    pub(crate) top_bar_left: f32,
    pub(crate) top_bar_width: f32,
}

impl PanelGeometry {
    /// Geometry for a hidden panel: the top bar spans the whole viewport.
    pub(crate) fn collapsed(viewport_width: f32) -> Self {
        Self {
            panel_width: 0.0,
            top_bar_left: 0.0,
            top_bar_width: viewport_width.max(0.0),
        }
    }

    /// Mobile takeover: the panel covers the viewport, the top bar is gone.
    pub(crate) fn takeover(viewport_width: f32) -> Self {
        let viewport_width = viewport_width.max(0.0);
        Self {
            panel_width: viewport_width,
            top_bar_left: viewport_width,
            top_bar_width: 0.0,
        }
    }

    /// Desktop geometry with the top bar taking the remaining width.
    pub(crate) fn docked(width: f32, viewport_width: f32) -> Self {
        Self {
            panel_width: width,
            top_bar_left: width,
            top_bar_width: (viewport_width - width).max(0.0),
        }
    }

    /// Blend two geometries using an eased progress in `0.0..=1.0`.
    pub(crate) fn lerp(self, target: Self, progress: f32) -> Self {
        let t = ease_in_out(progress.clamp(0.0, 1.0));
        Self {
            panel_width: mix(self.panel_width, target.panel_width, t),
            top_bar_left: mix(self.top_bar_left, target.top_bar_left, t),
            top_bar_width: mix(self.top_bar_width, target.top_bar_width, t),
        }
    }
}

/// Return whether a viewport width falls into the mobile breakpoint.
pub(crate) fn is_narrow_viewport(viewport_width: f32) -> bool {
    viewport_width <= NARROW_VIEWPORT_MAX_WIDTH
}

/// Clamp a pointer x coordinate into the allowed panel width range.
pub(crate) fn clamp_panel_width(pointer_x: f32) -> f32 {
    if pointer_x.is_nan() {
        return PANEL_MIN_WIDTH;
    }

    pointer_x.round().clamp(PANEL_MIN_WIDTH, PANEL_MAX_WIDTH)
}

fn mix(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::{
        NARROW_VIEWPORT_MAX_WIDTH, PANEL_MAX_WIDTH, PANEL_MIN_WIDTH,
        PanelGeometry, clamp_panel_width, is_narrow_viewport,
    };

    #[test]
    fn given_out_of_range_pointer_when_clamped_then_width_stays_in_bounds() {
        assert_eq!(clamp_panel_width(-50.0), PANEL_MIN_WIDTH);
        assert_eq!(clamp_panel_width(0.0), PANEL_MIN_WIDTH);
        assert_eq!(clamp_panel_width(600.0), PANEL_MAX_WIDTH);
        assert_eq!(clamp_panel_width(f32::INFINITY), PANEL_MAX_WIDTH);
        assert_eq!(clamp_panel_width(f32::NAN), PANEL_MIN_WIDTH);
    }

    #[test]
    fn given_increasing_pointer_positions_when_clamped_then_widths_never_decrease()
     {
        let mut previous = 0.0;
        let mut x = -100.0;
        while x < 800.0 {
            let width = clamp_panel_width(x);
            assert!(width >= previous);
            assert!((PANEL_MIN_WIDTH..=PANEL_MAX_WIDTH).contains(&width));
            previous = width;
            x += 7.5;
        }
    }

    #[test]
    fn given_breakpoint_width_when_checked_then_boundary_counts_as_narrow() {
        assert!(is_narrow_viewport(NARROW_VIEWPORT_MAX_WIDTH));
        assert!(is_narrow_viewport(500.0));
        assert!(!is_narrow_viewport(NARROW_VIEWPORT_MAX_WIDTH + 1.0));
    }

    #[test]
    fn given_geometries_when_lerped_then_endpoints_match_inputs() {
        let from = PanelGeometry::collapsed(1024.0);
        let to = PanelGeometry::docked(240.0, 1024.0);

        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);

        let middle = from.lerp(to, 0.5);
        assert!(middle.panel_width > 0.0 && middle.panel_width < 240.0);
    }

    #[test]
    fn given_panel_wider_than_viewport_when_docked_then_top_bar_width_is_zero()
    {
        let geometry = PanelGeometry::docked(480.0, 300.0);

        assert_eq!(geometry.top_bar_width, 0.0);
    }
}
