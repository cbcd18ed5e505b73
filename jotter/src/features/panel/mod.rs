mod event;
mod feature;
mod model;
mod state;

pub(crate) use event::PanelEvent;
pub(crate) use feature::PanelFeature;
#[allow(unused_imports)]
pub(crate) use model::{
    DEFAULT_DOCUMENT_TITLE, PANEL_MAX_WIDTH, PANEL_MIN_WIDTH, PANEL_TICK_MS,
    PanelGeometry, PanelMode,
};
#[allow(unused_imports)]
pub(crate) use state::PanelState;
