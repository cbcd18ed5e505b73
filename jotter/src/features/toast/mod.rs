mod event;
mod feature;
mod model;
mod state;

pub(crate) use event::ToastEvent;
pub(crate) use feature::ToastFeature;
#[allow(unused_imports)]
pub(crate) use model::{TOAST_TICK_MS, Toast, ToastKey, ToastKind};
