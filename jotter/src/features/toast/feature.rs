use iced::Task;

use super::event::ToastEvent;
use super::model::{TOAST_TICK_MS, Toast};
use super::state::ToastState;
use crate::app::Event as AppEvent;
use crate::features::Feature;

/// Notification stack shown in the corner of the window.
#[derive(Debug, Default)]
pub(crate) struct ToastFeature {
    state: ToastState,
}

impl ToastFeature {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Return visible toasts, oldest first.
    pub(crate) fn toasts(&self) -> &[Toast] {
        self.state.toasts()
    }

    /// Return whether the expiry tick is needed.
    pub(crate) fn needs_tick(&self) -> bool {
        self.state.has_expiring()
    }
}

impl Feature for ToastFeature {
    type Event = ToastEvent;
    type Ctx<'a> = ();

    fn reduce<'a>(
        &mut self,
        event: ToastEvent,
        _ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            ToastEvent::Show { key, kind, message } => {
                log::debug!("toast {key:?} {kind:?}: {message}");
                self.state.show(key, kind, message);
            },
            ToastEvent::Dismiss(key) => {
                self.state.dismiss(key);
            },
            ToastEvent::Tick => self.state.tick(TOAST_TICK_MS),
        }

        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::ToastFeature;
    use crate::features::Feature;
    use crate::features::toast::{ToastEvent, ToastKey};

    #[test]
    fn given_pending_then_success_when_reduced_then_single_toast_can_expire() {
        let mut feature = ToastFeature::new();
        let key = ToastKey::Operation(7);

        let _task = feature.reduce(ToastEvent::pending(key, "Creating"), &());
        assert!(!feature.needs_tick());

        let _task = feature.reduce(ToastEvent::success(key, "Created"), &());
        assert_eq!(feature.toasts().len(), 1);
        assert!(feature.needs_tick());

        for _ in 0..40 {
            let _task = feature.reduce(ToastEvent::Tick, &());
        }
        assert!(feature.toasts().is_empty());
    }

    #[test]
    fn given_visible_toast_when_dismissed_then_stack_is_empty() {
        let mut feature = ToastFeature::new();
        let _task =
            feature.reduce(ToastEvent::error(ToastKey::Settings, "Nope"), &());

        let _task =
            feature.reduce(ToastEvent::Dismiss(ToastKey::Settings), &());

        assert!(feature.toasts().is_empty());
    }
}
