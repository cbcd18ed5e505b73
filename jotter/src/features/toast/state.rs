use super::model::{MAX_TOASTS, Toast, ToastKey, ToastKind};

/// Ordered toast stack, oldest first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ToastState {
    toasts: Vec<Toast>,
}

impl ToastState {
    pub(crate) fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Return whether any toast is still counting down.
    pub(crate) fn has_expiring(&self) -> bool {
        self.toasts.iter().any(|toast| toast.kind().expires())
    }

    /// Insert a toast or replace the one sharing its key.
    pub(crate) fn show(
        &mut self,
        key: ToastKey,
        kind: ToastKind,
        message: String,
    ) {
        let toast = Toast::new(key, kind, message);
        match self.toasts.iter_mut().find(|toast| toast.key() == key) {
            Some(existing) => *existing = toast,
            None => self.toasts.push(toast),
        }

        while self.toasts.len() > MAX_TOASTS {
            let index = self
                .toasts
                .iter()
                .position(|toast| toast.kind().expires())
                .unwrap_or(0);
            self.toasts.remove(index);
        }
    }

    /// Remove a toast. Returns `false` when the key is unknown.
    pub(crate) fn dismiss(&mut self, key: ToastKey) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.key() != key);
        self.toasts.len() != before
    }

    /// Age every resolved toast and drop the expired ones.
    pub(crate) fn tick(&mut self, elapsed_ms: u64) {
        for toast in &mut self.toasts {
            toast.age_by(elapsed_ms);
        }
        self.toasts.retain(|toast| !toast.is_expired());
    }
}

#[cfg(test)]
mod tests {
    use super::ToastState;
    use crate::features::toast::model::{
        MAX_TOASTS, TOAST_TICK_MS, TOAST_TTL_MS, ToastKey, ToastKind,
    };

    #[test]
    fn given_same_key_when_shown_twice_then_toast_is_replaced_in_place() {
        let mut state = ToastState::default();
        let key = ToastKey::Operation(1);
        state.show(key, ToastKind::Pending, String::from("Creating"));
        state.show(ToastKey::Settings, ToastKind::Success, String::from("Ok"));

        state.show(key, ToastKind::Success, String::from("Created"));

        assert_eq!(state.toasts().len(), 2);
        assert_eq!(state.toasts()[0].kind(), ToastKind::Success);
        assert_eq!(state.toasts()[0].message(), "Created");
    }

    #[test]
    fn given_resolved_toast_when_ttl_elapses_then_it_is_removed() {
        let mut state = ToastState::default();
        state.show(
            ToastKey::Operation(1),
            ToastKind::Error,
            String::from("Failed"),
        );

        state.tick(TOAST_TTL_MS - TOAST_TICK_MS);
        assert_eq!(state.toasts().len(), 1);

        state.tick(TOAST_TICK_MS);
        assert!(state.is_empty());
    }

    #[test]
    fn given_pending_toast_when_ticked_for_long_then_it_stays() {
        let mut state = ToastState::default();
        state.show(
            ToastKey::Operation(1),
            ToastKind::Pending,
            String::from("Creating"),
        );

        state.tick(TOAST_TTL_MS * 10);

        assert_eq!(state.toasts().len(), 1);
        assert_eq!(state.toasts()[0].age_ms(), 0);
        assert!(!state.has_expiring());
    }

    #[test]
    fn given_full_stack_when_new_toast_shown_then_oldest_resolved_is_dropped()
    {
        let mut state = ToastState::default();
        state.show(ToastKey::Operation(1), ToastKind::Pending, "a".into());
        state.show(ToastKey::Operation(2), ToastKind::Success, "b".into());
        state.show(ToastKey::Operation(3), ToastKind::Success, "c".into());

        state.show(ToastKey::Operation(4), ToastKind::Pending, "d".into());

        let keys: Vec<_> = state.toasts().iter().map(|t| t.key()).collect();
        assert_eq!(state.toasts().len(), MAX_TOASTS);
        assert_eq!(keys, vec![
            ToastKey::Operation(1),
            ToastKey::Operation(3),
            ToastKey::Operation(4),
        ]);
    }

    #[test]
    fn given_unknown_key_when_dismissed_then_reports_false() {
        let mut state = ToastState::default();
        state.show(ToastKey::Settings, ToastKind::Success, "saved".into());

        assert!(!state.dismiss(ToastKey::Operation(9)));
        assert!(state.dismiss(ToastKey::Settings));
        assert!(state.is_empty());
    }
}
