/// Interval of the toast expiry tick.
pub(crate) const TOAST_TICK_MS: u64 = 100;
/// Lifetime of a resolved toast.
pub(crate) const TOAST_TTL_MS: u64 = 4000;
/// Maximum number of toasts kept on screen.
pub(crate) const MAX_TOASTS: usize = 3;

/// Identity used to replace a toast in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ToastKey {
    /// A document store operation, keyed by its request id.
    Operation(u64),
    Settings,
}

/// Visual and lifetime class of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastKind {
    Pending,
    Success,
    Error,
}

impl ToastKind {
    /// Return whether toasts of this kind age out.
    pub(crate) fn expires(self) -> bool {
        !matches!(self, ToastKind::Pending)
    }
}

/// One visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Toast {
    key: ToastKey,
    kind: ToastKind,
    message: String,
    age_ms: u64,
}

impl Toast {
    pub(crate) fn new(key: ToastKey, kind: ToastKind, message: String) -> Self {
        Self {
            key,
            kind,
            message,
            age_ms: 0,
        }
    }

    pub(crate) fn key(&self) -> ToastKey {
        self.key
    }

    pub(crate) fn kind(&self) -> ToastKind {
        self.kind
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    #[cfg(test)]
    pub(crate) fn age_ms(&self) -> u64 {
        self.age_ms
    }

    pub(crate) fn is_expired(&self) -> bool {
        self.kind.expires() && self.age_ms >= TOAST_TTL_MS
    }

    pub(super) fn age_by(&mut self, elapsed_ms: u64) {
        if self.kind.expires() {
            self.age_ms = self.age_ms.saturating_add(elapsed_ms);
        }
    }
}
