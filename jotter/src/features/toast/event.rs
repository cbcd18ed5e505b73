use super::model::{ToastKey, ToastKind};

/// Events accepted by the notification stack.
#[derive(Debug, Clone)]
pub(crate) enum ToastEvent {
    Show {
        key: ToastKey,
        kind: ToastKind,
        message: String,
    },
    Dismiss(ToastKey),
    Tick,
}

impl ToastEvent {
    pub(crate) fn pending(key: ToastKey, message: impl Into<String>) -> Self {
        Self::show(key, ToastKind::Pending, message)
    }

    pub(crate) fn success(key: ToastKey, message: impl Into<String>) -> Self {
        Self::show(key, ToastKind::Success, message)
    }

    pub(crate) fn error(key: ToastKey, message: impl Into<String>) -> Self {
        Self::show(key, ToastKind::Error, message)
    }

    fn show(
        key: ToastKey,
        kind: ToastKind,
        message: impl Into<String>,
    ) -> Self {
        Self::Show {
            key,
            kind,
            message: message.into(),
        }
    }
}
