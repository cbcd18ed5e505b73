pub(crate) mod documents;
pub(crate) mod navigation;
pub(crate) mod panel;
pub(crate) mod runtime;
pub(crate) mod settings;
pub(crate) mod sidebar;
pub(crate) mod toast;
pub(crate) mod window;
