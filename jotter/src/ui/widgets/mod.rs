pub(crate) mod document_list;
pub(crate) mod document_page;
pub(crate) mod documents_empty;
pub(crate) mod navbar;
pub(crate) mod settings_dialog;
pub(crate) mod sidebar;
pub(crate) mod sidebar_item;
pub(crate) mod spinner;
pub(crate) mod toast_stack;
pub(crate) mod trash_box;
pub(crate) mod user_item;
