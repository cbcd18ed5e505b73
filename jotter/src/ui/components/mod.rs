pub(crate) mod icon_button;
