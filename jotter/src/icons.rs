pub(crate) const COLLAPSE: &[u8] =
    include_bytes!("../assets/svg/chevrons-left.svg");
pub(crate) const MENU: &[u8] = include_bytes!("../assets/svg/menu.svg");
pub(crate) const CHEVRON_RIGHT: &[u8] =
    include_bytes!("../assets/svg/chevron-right.svg");
pub(crate) const CHEVRON_DOWN: &[u8] =
    include_bytes!("../assets/svg/chevron-down.svg");
pub(crate) const PLUS: &[u8] = include_bytes!("../assets/svg/plus.svg");
pub(crate) const PLUS_CIRCLE: &[u8] =
    include_bytes!("../assets/svg/plus-circle.svg");
pub(crate) const SETTINGS: &[u8] = include_bytes!("../assets/svg/settings.svg");
pub(crate) const TRASH: &[u8] = include_bytes!("../assets/svg/trash.svg");
pub(crate) const UNDO: &[u8] = include_bytes!("../assets/svg/undo.svg");
pub(crate) const FILE: &[u8] = include_bytes!("../assets/svg/file.svg");
pub(crate) const LOADER: &[u8] = include_bytes!("../assets/svg/loader.svg");
pub(crate) const SEARCH: &[u8] = include_bytes!("../assets/svg/search.svg");
pub(crate) const CLOSE: &[u8] = include_bytes!("../assets/svg/x.svg");
