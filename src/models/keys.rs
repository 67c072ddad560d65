//! Source key names of `com.apple.dock.plist`, one per model field.

pub const SHOW_RECENTS: &str = "show-recents";
pub const AUTOHIDE: &str = "autohide";
pub const SHOW_PROCESS_INDICATORS: &str = "show-process-indicators";
pub const MINIMIZE_EFFECT: &str = "mineffect";
pub const ORIENTATION: &str = "orientation";
pub const TRASH_FULL: &str = "trash-full";
pub const PERSISTENT_APPS: &str = "persistent-apps";
pub const RECENT_APPS: &str = "recent-apps";
pub const PERSISTENT_OTHERS: &str = "persistent-others";
pub const TILE_SIZE: &str = "tilesize";
pub const MAGNIFICATION: &str = "magnification";
pub const LARGE_SIZE: &str = "largesize";

pub const TILE_DATA: &str = "tile-data";
pub const BUNDLE_IDENTIFIER: &str = "bundle-identifier";
pub const IS_BETA: &str = "is-beta";
pub const FILE_LABEL: &str = "file-label";
pub const FILE_DATA: &str = "file-data";
pub const URL_STRING: &str = "_CFURLString";
