pub mod dock;
pub mod keys;

pub use dock::{
    open_dock_settings, DockApp, DockFile, DockPreferences, MinimizeEffect, Orientation,
    DOCK_SETTINGS_URL,
};
pub(crate) use dock::FileReference;
