pub mod icon_extractor;

use std::path::{Path, PathBuf};

use crate::utils::app_lifecycle;

/// The OS services the Dock model needs beyond reading its own file.
/// None of these report failure to the caller.
pub trait Workspace {
    fn resolve_icon(&self, path: &Path) -> Option<PathBuf>;
    fn open_url(&self, target: &str);
    fn terminate(&self, bundle_identifier: &str);
}

/// `Workspace` backed by macOS command-line tools.
pub struct SystemWorkspace {
    icon_cache_dir: PathBuf,
}

impl SystemWorkspace {
    pub fn new() -> Self {
        let icon_cache_dir = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("dockprefs")
            .join("icons");
        Self::with_icon_cache(icon_cache_dir)
    }

    pub fn with_icon_cache(icon_cache_dir: PathBuf) -> Self {
        Self { icon_cache_dir }
    }
}

impl Default for SystemWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace for SystemWorkspace {
    fn resolve_icon(&self, path: &Path) -> Option<PathBuf> {
        if let Err(e) = std::fs::create_dir_all(&self.icon_cache_dir) {
            log::warn!("Cannot create icon cache {}: {}", self.icon_cache_dir.display(), e);
            return None;
        }
        icon_extractor::extract_icon_png(path, &self.icon_cache_dir)
    }

    fn open_url(&self, target: &str) {
        if let Err(e) = app_lifecycle::open_target(target) {
            log::warn!("Failed to open {}: {}", target, e);
        }
    }

    fn terminate(&self, bundle_identifier: &str) {
        if let Err(e) = app_lifecycle::quit_app(bundle_identifier) {
            log::warn!("Failed to terminate {}: {}", bundle_identifier, e);
        }
    }
}
