pub mod cli;
pub mod loader;
pub mod mapper;
pub mod models;
pub mod platform;
pub mod utils;

pub use loader::LoadOptions;
pub use models::{DockApp, DockFile, DockPreferences, MinimizeEffect, Orientation};
pub use platform::{SystemWorkspace, Workspace};
pub use utils::{AppError, AppResult};

/// Load the current user's Dock preferences.
pub fn load() -> AppResult<DockPreferences> {
    load_with(&LoadOptions::default())
}

pub fn load_with(options: &LoadOptions) -> AppResult<DockPreferences> {
    let path = options.resolve_path()?;
    let bytes = loader::read_document(&path)?;
    load_from_bytes(&bytes)
}

/// Decode an in-memory `com.apple.dock.plist` (binary or XML).
pub fn load_from_bytes(bytes: &[u8]) -> AppResult<DockPreferences> {
    let root = utils::plist_parser::parse_document(bytes)?;
    mapper::map_preferences(&root)
}

/// Like [`load`], but treats any failure as fatal and aborts the process.
pub fn load_or_abort() -> DockPreferences {
    match load() {
        Ok(prefs) => prefs,
        Err(e) => {
            log::error!("Unable to load Dock preferences: {}", e);
            eprintln!("Unable to load Dock preferences: {}", e);
            std::process::abort();
        }
    }
}

/// Run the whole load on a blocking thread, bounded by `options.timeout_secs`.
/// The load either completes or fails as a unit.
pub async fn load_async(options: LoadOptions) -> AppResult<DockPreferences> {
    let timeout_secs = options.timeout_secs;
    utils::command::run_blocking_with_timeout(timeout_secs, move || load_with(&options)).await
}
