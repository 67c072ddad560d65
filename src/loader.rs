use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::utils::{AppError, AppResult};

pub const DOCK_PLIST_RELATIVE_PATH: &str = "Library/Preferences/com.apple.dock.plist";

/// How a load is performed. Every field has a default, so an empty config
/// reads the current user's Dock file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadOptions {
    /// Read this file instead of the one in the user's preferences folder.
    pub path: Option<PathBuf>,
    /// Only used by the async entry point.
    pub timeout_secs: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            path: None,
            timeout_secs: 10,
        }
    }
}

impl LoadOptions {
    pub fn resolve_path(&self) -> AppResult<PathBuf> {
        match &self.path {
            Some(p) => Ok(p.clone()),
            None => dock_plist_path(),
        }
    }
}

pub fn dock_plist_path() -> AppResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DOCK_PLIST_RELATIVE_PATH))
        .ok_or_else(|| AppError::NotFound("home directory could not be determined".into()))
}

/// Read the whole document in one go. No retries, no fallback location.
pub fn read_document(path: &Path) -> AppResult<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => {
            log::debug!("Read {} bytes from {}", bytes.len(), path.display());
            Ok(bytes)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(AppError::NotFound(path.to_string_lossy().to_string()))
        }
        Err(e) => Err(AppError::ReadFailure(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_in_user_preferences() {
        if let Ok(path) = dock_plist_path() {
            assert!(path.ends_with("Library/Preferences/com.apple.dock.plist"));
        }
    }

    #[test]
    fn override_path_wins() {
        let options = LoadOptions {
            path: Some(PathBuf::from("/tmp/dock.plist")),
            ..Default::default()
        };
        assert_eq!(options.resolve_path().unwrap(), PathBuf::from("/tmp/dock.plist"));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: LoadOptions = serde_json::from_str(r#"{"path": "/tmp/a.plist"}"#).unwrap();
        assert_eq!(options.path, Some(PathBuf::from("/tmp/a.plist")));
        assert_eq!(options.timeout_secs, 10);
    }

    #[test]
    fn reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("com.apple.dock.plist");
        std::fs::write(&path, b"bytes").unwrap();
        assert_eq!(read_document(&path).unwrap(), b"bytes");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(&dir.path().join("absent.plist")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn directory_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::ReadFailure(_)));
    }
}
