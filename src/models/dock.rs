use serde::Serialize;
use std::path::{Path, PathBuf};
use url::Url;

use crate::platform::Workspace;

pub const DOCK_SETTINGS_URL: &str = "x-apple.systempreferences:com.apple.preference.dock";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MinimizeEffect {
    Genie,
    Scale,
    Suck,
    Unknown,
}

impl MinimizeEffect {
    pub fn as_str(&self) -> &str {
        match self {
            MinimizeEffect::Genie => "genie",
            MinimizeEffect::Scale => "scale",
            MinimizeEffect::Suck => "suck",
            MinimizeEffect::Unknown => "unknown",
        }
    }

    /// Total mapping: values written by newer macOS releases become `Unknown`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "genie" => MinimizeEffect::Genie,
            "scale" => MinimizeEffect::Scale,
            "suck" => MinimizeEffect::Suck,
            _ => MinimizeEffect::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Bottom,
    Left,
    Right,
    Unknown,
}

impl Orientation {
    pub fn as_str(&self) -> &str {
        match self {
            Orientation::Bottom => "bottom",
            Orientation::Left => "left",
            Orientation::Right => "right",
            Orientation::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "bottom" => Orientation::Bottom,
            "left" => Orientation::Left,
            "right" => Orientation::Right,
            _ => Orientation::Unknown,
        }
    }
}

/// The `_CFURLString` of a tile's `file-data` bookmark.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub(crate) struct FileReference {
    url_string: String,
}

impl FileReference {
    pub(crate) fn new(url_string: impl Into<String>) -> Self {
        Self {
            url_string: url_string.into(),
        }
    }

    fn url(&self) -> Option<Url> {
        Url::parse(&self.url_string).ok()
    }

    /// Local path for `file://` URLs, otherwise the raw string.
    fn path(&self) -> String {
        self.url()
            .filter(|u| u.scheme() == "file")
            .and_then(|u| u.to_file_path().ok())
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|| self.url_string.clone())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DockApp {
    bundle_identifier: String,
    is_beta: bool,
    file_label: String,
    #[serde(rename = "fileURL")]
    file_reference: FileReference,
}

impl DockApp {
    pub(crate) fn new(
        bundle_identifier: String,
        is_beta: bool,
        file_label: String,
        file_reference: FileReference,
    ) -> Self {
        Self {
            bundle_identifier,
            is_beta,
            file_label,
            file_reference,
        }
    }

    pub fn bundle_identifier(&self) -> &str {
        &self.bundle_identifier
    }

    pub fn is_beta(&self) -> bool {
        self.is_beta
    }

    pub fn file_label(&self) -> &str {
        &self.file_label
    }

    pub fn file_url(&self) -> Option<Url> {
        self.file_reference.url()
    }

    pub fn icon(&self, workspace: &dyn Workspace) -> Option<PathBuf> {
        workspace.resolve_icon(Path::new(&self.file_reference.path()))
    }

    pub fn launch(&self, workspace: &dyn Workspace) {
        workspace.open_url(&self.file_reference.url_string);
    }

    pub fn terminate(&self, workspace: &dyn Workspace) {
        workspace.terminate(&self.bundle_identifier);
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DockFile {
    file_label: String,
    #[serde(rename = "fileURL")]
    file_reference: FileReference,
}

impl DockFile {
    pub(crate) fn new(file_label: String, file_reference: FileReference) -> Self {
        Self {
            file_label,
            file_reference,
        }
    }

    pub fn file_label(&self) -> &str {
        &self.file_label
    }

    pub fn file_path(&self) -> String {
        self.file_reference.path()
    }

    pub fn icon(&self, workspace: &dyn Workspace) -> Option<PathBuf> {
        workspace.resolve_icon(Path::new(&self.file_path()))
    }

    pub fn open(&self, workspace: &dyn Workspace) {
        workspace.open_url(&self.file_path());
    }
}

/// Typed view of `com.apple.dock.plist`. Built once per load, never mutated.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DockPreferences {
    pub(crate) show_recents: bool,
    pub(crate) autohide: bool,
    pub(crate) shows_process_indicators: bool,
    pub(crate) minimize_effect: MinimizeEffect,
    pub(crate) orientation: Orientation,
    #[serde(rename = "trashFull", serialize_with = "serialize_trash_full")]
    pub(crate) trash_state: Option<bool>,
    pub(crate) persistent_apps: Vec<DockApp>,
    pub(crate) recent_apps: Vec<DockApp>,
    pub(crate) files: Vec<DockFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tile_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) magnification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) large_size: Option<f64>,
}

impl DockPreferences {
    pub fn show_recents(&self) -> bool {
        self.show_recents
    }

    pub fn autohide(&self) -> bool {
        self.autohide
    }

    pub fn shows_process_indicators(&self) -> bool {
        self.shows_process_indicators
    }

    pub fn minimize_effect(&self) -> MinimizeEffect {
        self.minimize_effect
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// `false` both when the trash is empty and when the key is not written.
    pub fn trash_full(&self) -> bool {
        self.trash_state.unwrap_or(false)
    }

    /// `None` when the file carries no `trash-full` key at all.
    pub fn trash_state(&self) -> Option<bool> {
        self.trash_state
    }

    pub fn persistent_apps(&self) -> &[DockApp] {
        &self.persistent_apps
    }

    pub fn recent_apps(&self) -> &[DockApp] {
        &self.recent_apps
    }

    pub fn files(&self) -> &[DockFile] {
        &self.files
    }

    pub fn tile_size(&self) -> Option<f64> {
        self.tile_size
    }

    pub fn magnification(&self) -> Option<bool> {
        self.magnification
    }

    pub fn large_size(&self) -> Option<f64> {
        self.large_size
    }
}

/// Serialized output reports an absent `trash-full` as `false`, like `trash_full()`.
fn serialize_trash_full<S>(state: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_bool(state.unwrap_or(false))
}

pub fn open_dock_settings(workspace: &dyn Workspace) {
    workspace.open_url(DOCK_SETTINGS_URL);
}
