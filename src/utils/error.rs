use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Dock preferences not found: {0}")]
    NotFound(String),

    #[error("Failed to read Dock preferences: {0}")]
    ReadFailure(#[from] std::io::Error),

    #[error("Malformed property list: {0}")]
    MalformedDocument(String),

    #[error("Schema mismatch at '{key}': {reason}")]
    SchemaMismatch { key: String, reason: String },

    #[error("Timed out after {0}s loading Dock preferences")]
    Timeout(u64),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn missing(key: impl Into<String>) -> Self {
        AppError::SchemaMismatch {
            key: key.into(),
            reason: "missing required key".into(),
        }
    }

    pub fn mistyped(key: impl Into<String>, expected: &str) -> Self {
        AppError::SchemaMismatch {
            key: key.into(),
            reason: format!("expected {}", expected),
        }
    }

    /// Key named by a `SchemaMismatch`, if this is one.
    pub fn schema_key(&self) -> Option<&str> {
        match self {
            AppError::SchemaMismatch { key, .. } => Some(key),
            _ => None,
        }
    }
}

impl From<plist::Error> for AppError {
    fn from(e: plist::Error) -> Self {
        AppError::MalformedDocument(e.to_string())
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
