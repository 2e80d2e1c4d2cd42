/// Core error types for Tonearm
use thiserror::Error;

/// Result type alias using `TonearmError`
pub type Result<T> = std::result::Result<T, TonearmError>;

/// Core error type for Tonearm
///
/// Every library crate keeps its own error enum and converts into this one
/// at the application boundary.
#[derive(Error, Debug)]
pub enum TonearmError {
    /// Missing file or directory
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Locator scheme that no component can handle
    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    /// Malformed document or missing required field
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Bounded wait expired
    #[error("Timed out: {0}")]
    Timeout(String),

    /// Metadata extraction errors
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// Persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Playlist errors
    #[error("Playback error: {0}")]
    Playback(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl TonearmError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Create a metadata error
    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::Metadata(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a playback error
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }
}
