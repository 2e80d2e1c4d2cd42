/// Metadata-specific errors
use std::time::Duration;
use thiserror::Error;

/// Result type alias using `MetadataError`
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Metadata error types
#[derive(Error, Debug)]
pub enum MetadataError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Locator that does not name a local file
    #[error("Unsupported locator: {0}")]
    Unsupported(String),

    /// The probe did not answer within the bound
    #[error("Metadata extraction timed out after {timeout:?} for {locator}")]
    Timeout { locator: String, timeout: Duration },

    /// Tag parsing error
    #[error("Tag parsing error: {0}")]
    ParseError(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Lofty error
    #[error(transparent)]
    Lofty(#[from] lofty::error::LoftyError),
}

impl From<MetadataError> for tonearm_core::TonearmError {
    fn from(err: MetadataError) -> Self {
        match err {
            MetadataError::FileNotFound(path) => tonearm_core::TonearmError::not_found("File", path),
            MetadataError::Unsupported(locator) => {
                tonearm_core::TonearmError::UnsupportedScheme(locator)
            }
            MetadataError::Timeout { .. } => tonearm_core::TonearmError::Timeout(err.to_string()),
            other => tonearm_core::TonearmError::metadata(other.to_string()),
        }
    }
}
