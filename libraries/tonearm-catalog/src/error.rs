//! Error types for the album catalog

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unsupported URL scheme [{scheme}] for: {url}")]
    UnsupportedScheme { scheme: String, url: String },

    #[error("Invalid album descriptor {path}: {reason}")]
    InvalidFormat { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] tonearm_storage::StorageError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl From<CatalogError> for tonearm_core::TonearmError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(what) => tonearm_core::TonearmError::not_found("Album", what),
            CatalogError::UnsupportedScheme { .. } => {
                tonearm_core::TonearmError::UnsupportedScheme(err.to_string())
            }
            CatalogError::InvalidFormat { .. } => {
                tonearm_core::TonearmError::invalid_format(err.to_string())
            }
            CatalogError::Io(e) => tonearm_core::TonearmError::Io(e),
            CatalogError::Storage(e) => e.into(),
        }
    }
}
