//! Error types for the playlist engine

use thiserror::Error;

/// Playlist errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Unknown playback mode name
    #[error("Invalid playback mode: {0}")]
    InvalidMode(String),

    /// Track history could not be read or written
    #[error("Storage error: {0}")]
    Storage(#[from] tonearm_storage::StorageError),
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

impl From<PlaybackError> for tonearm_core::TonearmError {
    fn from(err: PlaybackError) -> Self {
        match err {
            PlaybackError::InvalidMode(_) => tonearm_core::TonearmError::playback(err.to_string()),
            PlaybackError::Storage(e) => e.into(),
        }
    }
}
