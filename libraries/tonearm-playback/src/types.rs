//! Core types for the playlist engine

use crate::error::PlaybackError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tonearm_core::MetadataRecord;

/// File name of the track play history inside a data directory
pub const PLAY_HISTORY_FILE: &str = "play_history.json";

/// Playback mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackMode {
    /// List order, wrapping at both ends
    #[default]
    Sequential,

    /// List order; a track that ends naturally plays again
    Loop,

    /// Shuffled traversal order, wrapping at both ends
    Random,
}

impl PlaybackMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Loop => "loop",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaybackMode {
    type Err = PlaybackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "loop" => Ok(Self::Loop),
            "random" | "shuffle" => Ok(Self::Random),
            _ => Err(PlaybackError::InvalidMode(s.to_string())),
        }
    }
}

/// Stable identity of one playlist entry
///
/// Ids are never reused within a playlist, so a cursor holding an id stays
/// valid across appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A record in the playlist
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistItem {
    pub id: ItemId,
    pub record: MetadataRecord,
}

impl PlaylistItem {
    /// `Url` of the record; always present for items in a playlist
    pub fn url(&self) -> &str {
        self.record.url().unwrap_or_default()
    }
}

/// Configuration for the playlist engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistConfig {
    /// Backing file of the track play history; `None` keeps it in memory
    pub history_path: Option<PathBuf>,

    /// Initial playback mode (default: Sequential)
    pub mode: PlaybackMode,
}

impl PlaylistConfig {
    /// Play history stored as `<dir>/play_history.json`
    pub fn in_data_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            history_path: Some(dir.as_ref().join(PLAY_HISTORY_FILE)),
            mode: PlaybackMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: PlaybackMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            history_path: None,
            mode: PlaybackMode::Sequential,
        }
    }
}
