//! File scanning for audio files

use crate::error::{CatalogError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursive scanner for audio files in a directory
///
/// Symbolic links are not followed. Files are classified by their guessed
/// content type; anything whose type is `audio/*` is kept. Results come back
/// in directory walk order, unsorted.
#[derive(Debug, Clone, Default)]
pub struct AudioScanner {
    /// Maximum depth to traverse (unlimited when `None`)
    max_depth: Option<usize>,
}

impl AudioScanner {
    /// Create a new scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum directory depth to traverse
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Scan a directory for audio files
    pub fn scan_directory(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !path.is_dir() {
            return Err(CatalogError::NotFound(path.display().to_string()));
        }

        let mut walker = WalkDir::new(path);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut audio_files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry under {}: {}", path.display(), e);
                    continue;
                }
            };

            let path = entry.path();
            if path.is_file() && is_audio_file(path) {
                audio_files.push(path.to_path_buf());
            }
        }

        Ok(audio_files)
    }
}

/// Check if a file's guessed content type is audio
pub fn is_audio_file(path: &Path) -> bool {
    mime_guess::from_path(path)
        .iter()
        .any(|mime| mime.type_() == mime_guess::mime::AUDIO)
}
