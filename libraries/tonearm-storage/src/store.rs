//! Keyed history bound to its backing file

use crate::document::{decode_history, encode_history};
use crate::error::Result;
use crate::history::KeyedHistory;
use crate::json_file::JsonFile;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Keyed history that is loaded once and written through on demand
///
/// An in-memory store has no backing file; `persist` is then a no-op.
#[derive(Debug, Clone)]
pub struct HistoryStore<V> {
    file: Option<JsonFile>,
    key_field: &'static str,
    history: KeyedHistory<V>,
}

impl<V> HistoryStore<V>
where
    V: Serialize + DeserializeOwned,
{
    /// Open a store, starting empty if the file is missing or unreadable
    ///
    /// Read failures are logged rather than returned: the next successful
    /// persist overwrites the unreadable document.
    pub fn open(path: impl Into<PathBuf>, key_field: &'static str) -> Self {
        let file = JsonFile::new(path);
        let history = match Self::read_history(&file, key_field) {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!(
                    "Failed to load history from {}: {}",
                    file.path().display(),
                    e
                );
                KeyedHistory::new()
            }
        };

        Self {
            file: Some(file),
            key_field,
            history,
        }
    }

    /// Open a store, returning read failures to the caller
    pub fn load(path: impl Into<PathBuf>, key_field: &'static str) -> Result<Self> {
        let file = JsonFile::new(path);
        let history = Self::read_history(&file, key_field)?;
        Ok(Self {
            file: Some(file),
            key_field,
            history,
        })
    }

    /// Create a store that is never written to disk
    pub fn in_memory(key_field: &'static str) -> Self {
        Self {
            file: None,
            key_field,
            history: KeyedHistory::new(),
        }
    }

    /// Insert or replace the snapshot for `key`
    ///
    /// Returns true if the key is new. Call `persist` to write through.
    pub fn upsert(&mut self, key: impl Into<String>, value: V, timestamp: DateTime<Utc>) -> bool {
        self.history.upsert(key, value, timestamp)
    }

    /// Rewrite the backing file with the full history
    pub fn persist(&self) -> Result<()> {
        let Some(file) = &self.file else {
            return Ok(());
        };
        let document = encode_history(&self.history, self.key_field)?;
        file.write(&document)?;
        tracing::debug!(
            "Persisted {} history entries to {}",
            self.history.len(),
            file.path().display()
        );
        Ok(())
    }

    pub fn history(&self) -> &KeyedHistory<V> {
        &self.history
    }

    /// Backing file path, if any
    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(JsonFile::path)
    }

    fn read_history(file: &JsonFile, key_field: &str) -> Result<KeyedHistory<V>> {
        match file.read()? {
            Some(document) => decode_history(document, key_field),
            None => Ok(KeyedHistory::new()),
        }
    }
}
