//! Track play history
//!
//! Latest metadata snapshot and last play time per track `Url`, persisted on
//! every selection.

use crate::error::Result;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tonearm_core::MetadataRecord;
use tonearm_storage::HistoryStore;

/// Key field of play history rows
const URL_FIELD: &str = "url";

/// One track in the play history
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub url: String,
    pub record: MetadataRecord,
    pub last_played: DateTime<Utc>,
}

/// Play history keyed by track `Url`
#[derive(Debug, Clone)]
pub struct TrackHistory {
    store: HistoryStore<MetadataRecord>,
}

impl TrackHistory {
    /// Open the history, starting empty if the file is missing or unreadable
    pub fn open(path: Option<PathBuf>) -> Self {
        let store = match path {
            Some(path) => HistoryStore::open(path, URL_FIELD),
            None => HistoryStore::in_memory(URL_FIELD),
        };
        Self { store }
    }

    /// Open the history, failing on an unreadable file
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            store: HistoryStore::load(path, URL_FIELD)?,
        })
    }

    /// Record that a track was selected now, and write through
    ///
    /// Records without a `Url` are ignored. Write failures are logged.
    pub fn record_played(&mut self, record: &MetadataRecord) {
        let Some(url) = record.url() else {
            return;
        };

        self.store.upsert(url, record.clone(), Utc::now());
        if let Err(e) = self.store.persist() {
            tracing::warn!("Failed to persist play history: {}", e);
        }
    }

    pub fn get(&self, url: &str) -> Option<HistoryEntry> {
        self.store.history().get(url).map(|stamped| HistoryEntry {
            url: url.to_string(),
            record: stamped.value.clone(),
            last_played: stamped.timestamp,
        })
    }

    /// Entries, most recently played first
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.store
            .history()
            .by_recency()
            .into_iter()
            .map(|(url, stamped)| HistoryEntry {
                url: url.to_string(),
                record: stamped.value.clone(),
                last_played: stamped.timestamp,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.store.history().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.history().is_empty()
    }
}

impl Default for TrackHistory {
    fn default() -> Self {
        Self::open(None)
    }
}
