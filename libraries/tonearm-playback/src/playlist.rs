//! Playlist engine: ordered records, current cursor, playback mode

use crate::events::PlaylistEvent;
use crate::history::{HistoryEntry, TrackHistory};
use crate::shuffle::shuffled_order;
use crate::types::{ItemId, PlaybackMode, PlaylistConfig, PlaylistItem};
use std::collections::HashSet;
use std::fmt;
use tonearm_core::MetadataRecord;

type Observer = Box<dyn FnMut(&PlaylistEvent)>;

/// Direction of a single navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Forward,
    Back,
}

/// Central playlist management
///
/// Holds the records in list order, a cursor to the current record and the
/// random traversal order. Invariants:
/// - the cursor is set iff the list is non-empty
/// - every `Url` in the list is unique
/// - in Random mode the traversal order is a permutation of `0..len`
///
/// Every selection of a current record is written to the track play history.
pub struct Playlist {
    /// Records in list order
    items: Vec<PlaylistItem>,

    /// Id of the current record
    current: Option<ItemId>,

    mode: PlaybackMode,

    /// Permutation of list positions walked in Random mode
    random_order: Vec<usize>,

    next_id: u64,

    history: TrackHistory,

    observers: Vec<Observer>,
}

impl Playlist {
    /// Create an empty playlist, reading the play history once
    pub fn new(config: PlaylistConfig) -> Self {
        Self::with_history(config.mode, TrackHistory::open(config.history_path))
    }

    /// Create an empty playlist over an already opened play history
    pub fn with_history(mode: PlaybackMode, history: TrackHistory) -> Self {
        Self {
            items: Vec::new(),
            current: None,
            mode,
            random_order: Vec::new(),
            next_id: 0,
            history,
            observers: Vec::new(),
        }
    }

    /// Register an observer for playlist events
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&PlaylistEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    // ===== Mode =====

    pub fn playback_mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Set the playback mode
    ///
    /// Entering Random mode draws a fresh traversal order, even when the mode
    /// was already Random.
    pub fn set_playback_mode(&mut self, mode: PlaybackMode) {
        self.mode = mode;
        if mode == PlaybackMode::Random {
            self.reshuffle();
        }
        tracing::debug!("Playback mode set to {}", mode);
    }

    /// Random traversal order (positions into the list)
    pub fn random_order(&self) -> &[usize] {
        &self.random_order
    }

    // ===== List management =====

    /// Append records to the end of the list
    ///
    /// Records without a `Url`, or whose `Url` is already listed, are dropped.
    /// An empty list gets its first record as current.
    pub fn append<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = MetadataRecord>,
    {
        let mut urls: HashSet<String> = self
            .items
            .iter()
            .map(|item| item.url().to_string())
            .collect();

        for record in records {
            let Some(url) = record.url().map(str::to_string) else {
                tracing::warn!("Dropping playlist record without Url");
                continue;
            };
            if !urls.insert(url.clone()) {
                tracing::warn!("Dropping duplicate playlist record: {}", url);
                continue;
            }

            let id = ItemId(self.next_id);
            self.next_id += 1;
            self.items.push(PlaylistItem { id, record });
        }

        self.list_changed();
    }

    /// Replace the whole list
    ///
    /// The first record becomes current.
    pub fn set_playlist<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = MetadataRecord>,
    {
        self.items.clear();
        self.current = None;
        self.append(records);
    }

    /// Remove every record
    pub fn clear(&mut self) {
        self.items.clear();
        self.list_changed();
    }

    // ===== Current record =====

    /// Select the first record whose `Url` matches
    ///
    /// Returns false and keeps the current record when nothing matches.
    pub fn set_current_by_url(&mut self, url: &str) -> bool {
        match self.items.iter().position(|item| item.url() == url) {
            Some(index) => {
                self.select(index);
                true
            }
            None => {
                tracing::debug!("No playlist record with Url {}", url);
                false
            }
        }
    }

    /// Advance one step in the current mode's traversal order
    pub fn next(&mut self) {
        self.step(Step::Forward);
    }

    /// Go back one step in the current mode's traversal order
    pub fn previous(&mut self) {
        self.step(Step::Back);
    }

    /// The current record finished playing on its own
    ///
    /// Loop selects the same record again; the other modes advance.
    pub fn end_of_media(&mut self) {
        match self.mode {
            PlaybackMode::Loop => {
                if let Some(index) = self.current_index() {
                    self.select(index);
                }
            }
            PlaybackMode::Sequential | PlaybackMode::Random => self.next(),
        }
    }

    pub fn current(&self) -> Option<&MetadataRecord> {
        self.current_index().map(|index| &self.items[index].record)
    }

    pub fn current_id(&self) -> Option<ItemId> {
        self.current_index().map(|index| self.items[index].id)
    }

    /// Position of the current record in list order
    ///
    /// A cursor whose record is gone falls back to the first record.
    pub fn current_index(&self) -> Option<usize> {
        let id = self.current?;
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => Some(index),
            None if self.items.is_empty() => None,
            None => Some(0),
        }
    }

    // ===== Queries =====

    pub fn items(&self) -> &[PlaylistItem] {
        &self.items
    }

    /// Records in list order
    pub fn records(&self) -> impl Iterator<Item = &MetadataRecord> {
        self.items.iter().map(|item| &item.record)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Play history, most recently played first
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.entries()
    }

    pub fn track_history(&self) -> &TrackHistory {
        &self.history
    }

    // ===== Internal =====

    fn step(&mut self, step: Step) {
        let Some(index) = self.current_index() else {
            return;
        };
        let len = self.items.len();

        let target = if self.mode == PlaybackMode::Random && self.random_order.len() == len {
            let position = self
                .random_order
                .iter()
                .position(|&i| i == index)
                .unwrap_or(0);
            self.random_order[wrap(position, len, step)]
        } else {
            wrap(index, len, step)
        };

        self.select(target);
    }

    /// Make the record at `index` current, record it as played and notify
    fn select(&mut self, index: usize) {
        let item = &self.items[index];
        self.current = Some(item.id);
        self.history.record_played(&item.record);

        let url = item.url().to_string();
        tracing::debug!("Current track: {}", url);
        self.emit(&PlaylistEvent::CurrentChanged { url });
    }

    /// Restore the cursor invariant after the list changed, then notify
    fn list_changed(&mut self) {
        if self.items.is_empty() {
            self.current = None;
        } else if self.current.is_none() {
            self.select(0);
        }

        if self.mode == PlaybackMode::Random {
            self.reshuffle();
        }

        self.emit(&PlaylistEvent::ListChanged {
            length: self.items.len(),
        });
    }

    fn reshuffle(&mut self) {
        self.random_order = shuffled_order(self.items.len());
    }

    fn emit(&mut self, event: &PlaylistEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new(PlaylistConfig::default())
    }
}

impl fmt::Debug for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Playlist")
            .field("len", &self.items.len())
            .field("current", &self.current)
            .field("mode", &self.mode)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

/// One step from `index` in a ring of `len` positions
fn wrap(index: usize, len: usize, step: Step) -> usize {
    match step {
        Step::Forward => (index + 1) % len,
        Step::Back => (index + len - 1) % len,
    }
}
