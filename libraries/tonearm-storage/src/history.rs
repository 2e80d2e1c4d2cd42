//! Keyed history: latest snapshot and access time per key

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// A value together with the time it was last stored
#[derive(Debug, Clone, PartialEq)]
pub struct Stamped<V> {
    pub value: V,
    pub timestamp: DateTime<Utc>,
}

/// Grow-only map from key to its most recent snapshot
///
/// At most one entry exists per key. Upserting an existing key replaces the
/// snapshot and its timestamp.
#[derive(Debug, Clone)]
pub struct KeyedHistory<V> {
    entries: BTreeMap<String, Stamped<V>>,
}

impl<V> KeyedHistory<V> {
    /// Create an empty history
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert or replace the snapshot for `key`
    ///
    /// Returns true if the key was not present before.
    pub fn upsert(&mut self, key: impl Into<String>, value: V, timestamp: DateTime<Utc>) -> bool {
        self.entries
            .insert(key.into(), Stamped { value, timestamp })
            .is_none()
    }

    pub fn get(&self, key: &str) -> Option<&Stamped<V>> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Stamped<V>)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Entries most recent first; equal timestamps are ordered by key
    pub fn by_recency(&self) -> Vec<(&str, &Stamped<V>)> {
        let mut entries: Vec<_> = self.iter().collect();
        // iter() is already key-ordered and sort_by is stable
        entries.sort_by(|(_, a), (_, b)| b.timestamp.cmp(&a.timestamp));
        entries
    }
}

impl<V> Default for KeyedHistory<V> {
    fn default() -> Self {
        Self::new()
    }
}
