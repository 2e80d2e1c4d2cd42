//! Tonearm Storage
//!
//! Durable keyed history for Tonearm.
//!
//! Both the album catalog and the track play history are "latest snapshot per
//! key plus last access time" maps, persisted as a single JSON document:
//!
//! ```text
//! {"history": [{"<key field>": "...", "data": {...}, "timestamp": 1718000000}, ...]}
//! ```
//!
//! The document is loaded once at startup and rewritten wholesale after every
//! mutation. Writes go to a sibling temporary file which is then renamed over
//! the store, so a crash mid-write leaves the previous document intact.
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use tonearm_storage::HistoryStore;
//!
//! # fn main() -> tonearm_storage::Result<()> {
//! let mut store: HistoryStore<String> = HistoryStore::open("data/notes.json", "id");
//! store.upsert("a", "first".to_string(), Utc::now());
//! store.persist()?;
//! # Ok(())
//! # }
//! ```

mod document;
mod error;
mod history;
mod json_file;
mod store;

pub use document::{decode_history, encode_history};
pub use error::{Result, StorageError};
pub use history::{KeyedHistory, Stamped};
pub use json_file::JsonFile;
pub use store::HistoryStore;
