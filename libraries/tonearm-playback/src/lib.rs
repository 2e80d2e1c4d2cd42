//! Tonearm - Playlist Engine
//!
//! Ordered list of metadata records with a current cursor and three playback
//! modes:
//! - Sequential: list order, wrapping at both ends
//! - Loop: list order; a track that ends on its own plays again
//! - Random: walks a shuffled permutation of list positions
//!
//! Every time a record becomes current it is written to the track play
//! history (`play_history.json`), keyed by its `Url`.
//!
//! The engine never decodes audio. Whoever owns it reports natural track ends
//! through [`Playlist::end_of_media`] and follows the cursor through
//! [`PlaylistEvent::CurrentChanged`].
//!
//! # Example
//!
//! ```rust
//! use tonearm_core::{MetadataKey, MetadataRecord};
//! use tonearm_playback::{PlaybackMode, Playlist, PlaylistConfig, PlaylistEvent};
//!
//! let mut playlist = Playlist::new(PlaylistConfig::default().with_mode(PlaybackMode::Loop));
//! playlist.subscribe(|event| {
//!     if let PlaylistEvent::CurrentChanged { url } = event {
//!         println!("now playing {url}");
//!     }
//! });
//!
//! let records = ["file:///music/a.mp3", "file:///music/b.mp3"].map(|url| {
//!     let mut record = MetadataRecord::new();
//!     record.insert(MetadataKey::Url, url);
//!     record
//! });
//! playlist.set_playlist(records);
//!
//! playlist.end_of_media();
//! assert_eq!(playlist.current().and_then(|r| r.url()), Some("file:///music/a.mp3"));
//!
//! playlist.next();
//! assert_eq!(playlist.current().and_then(|r| r.url()), Some("file:///music/b.mp3"));
//! ```

mod error;
mod events;
mod history;
mod playlist;
mod shuffle;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::PlaylistEvent;
pub use history::{HistoryEntry, TrackHistory};
pub use playlist::Playlist;
pub use shuffle::{shuffled_order, shuffled_order_with};
pub use types::{ItemId, PlaybackMode, PlaylistConfig, PlaylistItem, PLAY_HISTORY_FILE};
