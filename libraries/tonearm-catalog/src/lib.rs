//! Tonearm Catalog
//!
//! Resolves album sources into track lists and keeps a durable history of
//! every album loaded.
//!
//! An album source is either:
//! - a local directory (`file://` URL); every audio file beneath it becomes a
//!   track, in enumeration order
//! - a JSON descriptor file naming the album `uid`, `name` and `tracks`,
//!   addressed by a bare path or by a network URL whose descriptor was
//!   delivered into the configured descriptor directory
//!
//! The catalog never extracts track metadata itself; it hands raw track
//! locators to whoever observes the current album.
//!
//! # Example
//!
//! ```rust,no_run
//! use tonearm_catalog::{AlbumCatalog, CatalogConfig, CatalogEvent};
//!
//! let mut catalog = AlbumCatalog::open(CatalogConfig::in_data_dir("data"));
//! catalog.subscribe(|event| match event {
//!     CatalogEvent::CurrentAlbumChanged { album } => {
//!         println!("{} ({} tracks)", album.name, album.tracks.len());
//!     }
//! });
//!
//! catalog.load_album("file:///music/Kind%20of%20Blue").ok();
//!
//! for entry in catalog.sorted_history() {
//!     println!("{} last loaded {}", entry.descriptor.name, entry.last_loaded);
//! }
//! ```

mod catalog;
mod error;
mod events;
mod scanner;

pub use catalog::{AlbumCatalog, CatalogConfig, CatalogEntry, ALBUM_HISTORY_FILE};
pub use error::{CatalogError, Result};
pub use events::CatalogEvent;
pub use scanner::{is_audio_file, AudioScanner};
