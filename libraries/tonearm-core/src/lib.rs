//! Tonearm Core
//!
//! Platform-agnostic core types, locator helpers and error handling for Tonearm.
//!
//! This crate provides the foundational building blocks shared by the
//! metadata extractor, the album catalog and the playlist engine.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `MetadataRecord`, `MetadataKey`, `AlbumDescriptor`
//! - **Locators**: scheme classification and locator → local path resolution
//! - **Error Handling**: Unified `TonearmError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tonearm_core::{MetadataKey, MetadataRecord};
//!
//! let mut record = MetadataRecord::new();
//! record.insert(MetadataKey::Title, "Blue in Green");
//! record.insert(MetadataKey::Url, "file:///music/kind-of-blue/03.flac");
//! record.insert(MetadataKey::Duration, 337_000u64);
//!
//! assert_eq!(record.title(), Some("Blue in Green"));
//! assert_eq!(record.duration_ms(), Some(337_000));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod locator;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TonearmError};
pub use types::{AlbumDescriptor, MetadataKey, MetadataRecord};
