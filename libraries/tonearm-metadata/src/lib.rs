//! Tonearm Metadata
//!
//! Metadata extraction for media files with a bounded wait.
//!
//! This crate provides:
//! - A `TagProbe` seam for the external tag-reading capability
//! - `LoftyProbe`, the default probe built on lofty
//! - `MetadataExtractor`, which waits on the probe for at most a configured
//!   timeout and fills in Title/Author from the filename when tags are absent
//!
//! Extraction never fails loudly: a missing file, a remote locator or an
//! expired wait all degrade to an empty record. `try_extract` exposes the
//! underlying error for callers that want it.
//!
//! # Example
//!
//! ```rust,no_run
//! use tonearm_metadata::{ExtractorConfig, MetadataExtractor};
//!
//! let extractor = MetadataExtractor::new(ExtractorConfig::default());
//! let record = extractor.extract("file:///music/Artist%20-%20Title.mp3");
//!
//! if let Some(title) = record.title() {
//!     println!("{}", title);
//! }
//! ```

mod error;
mod extractor;
mod fallback;
mod probe;

pub use error::{MetadataError, Result};
pub use extractor::{ExtractorConfig, MetadataExtractor, DEFAULT_TIMEOUT_MS};
pub use fallback::{apply_fallbacks, split_filename, FilenameParts, UNKNOWN_AUTHOR};
pub use probe::{LoftyProbe, TagProbe};
