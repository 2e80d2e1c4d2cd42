//! Tonearm CLI
//!
//! Wires the album catalog, the metadata extractor and the playlist engine
//! into one session: loading an album extracts every track and replaces the
//! playlist.

pub mod config;
pub mod error;
pub mod session;

pub use config::AppConfig;
pub use error::{CliError, Result};
pub use session::Session;
