//! Playlist Events
//!
//! Delivered synchronously to every subscriber, in emission order.

use serde::{Deserialize, Serialize};

/// Events emitted by the playlist engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaylistEvent {
    /// Records were appended, replaced or cleared
    ListChanged {
        /// New playlist length
        length: usize,
    },

    /// A record was selected as current
    ///
    /// Also emitted when the same record is selected again (loop).
    CurrentChanged {
        /// `Url` of the current record
        url: String,
    },
}
