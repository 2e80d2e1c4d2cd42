//! Catalog events
//!
//! Delivered synchronously to every subscriber, in registration order, before
//! the triggering call returns.

use tonearm_core::AlbumDescriptor;

/// Events emitted by the album catalog
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// An album was loaded and is now the current album
    CurrentAlbumChanged {
        /// The loaded album
        album: AlbumDescriptor,
    },
}
