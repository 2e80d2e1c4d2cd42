//! Playback session
//!
//! Owns one catalog and one playlist. The playlist follows the
//! catalog: every time an album becomes current its tracks are extracted in
//! order and replace the playlist.

use crate::config::AppConfig;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use tonearm_catalog::{AlbumCatalog, CatalogEvent};
use tonearm_core::Result;
use tonearm_metadata::MetadataExtractor;
use tonearm_playback::Playlist;

pub struct Session {
    catalog: AlbumCatalog,
    playlist: Rc<RefCell<Playlist>>,
}

impl Session {
    /// Open every store named by the configuration
    pub fn open(config: &AppConfig) -> Self {
        Self::with_extractor(config, MetadataExtractor::new(config.extractor_config()))
    }

    /// Open a session with a custom extractor
    pub fn with_extractor(config: &AppConfig, extractor: MetadataExtractor) -> Self {
        let mut catalog = AlbumCatalog::open(config.catalog_config());
        let playlist = Rc::new(RefCell::new(Playlist::new(config.playlist_config())));

        let target = Rc::clone(&playlist);
        catalog.subscribe(move |event| match event {
            CatalogEvent::CurrentAlbumChanged { album } => {
                tracing::debug!("Extracting {} tracks of {}", album.tracks.len(), album.name);
                let records = extractor.extract_all(&album.tracks);
                target.borrow_mut().set_playlist(records);
            }
        });

        Self { catalog, playlist }
    }

    /// Load an album; on success the playlist holds its tracks
    ///
    /// Returns the playlist length. On failure the previous album and
    /// playlist stay as they were.
    pub fn open_album(&mut self, url: &str) -> Result<usize> {
        self.catalog.load_album(url)?;
        Ok(self.playlist.borrow().len())
    }

    pub fn catalog(&self) -> &AlbumCatalog {
        &self.catalog
    }

    pub fn playlist(&self) -> Ref<'_, Playlist> {
        self.playlist.borrow()
    }

    pub fn playlist_mut(&self) -> RefMut<'_, Playlist> {
        self.playlist.borrow_mut()
    }
}
