//! Album catalog: album resolution plus durable album history

use crate::error::{CatalogError, Result};
use crate::events::CatalogEvent;
use crate::scanner::AudioScanner;
use chrono::{DateTime, Utc};
use std::fmt;
use std::path::{Path, PathBuf};
use tonearm_core::{locator, AlbumDescriptor};
use tonearm_storage::HistoryStore;
use url::Url;

/// File name of the album history inside a data directory
pub const ALBUM_HISTORY_FILE: &str = "album_history.json";

/// Key field of album history rows
const UID_FIELD: &str = "uid";

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Backing file of the album history; `None` keeps history in memory only
    pub history_path: Option<PathBuf>,

    /// Directory holding descriptor files delivered for network album URLs
    pub descriptor_dir: PathBuf,
}

impl CatalogConfig {
    /// Standard layout under a data directory
    ///
    /// History goes to `<dir>/album_history.json`, delivered descriptors are
    /// looked up in `<dir>/albums`.
    pub fn in_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            history_path: Some(dir.join(ALBUM_HISTORY_FILE)),
            descriptor_dir: dir.join("albums"),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            history_path: None,
            descriptor_dir: PathBuf::from("albums"),
        }
    }
}

/// One album in the history
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub descriptor: AlbumDescriptor,
    pub last_loaded: DateTime<Utc>,
}

type Observer = Box<dyn FnMut(&CatalogEvent)>;

/// Album catalog
///
/// Owns the album history and the current album. A failed load never touches
/// either and never notifies observers.
pub struct AlbumCatalog {
    config: CatalogConfig,
    scanner: AudioScanner,
    history: HistoryStore<AlbumDescriptor>,
    current: Option<AlbumDescriptor>,
    observers: Vec<Observer>,
}

impl AlbumCatalog {
    /// Open the catalog, reading the album history once
    pub fn open(config: CatalogConfig) -> Self {
        let history = match &config.history_path {
            Some(path) => HistoryStore::open(path, UID_FIELD),
            None => HistoryStore::in_memory(UID_FIELD),
        };
        tracing::debug!("Album catalog opened with {} entries", history.history().len());

        Self {
            config,
            scanner: AudioScanner::new(),
            history,
            current: None,
            observers: Vec::new(),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Register an observer for catalog events
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&CatalogEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Load an album and make it current
    ///
    /// Network URLs and existing bare paths are read as descriptor files,
    /// `file://` URLs are scanned as local album directories.
    pub fn load_album(&mut self, url: &str) -> Result<()> {
        let scheme = locator::scheme_of(url);
        let result = match scheme.as_str() {
            "file" => self.load_local_album(url),
            s if locator::NETWORK_SCHEMES.contains(&s) => self.load_descriptor_album(url),
            "" if Path::new(url).exists() => self.load_descriptor_album(url),
            _ => Err(CatalogError::UnsupportedScheme {
                scheme,
                url: url.to_string(),
            }),
        };

        if let Err(e) = &result {
            tracing::warn!("Failed to load album {}: {}", url, e);
        }
        result
    }

    /// Load an album from a JSON descriptor file
    pub fn load_descriptor_album(&mut self, url: &str) -> Result<()> {
        let path = self.descriptor_path(url)?;
        let descriptor = read_descriptor(&path)?;
        self.commit(descriptor);
        Ok(())
    }

    /// Load every audio file under a local directory as an album
    ///
    /// A file locator resolves to its containing directory.
    pub fn load_local_album(&mut self, url: &str) -> Result<()> {
        let path =
            locator::to_local_path(url).ok_or_else(|| CatalogError::NotFound(url.to_string()))?;

        let dir = if path.is_dir() {
            path
        } else if path.is_file() {
            path.parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| CatalogError::NotFound(url.to_string()))?
        } else {
            return Err(CatalogError::NotFound(path.display().to_string()));
        };
        let dir = dir.canonicalize()?;

        let tracks: Vec<String> = self
            .scanner
            .scan_directory(&dir)?
            .iter()
            .filter_map(|track| locator::file_url(track))
            .collect();
        tracing::debug!("Found {} audio files in {}", tracks.len(), dir.display());

        let uid = dir.display().to_string();
        let name = dir
            .file_name()
            .map_or_else(|| uid.clone(), |n| n.to_string_lossy().into_owned());

        let descriptor = AlbumDescriptor {
            source_url: locator::file_url(&dir).unwrap_or_else(|| url.to_string()),
            description: String::new(),
            name,
            uid,
            tracks,
        };
        self.commit(descriptor);
        Ok(())
    }

    /// The most recently loaded album
    pub fn current_album(&self) -> Option<&AlbumDescriptor> {
        self.current.as_ref()
    }

    /// History entry for an album uid
    pub fn get(&self, uid: &str) -> Option<CatalogEntry> {
        self.history.history().get(uid).map(|stamped| CatalogEntry {
            descriptor: stamped.value.clone(),
            last_loaded: stamped.timestamp,
        })
    }

    pub fn len(&self) -> usize {
        self.history.history().len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.history().is_empty()
    }

    /// History entries, most recently loaded first
    pub fn sorted_history(&self) -> Vec<CatalogEntry> {
        self.history
            .history()
            .by_recency()
            .into_iter()
            .map(|(_, stamped)| CatalogEntry {
                descriptor: stamped.value.clone(),
                last_loaded: stamped.timestamp,
            })
            .collect()
    }

    fn descriptor_path(&self, url: &str) -> Result<PathBuf> {
        if !locator::is_network(url) {
            return Ok(PathBuf::from(url));
        }

        let parsed = Url::parse(url).map_err(|_| CatalogError::NotFound(url.to_string()))?;
        let file_name = parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| CatalogError::NotFound(url.to_string()))?;

        Ok(self.config.descriptor_dir.join(file_name))
    }

    fn commit(&mut self, descriptor: AlbumDescriptor) {
        self.history
            .upsert(descriptor.uid.clone(), descriptor.clone(), Utc::now());
        if let Err(e) = self.history.persist() {
            tracing::warn!("Failed to persist album history: {}", e);
        }

        tracing::info!(
            "Loaded album {} ({} tracks)",
            descriptor.name,
            descriptor.tracks.len()
        );

        let event = CatalogEvent::CurrentAlbumChanged {
            album: descriptor.clone(),
        };
        self.current = Some(descriptor);
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}

impl fmt::Debug for AlbumCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlbumCatalog")
            .field("config", &self.config)
            .field("entries", &self.len())
            .field("current", &self.current.as_ref().map(|a| &a.uid))
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Read and validate a descriptor file
fn read_descriptor(path: &Path) -> Result<AlbumDescriptor> {
    let invalid = |reason: String| CatalogError::InvalidFormat {
        path: path.display().to_string(),
        reason,
    };

    if path.exists() && !path.is_file() {
        return Err(invalid("not a descriptor file".to_string()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogError::NotFound(path.display().to_string()),
        _ => CatalogError::Io(e),
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;
    if !value.is_object() {
        return Err(invalid("not a JSON object".to_string()));
    }

    match value.get(UID_FIELD).and_then(serde_json::Value::as_str) {
        Some(uid) if !uid.is_empty() => {}
        _ => return Err(invalid("missing uid".to_string())),
    }

    serde_json::from_value(value).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn default_config_is_in_memory() {
        let config = CatalogConfig::default();
        assert!(config.history_path.is_none());
    }

    #[test]
    fn data_dir_layout() {
        let config = CatalogConfig::in_data_dir("/var/tonearm");
        assert_eq!(
            config.history_path.as_deref(),
            Some(Path::new("/var/tonearm/album_history.json"))
        );
        assert_eq!(config.descriptor_dir, Path::new("/var/tonearm/albums"));
    }

    #[test]
    fn read_descriptor_accepts_desc_alias() {
        let temp = TempDir::new().unwrap();
        let path = write(
            temp.path(),
            "album.json",
            r#"{"uid":"x","name":"X","desc":"old field","tracks":[]}"#,
        );

        let descriptor = read_descriptor(&path).unwrap();
        assert_eq!(descriptor.description, "old field");
    }

    #[test]
    fn read_descriptor_rejects_empty_uid() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "album.json", r#"{"uid":"","name":"X"}"#);

        assert!(matches!(
            read_descriptor(&path),
            Err(CatalogError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn read_descriptor_rejects_directory() {
        let temp = TempDir::new().unwrap();

        match read_descriptor(temp.path()) {
            Err(CatalogError::InvalidFormat { reason, .. }) => {
                assert_eq!(reason, "not a descriptor file");
            }
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn read_descriptor_rejects_non_string_tracks() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "album.json", r#"{"uid":"x","tracks":[1,2]}"#);

        assert!(matches!(
            read_descriptor(&path),
            Err(CatalogError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn network_url_resolves_to_descriptor_dir() {
        let config = CatalogConfig {
            history_path: None,
            descriptor_dir: PathBuf::from("/srv/albums"),
        };
        let catalog = AlbumCatalog::open(config);

        assert_eq!(
            catalog
                .descriptor_path("https://example.com/albums/blue.json")
                .unwrap(),
            Path::new("/srv/albums/blue.json")
        );
        assert!(matches!(
            catalog.descriptor_path("https://example.com/"),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn observers_notified_in_registration_order() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "album.json", r#"{"uid":"abc","name":"A"}"#);

        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut catalog = AlbumCatalog::open(CatalogConfig::default());
        for id in 0..3 {
            let calls = Rc::clone(&calls);
            catalog.subscribe(move |_| calls.borrow_mut().push(id));
        }

        catalog.load_album(path.to_str().unwrap()).unwrap();
        assert_eq!(*calls.borrow(), vec![0, 1, 2]);
    }
}
