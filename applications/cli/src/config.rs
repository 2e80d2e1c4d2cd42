/// Application configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tonearm_catalog::CatalogConfig;
use tonearm_metadata::{ExtractorConfig, DEFAULT_TIMEOUT_MS};
use tonearm_playback::{PlaybackMode, PlaylistConfig};

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "tonearm.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_metadata")]
    pub metadata: MetadataSettings,

    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Holds album_history.json and play_history.json
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Descriptor files delivered for network album URLs
    #[serde(default = "default_descriptor_dir")]
    pub descriptor_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MetadataSettings {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_mode")]
    pub mode: PlaybackMode,
}

impl AppConfig {
    /// Load configuration from `tonearm.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from a file (if present) and environment
    ///
    /// Environment variables override the file: `TONEARM_STORAGE__DATA_DIR`,
    /// `TONEARM_METADATA__TIMEOUT_MS`, `TONEARM_PLAYBACK__MODE`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = config::Config::builder();

        if path.exists() {
            settings = settings.add_source(config::File::from(path.to_path_buf()));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("TONEARM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.timeout_ms == 0 {
            return Err(CliError::Config(
                "metadata.timeout_ms must be greater than zero".to_string(),
            ));
        }

        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(CliError::Config("storage.data_dir is empty".to_string()));
        }

        Ok(())
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            descriptor_dir: self.storage.descriptor_dir.clone(),
            ..CatalogConfig::in_data_dir(&self.storage.data_dir)
        }
    }

    pub fn playlist_config(&self) -> PlaylistConfig {
        PlaylistConfig::in_data_dir(&self.storage.data_dir).with_mode(self.playback.mode)
    }

    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig::with_timeout_ms(self.metadata.timeout_ms)
    }
}

// Default values
fn default_storage() -> StorageSettings {
    StorageSettings {
        data_dir: default_data_dir(),
        descriptor_dir: default_descriptor_dir(),
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_descriptor_dir() -> PathBuf {
    PathBuf::from("./data/albums")
}

fn default_metadata() -> MetadataSettings {
    MetadataSettings {
        timeout_ms: default_timeout_ms(),
    }
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        mode: default_mode(),
    }
}

fn default_mode() -> PlaybackMode {
    PlaybackMode::Loop
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            metadata: default_metadata(),
            playback: default_playback(),
        }
    }
}
