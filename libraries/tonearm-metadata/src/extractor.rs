//! Metadata extraction with a bounded wait
//!
//! The probe runs on a short-lived worker thread. The calling thread blocks
//! on a bounded channel receive for at most the configured timeout; if the
//! probe has not answered by then the worker is left to finish on its own and
//! its late result is dropped.

use crate::error::{MetadataError, Result};
use crate::fallback::apply_fallbacks;
use crate::probe::{LoftyProbe, TagProbe};
use crossbeam_channel::{bounded, RecvTimeoutError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tonearm_core::{locator, MetadataKey, MetadataRecord};

/// Default bound on a single extraction
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Extractor configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// How long to wait for the probe (default: 5000 ms)
    pub timeout: Duration,
}

impl ExtractorConfig {
    pub fn with_timeout_ms(timeout_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::with_timeout_ms(DEFAULT_TIMEOUT_MS)
    }
}

/// Derives display metadata for media files
///
/// Holds no per-call state; calling it once per track in sequence is safe.
/// Clones share the same probe.
#[derive(Clone)]
pub struct MetadataExtractor {
    probe: Arc<dyn TagProbe>,
    config: ExtractorConfig,
}

impl MetadataExtractor {
    /// Create an extractor backed by lofty
    pub fn new(config: ExtractorConfig) -> Self {
        Self::with_probe(LoftyProbe::new(), config)
    }

    /// Create an extractor with a custom tag probe
    pub fn with_probe(probe: impl TagProbe + 'static, config: ExtractorConfig) -> Self {
        Self {
            probe: Arc::new(probe),
            config,
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract metadata, degrading to an empty record on any failure
    pub fn extract(&self, locator: &str) -> MetadataRecord {
        self.extract_with_timeout(locator, self.config.timeout)
    }

    /// Extract metadata with an explicit bound, degrading to an empty record
    pub fn extract_with_timeout(&self, locator: &str, timeout: Duration) -> MetadataRecord {
        match self.try_extract_with_timeout(locator, timeout) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Metadata extraction failed for {}: {}", locator, e);
                MetadataRecord::new()
            }
        }
    }

    /// Extract metadata for every locator in order, one at a time
    ///
    /// Failed extractions appear as empty records at their position.
    pub fn extract_all<S: AsRef<str>>(&self, locators: &[S]) -> Vec<MetadataRecord> {
        locators
            .iter()
            .map(|locator| self.extract(locator.as_ref()))
            .collect()
    }

    /// Extract metadata, returning the reason when nothing could be read
    pub fn try_extract(&self, locator: &str) -> Result<MetadataRecord> {
        self.try_extract_with_timeout(locator, self.config.timeout)
    }

    pub fn try_extract_with_timeout(
        &self,
        locator: &str,
        timeout: Duration,
    ) -> Result<MetadataRecord> {
        let path = resolve_local_file(locator)?;
        let mut record = self.probe_bounded(&path, locator, timeout)?;

        record.retain_keys(&MetadataKey::TARGETS);
        apply_fallbacks(&mut record, &path);
        if record.duration_ms().unwrap_or(0) == 0 {
            record.remove(MetadataKey::Duration);
        }
        record.insert(MetadataKey::Url, locator);

        tracing::debug!(
            "Extracted {} tags from {}",
            record.len(),
            path.display()
        );
        Ok(record)
    }

    /// Run the probe on a worker thread and wait at most `timeout` for it
    fn probe_bounded(
        &self,
        path: &Path,
        locator: &str,
        timeout: Duration,
    ) -> Result<MetadataRecord> {
        let (tx, rx) = bounded(1);
        let probe = Arc::clone(&self.probe);
        let probe_path = path.to_path_buf();

        thread::Builder::new()
            .name("tonearm-tag-probe".to_string())
            .spawn(move || {
                // Receiver is gone if the wait already timed out
                let _ = tx.send(probe.probe(&probe_path));
            })?;

        match rx.recv_timeout(timeout) {
            Ok(Ok(tags)) => Ok(tags),
            Ok(Err(e)) => {
                tracing::debug!("No readable tags in {}: {}", path.display(), e);
                Ok(MetadataRecord::new())
            }
            Err(RecvTimeoutError::Timeout) => Err(MetadataError::Timeout {
                locator: locator.to_string(),
                timeout,
            }),
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("Tag probe for {} exited without a result", path.display());
                Ok(MetadataRecord::new())
            }
        }
    }
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

/// Resolve a locator to an existing local file
fn resolve_local_file(locator: &str) -> Result<PathBuf> {
    let path = locator::to_local_path(locator)
        .ok_or_else(|| MetadataError::Unsupported(locator.to_string()))?;

    if !path.exists() {
        return Err(MetadataError::FileNotFound(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(MetadataError::Unsupported(format!(
            "{} is not a file",
            path.display()
        )));
    }

    Ok(path)
}
