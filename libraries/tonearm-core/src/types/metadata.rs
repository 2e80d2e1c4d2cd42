//! Metadata record types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Tag names captured for a media resource
///
/// The string form of each key is the field name used in persisted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetadataKey {
    Title,
    Author,
    Comment,
    Description,
    Genre,
    Date,
    Language,
    Publisher,
    Copyright,
    Url,
    /// Duration in milliseconds
    Duration,
    MediaType,
    FileFormat,
    /// Audio bit rate in kbit/s
    AudioBitRate,
    AudioCodec,
    VideoBitRate,
    VideoCodec,
    VideoFrameRate,
    AlbumTitle,
    AlbumArtist,
    ContributingArtist,
    TrackNumber,
    Composer,
    LeadPerformer,
    /// Base64 encoded image
    ThumbnailImage,
    /// Base64 encoded image
    CoverArtImage,
    Orientation,
    Resolution,
}

impl MetadataKey {
    /// Every key the extractor captures, in display order
    pub const TARGETS: [MetadataKey; 28] = [
        MetadataKey::Title,
        MetadataKey::Author,
        MetadataKey::Comment,
        MetadataKey::Description,
        MetadataKey::Genre,
        MetadataKey::Date,
        MetadataKey::Language,
        MetadataKey::Publisher,
        MetadataKey::Copyright,
        MetadataKey::Url,
        MetadataKey::Duration,
        MetadataKey::MediaType,
        MetadataKey::FileFormat,
        MetadataKey::AudioBitRate,
        MetadataKey::AudioCodec,
        MetadataKey::VideoBitRate,
        MetadataKey::VideoCodec,
        MetadataKey::VideoFrameRate,
        MetadataKey::AlbumTitle,
        MetadataKey::AlbumArtist,
        MetadataKey::ContributingArtist,
        MetadataKey::TrackNumber,
        MetadataKey::Composer,
        MetadataKey::LeadPerformer,
        MetadataKey::ThumbnailImage,
        MetadataKey::CoverArtImage,
        MetadataKey::Orientation,
        MetadataKey::Resolution,
    ];

    /// Field name of this key inside a record
    pub fn as_str(self) -> &'static str {
        match self {
            MetadataKey::Title => "Title",
            MetadataKey::Author => "Author",
            MetadataKey::Comment => "Comment",
            MetadataKey::Description => "Description",
            MetadataKey::Genre => "Genre",
            MetadataKey::Date => "Date",
            MetadataKey::Language => "Language",
            MetadataKey::Publisher => "Publisher",
            MetadataKey::Copyright => "Copyright",
            MetadataKey::Url => "Url",
            MetadataKey::Duration => "Duration",
            MetadataKey::MediaType => "MediaType",
            MetadataKey::FileFormat => "FileFormat",
            MetadataKey::AudioBitRate => "AudioBitRate",
            MetadataKey::AudioCodec => "AudioCodec",
            MetadataKey::VideoBitRate => "VideoBitRate",
            MetadataKey::VideoCodec => "VideoCodec",
            MetadataKey::VideoFrameRate => "VideoFrameRate",
            MetadataKey::AlbumTitle => "AlbumTitle",
            MetadataKey::AlbumArtist => "AlbumArtist",
            MetadataKey::ContributingArtist => "ContributingArtist",
            MetadataKey::TrackNumber => "TrackNumber",
            MetadataKey::Composer => "Composer",
            MetadataKey::LeadPerformer => "LeadPerformer",
            MetadataKey::ThumbnailImage => "ThumbnailImage",
            MetadataKey::CoverArtImage => "CoverArtImage",
            MetadataKey::Orientation => "Orientation",
            MetadataKey::Resolution => "Resolution",
        }
    }

    /// Look a key up by its field name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::TARGETS.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from tag name to value describing one media resource
///
/// Serializes as a plain JSON object. `Url` is the identity of a track inside
/// a playlist. An empty record is the degraded result of a failed or timed-out
/// extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord(BTreeMap<String, Value>);

impl MetadataRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a tag value, replacing any previous value
    pub fn insert(&mut self, key: MetadataKey, value: impl Into<Value>) {
        self.0.insert(key.as_str().to_string(), value.into());
    }

    /// Set a tag only when it is not already present
    pub fn insert_missing(&mut self, key: MetadataKey, value: impl Into<Value>) {
        self.0
            .entry(key.as_str().to_string())
            .or_insert_with(|| value.into());
    }

    /// Raw value of a tag
    pub fn get(&self, key: MetadataKey) -> Option<&Value> {
        self.0.get(key.as_str())
    }

    /// Text value of a tag; non-text and blank values count as absent
    pub fn text(&self, key: MetadataKey) -> Option<&str> {
        self.get(key)
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    /// Whether the tag carries a usable value
    pub fn contains(&self, key: MetadataKey) -> bool {
        match self.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::String(text)) => !text.trim().is_empty(),
            Some(_) => true,
        }
    }

    pub fn remove(&mut self, key: MetadataKey) -> Option<Value> {
        self.0.remove(key.as_str())
    }

    /// Keep only the listed keys
    pub fn retain_keys(&mut self, keys: &[MetadataKey]) {
        self.0
            .retain(|name, _| keys.iter().any(|key| key.as_str() == name));
    }

    pub fn url(&self) -> Option<&str> {
        self.text(MetadataKey::Url)
    }

    pub fn title(&self) -> Option<&str> {
        self.text(MetadataKey::Title)
    }

    pub fn author(&self) -> Option<&str> {
        self.text(MetadataKey::Author)
    }

    /// Duration in milliseconds
    pub fn duration_ms(&self) -> Option<u64> {
        self.get(MetadataKey::Duration).and_then(Value::as_u64)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(tag name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_round_trip() {
        for key in MetadataKey::TARGETS {
            assert_eq!(MetadataKey::from_name(key.as_str()), Some(key));
        }
        assert_eq!(MetadataKey::from_name("Lyrics"), None);
    }

    #[test]
    fn blank_text_counts_as_absent() {
        let mut record = MetadataRecord::new();
        record.insert(MetadataKey::Title, "   ");
        assert!(!record.contains(MetadataKey::Title));
        assert_eq!(record.title(), None);
    }

    #[test]
    fn insert_missing_keeps_existing_value() {
        let mut record = MetadataRecord::new();
        record.insert(MetadataKey::Author, "Nina Simone");
        record.insert_missing(MetadataKey::Author, "Unknown");
        record.insert_missing(MetadataKey::Genre, "Jazz");
        assert_eq!(record.author(), Some("Nina Simone"));
        assert_eq!(record.text(MetadataKey::Genre), Some("Jazz"));
    }

    #[test]
    fn retain_keys_drops_everything_else() {
        let mut record = MetadataRecord::new();
        record.insert(MetadataKey::Title, "Song");
        record.insert(MetadataKey::Genre, "Rock");
        record.retain_keys(&[MetadataKey::Title]);
        assert_eq!(record.len(), 1);
        assert_eq!(record.title(), Some("Song"));
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut record = MetadataRecord::new();
        record.insert(MetadataKey::Title, "Song");
        record.insert(MetadataKey::Duration, 180_000u64);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"Duration":180000,"Title":"Song"}"#);

        let back: MetadataRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.duration_ms(), Some(180_000));
    }
}
