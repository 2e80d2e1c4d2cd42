/// Tag probing: the external capability that reads embedded metadata
use crate::error::Result;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use lofty::{AudioFile, ItemKey, PictureType, TaggedFileExt};
use std::path::Path;
use tonearm_core::{MetadataKey, MetadataRecord};

/// Reads embedded tags from a local media file
///
/// Implementations may block for as long as they need; the extractor runs
/// them on a worker thread and stops waiting after its timeout. A returned
/// error means "no readable tags", not "extraction failed".
pub trait TagProbe: Send + Sync {
    /// Read every tag the file carries
    fn probe(&self, path: &Path) -> Result<MetadataRecord>;
}

/// Tag probe using the lofty library
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyProbe;

impl LoftyProbe {
    /// Create a new probe
    pub fn new() -> Self {
        Self
    }

    /// lofty item keys and the record keys they fill, in priority order
    ///
    /// Nothing fills Author directly; it comes from the artist fallbacks.
    fn item_keys() -> [(ItemKey, MetadataKey); 15] {
        [
            (ItemKey::TrackTitle, MetadataKey::Title),
            (ItemKey::TrackArtist, MetadataKey::ContributingArtist),
            (ItemKey::AlbumTitle, MetadataKey::AlbumTitle),
            (ItemKey::AlbumArtist, MetadataKey::AlbumArtist),
            (ItemKey::Comment, MetadataKey::Comment),
            (ItemKey::Description, MetadataKey::Description),
            (ItemKey::Genre, MetadataKey::Genre),
            (ItemKey::RecordingDate, MetadataKey::Date),
            (ItemKey::Year, MetadataKey::Date),
            (ItemKey::Language, MetadataKey::Language),
            (ItemKey::Publisher, MetadataKey::Publisher),
            (ItemKey::CopyrightMessage, MetadataKey::Copyright),
            (ItemKey::TrackNumber, MetadataKey::TrackNumber),
            (ItemKey::Composer, MetadataKey::Composer),
            (ItemKey::Performer, MetadataKey::LeadPerformer),
        ]
    }

    /// Extract text items and artwork from a lofty tag
    fn extract_from_tag(tag: &lofty::Tag, record: &mut MetadataRecord) {
        for (item_key, key) in Self::item_keys() {
            if let Some(text) = tag.get_string(&item_key) {
                let text = text.trim();
                if !text.is_empty() {
                    record.insert_missing(key, text);
                }
            }
        }

        for picture in tag.pictures() {
            let key = match picture.pic_type() {
                PictureType::CoverFront => MetadataKey::CoverArtImage,
                PictureType::Icon | PictureType::OtherIcon => MetadataKey::ThumbnailImage,
                _ => continue,
            };
            record.insert_missing(key, BASE64.encode(picture.data()));
        }
    }
}

impl TagProbe for LoftyProbe {
    fn probe(&self, path: &Path) -> Result<MetadataRecord> {
        let tagged_file = lofty::read_from_path(path)?;
        let properties = tagged_file.properties();

        let mut record = MetadataRecord::new();
        record.insert(MetadataKey::MediaType, "audio");
        record.insert(
            MetadataKey::FileFormat,
            format!("{:?}", tagged_file.file_type()),
        );

        let duration_ms = properties.duration().as_millis() as u64;
        if duration_ms > 0 {
            record.insert(MetadataKey::Duration, duration_ms);
        }
        if let Some(bitrate) = properties.audio_bitrate() {
            record.insert(MetadataKey::AudioBitRate, bitrate);
        }

        // Primary tag first, then any other tag the container carries
        if let Some(primary) = tagged_file.primary_tag() {
            Self::extract_from_tag(primary, &mut record);
        }
        for tag in tagged_file.tags() {
            Self::extract_from_tag(tag, &mut record);
        }

        Ok(record)
    }
}
