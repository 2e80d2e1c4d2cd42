//! Filename-derived Title and Author
//!
//! Files are commonly named `"Artist - Title.ext"`. When embedded tags are
//! missing the filename is split on `" - "`: the first part is the artist and
//! the second part the title. Any further parts are ignored.

use std::path::Path;
use tonearm_core::{MetadataKey, MetadataRecord};

const SEPARATOR: &str = " - ";

/// Author used when neither tags nor the filename name one
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Artist and title parsed from a filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameParts {
    /// First part, if the name had a separator
    pub artist: Option<String>,
    /// Second part, or the whole name
    pub title: String,
}

/// Split a file name (extension removed) into artist and title
pub fn split_filename(path: &Path) -> FilenameParts {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut parts = stem.split(SEPARATOR);
    match (parts.next(), parts.next()) {
        (Some(artist), Some(title)) => FilenameParts {
            artist: Some(artist.trim().to_string()),
            title: title.trim().to_string(),
        },
        _ => FilenameParts {
            artist: None,
            title: stem.trim().to_string(),
        },
    }
}

/// Fill in Title and Author when the record lacks them
///
/// Author prefers `ContributingArtist`, then `AlbumArtist`, then the artist
/// part of the filename, then `"Unknown"`.
pub fn apply_fallbacks(record: &mut MetadataRecord, path: &Path) {
    let parts = split_filename(path);

    if !record.contains(MetadataKey::Title) {
        record.insert(MetadataKey::Title, parts.title);
    }

    if !record.contains(MetadataKey::Author) {
        let author = record
            .text(MetadataKey::ContributingArtist)
            .or_else(|| record.text(MetadataKey::AlbumArtist))
            .map(str::to_string)
            .or(parts.artist)
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
        record.insert(MetadataKey::Author, author);
    }
}
