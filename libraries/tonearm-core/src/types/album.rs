//! Album types

use serde::{Deserialize, Serialize};

/// A named, uniquely keyed collection of track locators
///
/// For descriptor files the `uid` comes from the file; for local directories
/// it is the absolute directory path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumDescriptor {
    pub uid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "desc")]
    pub description: String,
    #[serde(default, rename = "url")]
    pub source_url: String,
    #[serde(default)]
    pub tracks: Vec<String>,
}

impl AlbumDescriptor {
    /// Create a descriptor with no description, source or tracks
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            description: String::new(),
            source_url: String::new(),
            tracks: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_descriptor() {
        let album: AlbumDescriptor =
            serde_json::from_str(r#"{"uid":"abc","name":"A","tracks":["t1","t2"]}"#).unwrap();
        assert_eq!(album.uid, "abc");
        assert_eq!(album.name, "A");
        assert_eq!(album.description, "");
        assert_eq!(album.tracks, vec!["t1", "t2"]);
    }

    #[test]
    fn accepts_short_description_field() {
        let album: AlbumDescriptor =
            serde_json::from_str(r#"{"uid":"abc","desc":"live set"}"#).unwrap();
        assert_eq!(album.description, "live set");
    }

    #[test]
    fn source_url_serializes_as_url() {
        let mut album = AlbumDescriptor::new("/music/a", "a");
        album.source_url = "file:///music/a".to_string();
        let json = serde_json::to_value(&album).unwrap();
        assert_eq!(json["url"], "file:///music/a");
        assert!(json.get("source_url").is_none());
    }
}
