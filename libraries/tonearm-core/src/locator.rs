//! Media locator helpers
//!
//! A locator is either a URL (`file:///music/a.flac`, `https://host/album.json`)
//! or a bare filesystem path. Bare paths have an empty scheme.

use std::path::{Path, PathBuf};
use url::Url;

/// Schemes whose albums are delivered as descriptor files
pub const NETWORK_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps", "sftp"];

/// Lower-cased scheme of a locator, or an empty string for bare paths
///
/// Single-letter schemes are Windows drive letters (`C:\music`), not URLs.
pub fn scheme_of(locator: &str) -> String {
    match Url::parse(locator) {
        Ok(url) if url.scheme().len() > 1 => url.scheme().to_ascii_lowercase(),
        _ => String::new(),
    }
}

/// Whether the locator uses one of the network schemes
pub fn is_network(locator: &str) -> bool {
    NETWORK_SCHEMES.contains(&scheme_of(locator).as_str())
}

/// Resolve a locator to a local filesystem path
///
/// Returns `None` for anything that is neither a `file` URL nor a bare path.
pub fn to_local_path(locator: &str) -> Option<PathBuf> {
    match scheme_of(locator).as_str() {
        "" if !locator.is_empty() => Some(PathBuf::from(locator)),
        "file" => Url::parse(locator).ok()?.to_file_path().ok(),
        _ => None,
    }
}

/// `file://` URL string for an absolute path
pub fn file_url(path: &Path) -> Option<String> {
    Url::from_file_path(path).ok().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_is_lowercased() {
        assert_eq!(scheme_of("HTTPS://example.com/album.json"), "https");
        assert_eq!(scheme_of("file:///music/a.mp3"), "file");
    }

    #[test]
    fn bare_paths_have_empty_scheme() {
        assert_eq!(scheme_of("/music/a.mp3"), "");
        assert_eq!(scheme_of("relative/a.mp3"), "");
        assert_eq!(scheme_of("Artist - Title.mp3"), "");
    }

    #[test]
    fn network_schemes() {
        assert!(is_network("sftp://host/albums/a.json"));
        assert!(is_network("ftp://host/a.json"));
        assert!(!is_network("file:///a.json"));
        assert!(!is_network("/a.json"));
    }

    #[cfg(unix)]
    #[test]
    fn file_url_resolves_to_path() {
        assert_eq!(
            to_local_path("file:///music/My%20Album/01.mp3"),
            Some(PathBuf::from("/music/My Album/01.mp3"))
        );
        assert_eq!(
            to_local_path("/music/01.mp3"),
            Some(PathBuf::from("/music/01.mp3"))
        );
    }

    #[test]
    fn remote_locators_do_not_resolve() {
        assert_eq!(to_local_path("https://example.com/a.mp3"), None);
        assert_eq!(to_local_path("rtsp://example.com/stream"), None);
        assert_eq!(to_local_path(""), None);
    }

    #[cfg(unix)]
    #[test]
    fn file_url_round_trips_through_path() {
        let url = file_url(Path::new("/music/My Album/01.mp3")).unwrap();
        assert_eq!(url, "file:///music/My%20Album/01.mp3");
        assert_eq!(
            to_local_path(&url),
            Some(PathBuf::from("/music/My Album/01.mp3"))
        );
    }
}
