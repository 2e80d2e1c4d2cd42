//! Property-based tests for the playlist engine
//!
//! Uses proptest to verify cursor and traversal invariants across random
//! operation sequences.

use proptest::prelude::*;
use std::collections::HashSet;
use tonearm_core::{MetadataKey, MetadataRecord};
use tonearm_playback::{PlaybackMode, Playlist, PlaylistConfig};

// ===== Helpers =====

fn record(url: &str) -> MetadataRecord {
    let mut record = MetadataRecord::new();
    record.insert(MetadataKey::Url, url);
    record
}

/// Records with possibly repeated urls drawn from a small pool
fn arbitrary_records() -> impl Strategy<Value = Vec<MetadataRecord>> {
    prop::collection::vec("[a-h]{1,2}", 0..30).prop_map(|names| {
        names
            .into_iter()
            .map(|name| record(&format!("file:///music/{name}.mp3")))
            .collect()
    })
}

fn arbitrary_mode() -> impl Strategy<Value = PlaybackMode> {
    prop_oneof![
        Just(PlaybackMode::Sequential),
        Just(PlaybackMode::Loop),
        Just(PlaybackMode::Random),
    ]
}

fn ordered_mode() -> impl Strategy<Value = PlaybackMode> {
    prop_oneof![Just(PlaybackMode::Sequential), Just(PlaybackMode::Loop)]
}

fn playlist_with(mode: PlaybackMode, records: Vec<MetadataRecord>) -> Playlist {
    let mut playlist = Playlist::new(PlaylistConfig::default().with_mode(mode));
    playlist.set_playlist(records);
    playlist
}

fn assert_invariants(playlist: &Playlist) -> Result<(), TestCaseError> {
    let len = playlist.len();

    // Cursor is set iff the list is non-empty, and points into the list
    match playlist.current_index() {
        Some(index) => prop_assert!(index < len),
        None => prop_assert_eq!(len, 0),
    }
    prop_assert_eq!(playlist.current().is_some(), len > 0);

    // Urls stay unique
    let urls: HashSet<&str> = playlist.records().filter_map(|r| r.url()).collect();
    prop_assert_eq!(urls.len(), len);

    // Random order is a bijection over 0..len
    if playlist.playback_mode() == PlaybackMode::Random {
        let order = playlist.random_order();
        prop_assert_eq!(order.len(), len);
        let unique: HashSet<usize> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), len);
        prop_assert!(order.iter().all(|&i| i < len));
    }

    Ok(())
}

// ===== Property Tests =====

proptest! {
    /// Property: Invariants hold after any sequence of operations
    #[test]
    fn invariants_hold_under_random_operations(
        mode in arbitrary_mode(),
        initial in arbitrary_records(),
        operations in prop::collection::vec((0u8..8, arbitrary_records(), arbitrary_mode()), 1..25)
    ) {
        let mut playlist = playlist_with(mode, initial);
        assert_invariants(&playlist)?;

        for (op, records, mode) in operations {
            match op {
                0 => playlist.next(),
                1 => playlist.previous(),
                2 => playlist.end_of_media(),
                3 => playlist.append(records),
                4 => playlist.set_playlist(records),
                5 => playlist.set_playback_mode(mode),
                6 => {
                    if let Some(url) = records.first().and_then(|r| r.url()) {
                        playlist.set_current_by_url(url);
                    }
                }
                _ => playlist.clear(),
            }
            assert_invariants(&playlist)?;
        }
    }

    /// Property: next then previous returns to the start in list-order modes
    #[test]
    fn next_previous_are_inverse(
        mode in ordered_mode(),
        records in arbitrary_records(),
        steps in 0usize..20
    ) {
        let mut playlist = playlist_with(mode, records);
        for _ in 0..steps {
            playlist.next();
        }

        let start = playlist.current_index();
        playlist.next();
        playlist.previous();
        prop_assert_eq!(playlist.current_index(), start);

        playlist.previous();
        playlist.next();
        prop_assert_eq!(playlist.current_index(), start);
    }

    /// Property: next then previous also returns to the start in Random mode
    #[test]
    fn random_next_previous_are_inverse(records in arbitrary_records(), steps in 0usize..20) {
        let mut playlist = playlist_with(PlaybackMode::Random, records);
        for _ in 0..steps {
            playlist.next();
        }

        let start = playlist.current_index();
        playlist.next();
        playlist.previous();
        prop_assert_eq!(playlist.current_index(), start);
    }

    /// Property: Loop end-of-media keeps the current record
    #[test]
    fn loop_end_of_media_keeps_current(records in arbitrary_records(), repeats in 1usize..10) {
        let mut playlist = playlist_with(PlaybackMode::Loop, records);
        let start = playlist.current_id();

        for _ in 0..repeats {
            playlist.end_of_media();
        }
        prop_assert_eq!(playlist.current_id(), start);
    }

    /// Property: Sequential/Random end-of-media advances exactly one step
    #[test]
    fn end_of_media_advances_one_step(
        mode in prop_oneof![Just(PlaybackMode::Sequential), Just(PlaybackMode::Random)],
        records in arbitrary_records(),
        steps in 1usize..10
    ) {
        let mut playlist = playlist_with(mode, records);

        for _ in 0..steps {
            let Some(index) = playlist.current_index() else {
                playlist.end_of_media();
                prop_assert!(playlist.current().is_none());
                continue;
            };

            let len = playlist.len();
            let expected = if mode == PlaybackMode::Random {
                let order = playlist.random_order();
                let position = order.iter().position(|&i| i == index).unwrap();
                order[(position + 1) % len]
            } else {
                (index + 1) % len
            };

            playlist.end_of_media();
            prop_assert_eq!(playlist.current_index(), Some(expected));
        }
    }
}
