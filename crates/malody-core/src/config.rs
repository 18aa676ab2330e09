//! Declarative data driving the import pipeline.
//!
//! This module contains:
//! - Wire key names of the chart JSON document
//! - The field pair that marks an object as a command
//! - The metadata remap table between wire paths and chart arguments

/// Top-level and metadata keys of the wire document.
pub mod wire {
    pub const META: &str = "meta";
    pub const TIME: &str = "time";
    pub const EFFECT: &str = "effect";
    pub const NOTE: &str = "note";
    pub const EXTRA: &str = "extra";

    /// Entry time triple `[beat, numerator, denominator]`
    pub const BEAT: &str = "beat";

    pub const MODE_PATH: &str = "meta.mode";
    pub const MODE_EXT_PATH: &str = "meta.mode_ext";
}

/// Fields that together mark an object entry as a command rather than a note.
pub mod command {
    pub const SOUND: &str = "sound";
    pub const OFFSET: &str = "offset";
}

/// Keys of the normalized metadata bag consumed by chart construction.
pub mod meta {
    pub const VERSION: &str = "version";
    pub const PREVIEW: &str = "preview";
    pub const SET_ID: &str = "set_id";
    pub const CHART_ID: &str = "chart_id";
    pub const TIME: &str = "time";

    pub const CREATOR: &str = "creator";
    pub const BACKGROUND: &str = "bg";
    pub const NAME: &str = "name";

    pub const SONG: &str = "song";
    pub const SONG_ARTIST: &str = "artist";
    pub const SONG_TITLE: &str = "title";
    pub const SONG_ARTIST_UNICODE: &str = "artist_unicode";
    pub const SONG_TITLE_UNICODE: &str = "title_unicode";

    /// Required integer-typed keys, in reporting order.
    pub const INTEGER_KEYS: [&str; 5] = [VERSION, PREVIEW, SET_ID, CHART_ID, TIME];

    /// Required text-typed keys, in reporting order.
    pub const TEXT_KEYS: [&str; 3] = [CREATOR, BACKGROUND, NAME];
}

/// Wire path → chart argument path, both dot-delimited.
///
/// Read forward on import and backward when rebuilding the wire document.
pub const META_FIELD_MAP: &[(&str, &str)] = &[
    ("meta.$ver", "version"),
    ("meta.creator", "creator"),
    ("meta.background", "bg"),
    ("meta.version", "name"),
    ("meta.preview", "preview"),
    ("meta.id", "chart_id"),
    ("meta.time", "time"),
    ("meta.song.id", "set_id"),
    ("meta.song.artist", "song.artist"),
    ("meta.song.title", "song.title"),
    ("meta.song.artist_unicode", "song.artist_unicode"),
    ("meta.song.title_unicode", "song.title_unicode"),
];

/// Older wire spellings, read only when `META_FIELD_MAP` left the
/// destination absent or `null`. Never written back.
pub const META_FALLBACK_MAP: &[(&str, &str)] = &[
    ("meta.song.artistorg", "song.artist_unicode"),
    ("meta.song.titleorg", "song.title_unicode"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_map_covers_required_keys() {
        for key in meta::INTEGER_KEYS.iter().chain(meta::TEXT_KEYS.iter()) {
            assert!(
                META_FIELD_MAP.iter().any(|(_, dest)| dest == key),
                "{key} has no wire source"
            );
        }
    }

    #[test]
    fn test_field_map_destinations_are_unique() {
        let mut dests: Vec<&str> = META_FIELD_MAP.iter().map(|(_, d)| *d).collect();
        dests.sort_unstable();
        dests.dedup();
        assert_eq!(dests.len(), META_FIELD_MAP.len());
    }

    #[test]
    fn test_fallbacks_target_mapped_keys() {
        for (_, dest) in META_FALLBACK_MAP {
            assert!(META_FIELD_MAP.iter().any(|(_, d)| d == dest));
        }
    }
}
