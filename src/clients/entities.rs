use std::fmt;

use serde::Serialize;

/// A single track match as returned by the Last.fm track search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    /// Track title as spelled by Last.fm
    pub name: String,
    /// Performing artist, one name only
    pub artist: String,
    /// Canonical page of the track on last.fm
    pub url: String,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' by '{}' ({})", self.name, self.artist, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_track_and_artist() {
        let track = Track {
            name: "Yesterday".into(),
            artist: "The Beatles".into(),
            url: "https://example.com/yesterday".into(),
        };
        assert_eq!(
            track.to_string(),
            "'Yesterday' by 'The Beatles' (https://example.com/yesterday)"
        );
    }
}
