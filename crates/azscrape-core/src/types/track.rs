//! Track entries and the per-album track listing.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single song listed on an artist page.
#[derive(Debug, Clone, serde::Serialize, PartialEq, Eq)]
pub struct TrackEntry {
    /// Song title as shown in the track link.
    pub song_name: String,
    /// Absolute link to the song's lyrics page.
    pub song_link: String,
}

impl TrackEntry {
    pub fn new(song_name: impl Into<String>, song_link: impl Into<String>) -> Self {
        Self {
            song_name: song_name.into(),
            song_link: song_link.into(),
        }
    }
}

/// All tracks owned by one album heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumTracks {
    /// Album heading text, e.g. `album: "Title" (2020)`.
    pub album: String,
    /// Tracks in page order.
    pub tracks: Vec<TrackEntry>,
}

/// Mapping from album heading to its tracks.
///
/// Albums keep the order in which their first track was seen, so iteration
/// (and therefore CSV row order) follows the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackListing(Vec<AlbumTracks>);

impl TrackListing {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a track to `album`, creating the album entry if absent.
    pub fn push(&mut self, album: &str, track: TrackEntry) {
        if let Some(entry) = self.0.iter_mut().find(|e| e.album == album) {
            entry.tracks.push(track);
        } else {
            self.0.push(AlbumTracks {
                album: album.to_string(),
                tracks: vec![track],
            });
        }
    }

    /// Tracks for a given album heading.
    pub fn get(&self, album: &str) -> Option<&[TrackEntry]> {
        self.0
            .iter()
            .find(|e| e.album == album)
            .map(|e| e.tracks.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlbumTracks> {
        self.0.iter()
    }

    /// Number of albums that own at least one track.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total tracks across every album.
    pub fn track_count(&self) -> usize {
        self.0.iter().map(|e| e.tracks.len()).sum()
    }
}

impl<'a> IntoIterator for &'a TrackListing {
    type Item = &'a AlbumTracks;
    type IntoIter = std::slice::Iter<'a, AlbumTracks>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for TrackListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.album, &entry.tracks)?;
        }
        map.end()
    }
}
