//! The record extracted from one artist page.

use std::collections::BTreeMap;

use serde::Serialize;

use super::TrackListing;

/// Everything scraped from a single artist page.
///
/// Built fresh per extraction and consumed once by the dataset appender.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ArtistRecord {
    /// Artist name with the trailing `" Lyrics"` label removed.
    pub artist_name: String,
    /// Raw album heading texts in page order (title and year not split).
    pub albums: Vec<String>,
    /// Absolute cover image URLs in page order.
    ///
    /// Correlated with `albums` only by position.
    pub cover_images: Vec<String>,
    /// Cover image keyed by the nearest preceding album heading.
    pub cover_by_album: BTreeMap<String, String>,
    /// Tracks grouped under their owning album heading.
    pub tracks_by_album: TrackListing,
}

impl ArtistRecord {
    pub fn new(artist_name: impl Into<String>) -> Self {
        Self {
            artist_name: artist_name.into(),
            ..Self::default()
        }
    }

    /// The first cover image on the page, if any.
    pub fn first_cover(&self) -> Option<&str> {
        self.cover_images.first().map(String::as_str)
    }

    /// The cover image that appeared under `album`'s heading.
    pub fn cover_for(&self, album: &str) -> Option<&str> {
        self.cover_by_album.get(album).map(String::as_str)
    }

    /// Total tracks across all albums.
    pub fn track_count(&self) -> usize {
        self.tracks_by_album.track_count()
    }

    /// Album headings that own no tracks and so produce no dataset rows.
    pub fn albums_without_tracks(&self) -> impl Iterator<Item = &str> {
        self.albums
            .iter()
            .map(String::as_str)
            .filter(|album| self.tracks_by_album.get(album).is_none())
    }
}
