//! Core domain types for azscrape.

pub mod artist;
pub mod track;

pub use artist::ArtistRecord;
pub use track::{AlbumTracks, TrackEntry, TrackListing};
