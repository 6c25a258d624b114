//! # azscrape-dataset
//!
//! Flattens an [`ArtistRecord`] into one CSV row per track and appends the
//! rows to a cumulative dataset file.

use std::fs::OpenOptions;
use std::path::Path;

use azscrape_core::{ArtistRecord, Result};
use serde::Serialize;
use tracing::{debug, info};

/// Header row written when the dataset file is first created.
pub const HEADER: [&str; 5] = [
    "Artist Name",
    "Album Name (Year)",
    "Cover Image Link",
    "Song Name",
    "Link to Song",
];

/// How each row picks its cover image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverPolicy {
    /// Every row reuses the first cover image on the page.
    #[default]
    FirstImage,
    /// Each row uses the image found under its own album heading.
    ByAlbum,
}

impl CoverPolicy {
    fn cover<'a>(self, record: &'a ArtistRecord, album: &str) -> &'a str {
        match self {
            Self::FirstImage => record.first_cover(),
            Self::ByAlbum => record.cover_for(album),
        }
        .unwrap_or_default()
    }
}

/// One flattened dataset row.
#[derive(Debug, Serialize)]
struct DatasetRow<'a> {
    artist_name: &'a str,
    album: &'a str,
    cover_image: &'a str,
    song_name: &'a str,
    song_link: &'a str,
}

/// Append `record` to the CSV file at `path` and return the number of data rows written.
///
/// The header is written only if the file did not exist. Albums without
/// tracks produce no rows. Nothing is deduplicated: appending the same record
/// twice writes its rows twice.
pub fn append(record: &ArtistRecord, path: impl AsRef<Path>, policy: CoverPolicy) -> Result<usize> {
    let path = path.as_ref();
    let file_exists = path.is_file();

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if !file_exists {
        debug!("Creating dataset at {}", path.display());
        writer.write_record(HEADER)?;
    }

    let mut rows = 0;
    for entry in &record.tracks_by_album {
        let cover_image = policy.cover(record, &entry.album);
        for track in &entry.tracks {
            writer.serialize(DatasetRow {
                artist_name: &record.artist_name,
                album: &entry.album,
                cover_image,
                song_name: &track.song_name,
                song_link: &track.song_link,
            })?;
            rows += 1;
        }
    }

    // Dropping the writer also flushes, so early returns above keep what was written
    writer.flush()?;

    info!(
        "Appended {} rows for {} to {}",
        rows,
        record.artist_name,
        path.display()
    );

    Ok(rows)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use azscrape_core::TrackEntry;
    use tempfile::TempDir;

    fn sample_record() -> ArtistRecord {
        let mut record = ArtistRecord::new("Sam Smith");
        record.albums = vec!["Album A (2020)".into(), "Album B (2022)".into()];
        record.cover_images = vec![
            "https://www.azlyrics.com/img/a.jpg".into(),
            "https://www.azlyrics.com/img/b.jpg".into(),
        ];
        record.cover_by_album.insert(
            "Album A (2020)".into(),
            "https://www.azlyrics.com/img/a.jpg".into(),
        );
        record.cover_by_album.insert(
            "Album B (2022)".into(),
            "https://www.azlyrics.com/img/b.jpg".into(),
        );
        record
            .tracks_by_album
            .push("Album A (2020)", TrackEntry::new("Song1", "https://x/1"));
        record
            .tracks_by_album
            .push("Album A (2020)", TrackEntry::new("Song2", "https://x/2"));
        record
            .tracks_by_album
            .push("Album B (2022)", TrackEntry::new("Song3", "https://x/3"));
        record
    }

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_new_file_gets_header_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataset.csv");

        assert_eq!(append(&sample_record(), &path, CoverPolicy::FirstImage).unwrap(), 3);
        let rows = read_rows(&path);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], HEADER);

        append(&sample_record(), &path, CoverPolicy::FirstImage).unwrap();
        let rows = read_rows(&path);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows.iter().filter(|r| *r == &HEADER).count(), 1);
    }

    #[test]
    fn test_existing_file_gets_no_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataset.csv");
        std::fs::write(&path, "").unwrap();

        append(&sample_record(), &path, CoverPolicy::FirstImage).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "Sam Smith");
    }

    #[test]
    fn test_first_image_policy_reuses_first_cover() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataset.csv");

        append(&sample_record(), &path, CoverPolicy::FirstImage).unwrap();

        let rows = read_rows(&path);
        assert_eq!(
            rows[1],
            [
                "Sam Smith",
                "Album A (2020)",
                "https://www.azlyrics.com/img/a.jpg",
                "Song1",
                "https://x/1"
            ]
        );
        // Song3 belongs to Album B but still carries the first cover
        assert_eq!(rows[3][1], "Album B (2022)");
        assert_eq!(rows[3][2], "https://www.azlyrics.com/img/a.jpg");
        assert_eq!(rows[3][3], "Song3");
    }

    #[test]
    fn test_by_album_policy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataset.csv");

        append(&sample_record(), &path, CoverPolicy::ByAlbum).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows[1][2], "https://www.azlyrics.com/img/a.jpg");
        assert_eq!(rows[3][2], "https://www.azlyrics.com/img/b.jpg");
    }

    #[test]
    fn test_albums_without_tracks_are_dropped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataset.csv");
        let mut record = sample_record();
        record.albums.push("Empty EP (2023)".into());

        assert_eq!(append(&record, &path, CoverPolicy::FirstImage).unwrap(), 3);
        let rows = read_rows(&path);
        assert!(rows.iter().all(|r| r[1] != "Empty EP (2023)"));
    }

    #[test]
    fn test_missing_cover_leaves_empty_cell() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataset.csv");
        let mut record = ArtistRecord::new("Björk");
        record.albums = vec![r#"album: "Homogenic" (1997)"#.into()];
        record.tracks_by_album.push(
            r#"album: "Homogenic" (1997)"#,
            TrackEntry::new("Jóga, live", "https://x/joga"),
        );

        append(&record, &path, CoverPolicy::FirstImage).unwrap();

        let rows = read_rows(&path);
        assert_eq!(
            rows[1],
            [
                "Björk",
                r#"album: "Homogenic" (1997)"#,
                "",
                "Jóga, live",
                "https://x/joga"
            ]
        );
    }

    #[test]
    fn test_multiple_artists_share_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataset.csv");
        let mut other = ArtistRecord::new("Cardi B");
        other
            .tracks_by_album
            .push("Invasion of Privacy (2018)", TrackEntry::new("I Like It", "https://x/i"));

        append(&sample_record(), &path, CoverPolicy::FirstImage).unwrap();
        append(&other, &path, CoverPolicy::FirstImage).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4][0], "Cardi B");
    }
}
