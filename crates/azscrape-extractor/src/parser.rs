//! HTML parser for artist pages.
//!
//! The page is walked once in document order. A cursor remembers the most
//! recent album heading, and every cover image and track block is assigned to
//! whatever the cursor holds when it is reached.

use std::collections::BTreeMap;

use azscrape_core::{ArtistRecord, Error, Result, TrackEntry, TrackListing};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Label the site appends to every artist heading.
const ARTIST_SUFFIX: &str = " Lyrics";

/// Selectors for the page elements we care about.
struct PageSelectors {
    heading: Selector,
    album: Selector,
    cover: Selector,
    track: Selector,
    link: Selector,
}

impl PageSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            heading: selector("h1")?,
            album: selector("div.album")?,
            cover: selector("img.album-image")?,
            track: selector("div.listalbum-item")?,
            link: selector("a")?,
        })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Internal(format!("invalid selector {css:?}: {e}")))
}

/// Parse an artist page into an [`ArtistRecord`].
///
/// `page_url` is prepended to each song's relative href; `site_origin` is
/// prepended to each cover image's relative src.
pub fn parse_artist_page(html: &str, page_url: &str, site_origin: &str) -> Result<ArtistRecord> {
    let document = Html::parse_document(html);
    let selectors = PageSelectors::new()?;

    let mut artist_name = None;
    let mut albums = Vec::new();
    let mut cover_images = Vec::new();
    let mut cover_by_album = BTreeMap::new();
    let mut tracks_by_album = TrackListing::new();
    let mut current_album: Option<String> = None;

    for element in document.tree.root().descendants().filter_map(ElementRef::wrap) {
        if selectors.heading.matches(&element) {
            // Only the first heading names the artist
            if artist_name.is_none() {
                artist_name = Some(parse_artist_name(&element));
            }
        } else if selectors.album.matches(&element) {
            let heading = element_text(&element);
            debug!("Album block: {}", heading);
            albums.push(heading.clone());
            current_album = Some(heading);
        } else if selectors.cover.matches(&element) {
            let src = element.value().attr("src").ok_or(Error::Extraction {
                missing_field: "cover_image_src",
            })?;
            let cover = format!("{site_origin}{src}");
            if let Some(album) = &current_album {
                cover_by_album
                    .entry(album.clone())
                    .or_insert_with(|| cover.clone());
            }
            cover_images.push(cover);
        } else if selectors.track.matches(&element) {
            let album = current_album.as_deref().ok_or(Error::Extraction {
                missing_field: "album",
            })?;
            let track = parse_track(&element, &selectors.link, page_url)?;
            tracks_by_album.push(album, track);
        }
    }

    let artist_name = artist_name.ok_or(Error::Extraction {
        missing_field: "artist_name",
    })?;

    Ok(ArtistRecord {
        artist_name,
        albums,
        cover_images,
        cover_by_album,
        tracks_by_album,
    })
}

fn parse_artist_name(heading: &ElementRef<'_>) -> String {
    let text = element_text(heading);
    text.strip_suffix(ARTIST_SUFFIX)
        .map_or(text.as_str(), str::trim_end)
        .to_string()
}

fn parse_track(block: &ElementRef<'_>, link: &Selector, page_url: &str) -> Result<TrackEntry> {
    let anchor = block.select(link).next().ok_or(Error::Extraction {
        missing_field: "song_name",
    })?;
    let href = anchor.value().attr("href").ok_or(Error::Extraction {
        missing_field: "song_link",
    })?;

    Ok(TrackEntry::new(
        element_text(&anchor),
        format!("{page_url}{href}"),
    ))
}

/// All descendant text of an element, trimmed.
fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
