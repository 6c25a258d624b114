//! # azscrape-extractor
//!
//! Fetches an artist page and extracts its albums, cover art and track
//! listing into an [`ArtistRecord`].

pub mod config;
pub mod parser;
pub mod source;

use azscrape_core::{ArtistRecord, Error, Result};
use tracing::{info, warn};

pub use config::ExtractorConfig;
pub use source::{HttpSource, Page, PageSource};

/// Artist page extractor.
pub struct Extractor<S = HttpSource> {
    source: S,
    config: ExtractorConfig,
}

impl Extractor<HttpSource> {
    /// Create an extractor that fetches over HTTP.
    pub fn with_config(config: ExtractorConfig) -> Result<Self> {
        let source = HttpSource::new(&config)?;
        Ok(Self { source, config })
    }
}

impl<S: PageSource> Extractor<S> {
    /// Create an extractor over a custom page source.
    pub const fn with_source(source: S, config: ExtractorConfig) -> Self {
        Self { source, config }
    }

    /// Fetch and parse one artist page.
    ///
    /// A non-2xx response yields [`Error::Fetch`] and no record; callers treat
    /// that as "nothing to append" for this artist.
    pub async fn extract(&self, url: &str) -> Result<ArtistRecord> {
        url::Url::parse(url).map_err(|e| Error::InvalidArgument(format!("{url}: {e}")))?;

        info!("Fetching artist page: {}", url);

        let page = self.source.fetch(url).await?;

        if !page.is_success() {
            warn!(
                "Failed to retrieve the page. Status code: {}",
                page.status
            );
            return Err(Error::Fetch {
                status_code: page.status,
            });
        }

        let record = parser::parse_artist_page(&page.body, url, &self.config.site_origin)?;

        info!(
            "Extracted {} albums, {} cover images and {} tracks for {}",
            record.albums.len(),
            record.cover_images.len(),
            record.track_count(),
            record.artist_name
        );

        Ok(record)
    }
}
