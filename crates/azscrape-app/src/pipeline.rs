//! Sequential extract-then-append pipeline over a batch of artist pages.

use std::path::PathBuf;

use azscrape_core::{Error, Result};
use azscrape_dataset::{append, CoverPolicy};
use azscrape_extractor::{Extractor, PageSource};
use tracing::{error, warn};

/// Where and how records are written.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub output: PathBuf,
    pub policy: CoverPolicy,
    pub print: bool,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Artists whose rows were appended.
    pub written: usize,
    /// Artists skipped because nothing could be extracted.
    pub skipped: usize,
    /// Data rows appended across all artists.
    pub rows: usize,
}

/// Scrape every URL in order, appending each artist's rows to the dataset.
///
/// Artists that fail to fetch or parse are skipped. Write errors abort the run.
pub async fn run<S: PageSource>(
    extractor: &Extractor<S>,
    urls: &[String],
    options: &RunOptions,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for url in urls {
        match scrape_artist(extractor, url, options).await? {
            Some(rows) => {
                summary.written += 1;
                summary.rows += rows;
            }
            None => summary.skipped += 1,
        }
    }

    Ok(summary)
}

/// Extract one artist and append it. `Ok(None)` means the artist was skipped.
async fn scrape_artist<S: PageSource>(
    extractor: &Extractor<S>,
    url: &str,
    options: &RunOptions,
) -> Result<Option<usize>> {
    let record = match extractor.extract(url).await {
        Ok(record) => record,
        Err(e) if e.is_skippable() => {
            warn!("Skipping {}: {}", url, e);
            return Ok(None);
        }
        Err(e) if e.is_extraction() || matches!(e, Error::Network(_)) => {
            error!("Skipping {}: {}", url, e);
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    if options.print {
        println!("{}", serde_json::to_string_pretty(&record)?);
    }

    for album in record.albums_without_tracks() {
        warn!("{} has no tracks and is left out of the dataset", album);
    }

    append(&record, &options.output, options.policy).map(Some)
}
