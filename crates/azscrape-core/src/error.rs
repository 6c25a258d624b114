//! Error types for azscrape.

use thiserror::Error;

/// Result type alias using azscrape's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for azscrape.
#[derive(Error, Debug)]
pub enum Error {
    // Fetch errors
    #[error("Failed to retrieve the page. Status code: {status_code}")]
    Fetch { status_code: u16 },

    #[error("Network error: {0}")]
    Network(String),

    // Page structure errors
    #[error("Artist page is missing expected element: {missing_field}")]
    Extraction { missing_field: &'static str },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns true if the artist should be skipped rather than aborting a batch.
    ///
    /// A failed fetch means there is nothing to append for that artist.
    pub const fn is_skippable(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::InvalidArgument(_))
    }

    /// Returns true if the error came from the page layout rather than transport.
    pub const fn is_extraction(&self) -> bool {
        matches!(self, Self::Extraction { .. })
    }
}
