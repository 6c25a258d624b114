//! # azscrape-core
//!
//! Core types and error handling for the azscrape artist-page scraper.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
