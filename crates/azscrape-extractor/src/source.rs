//! Page sources: where artist page markup comes from.

use std::future::Future;

use azscrape_core::{Error, Result};
use reqwest::Client;
use tracing::debug;

use crate::config::ExtractorConfig;

/// A fetched page: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can `GET` a URL and return its status and body.
pub trait PageSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Page>> + Send;
}

/// HTTP page source backed by reqwest.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<Page> {
        debug!("Requesting: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response body: {e}")))?;

        debug!("Fetched {} bytes with status {}", body.len(), status);
        Ok(Page { status, body })
    }
}
