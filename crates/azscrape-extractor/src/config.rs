//! Extractor configuration.

use std::time::Duration;

/// Origin prepended to relative cover image paths.
pub const DEFAULT_SITE_ORIGIN: &str = "https://www.azlyrics.com";

/// Browser-like user agent; the site rejects obviously scripted clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/135.0.0.0 Safari/537.36";

/// Default timeout for page requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for fetching and parsing artist pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Fixed site origin used to absolutize cover image paths.
    pub site_origin: String,
    /// User agent sent with every request.
    pub user_agent: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ExtractorConfig {
    pub fn with_site_origin(mut self, origin: impl Into<String>) -> Self {
        self.site_origin = origin.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert_eq!(config.site_origin, "https://www.azlyrics.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_overrides() {
        let config = ExtractorConfig::default()
            .with_user_agent("azscrape-test")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.user_agent, "azscrape-test");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.site_origin, DEFAULT_SITE_ORIGIN);
    }
}
