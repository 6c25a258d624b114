//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use azscrape_dataset::CoverPolicy;
use azscrape_extractor::ExtractorConfig;
use clap::{Parser, ValueEnum};

/// Build a song dataset from lyrics-site artist pages.
#[derive(Debug, Parser)]
#[command(name = "azscrape", version, about)]
pub struct Args {
    /// Artist page URLs, scraped in order.
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// File with more artist page URLs, one per line.
    #[arg(long, value_name = "PATH")]
    pub urls_file: Option<PathBuf>,

    /// CSV dataset to append to.
    #[arg(
        short,
        long,
        env = "AZSCRAPE_OUTPUT",
        default_value = "output_dataset.csv"
    )]
    pub output: PathBuf,

    /// Which cover image each row carries.
    #[arg(long, env = "AZSCRAPE_COVER_POLICY", value_enum, default_value_t = CoverPolicyArg::FirstImage)]
    pub cover_policy: CoverPolicyArg,

    /// User agent for page requests.
    #[arg(long, env = "AZSCRAPE_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "AZSCRAPE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Also print each extracted record as JSON.
    #[arg(long)]
    pub print: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CoverPolicyArg {
    /// Every row gets the first cover image on the page.
    FirstImage,
    /// Every row gets the cover image under its own album heading.
    ByAlbum,
}

impl From<CoverPolicyArg> for CoverPolicy {
    fn from(arg: CoverPolicyArg) -> Self {
        match arg {
            CoverPolicyArg::FirstImage => Self::FirstImage,
            CoverPolicyArg::ByAlbum => Self::ByAlbum,
        }
    }
}

impl Args {
    pub fn extractor_config(&self) -> ExtractorConfig {
        let mut config = ExtractorConfig::default();
        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent.as_str());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }

    /// Positional URLs followed by those in `--urls-file`.
    pub fn collect_urls(&self) -> Result<Vec<String>> {
        let mut urls = self.urls.clone();

        if let Some(path) = &self.urls_file {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            urls.extend(parse_url_list(&contents));
        }

        if urls.is_empty() {
            bail!("No artist URLs given");
        }

        Ok(urls)
    }
}

/// One URL per line; blank lines and `#` comments are ignored.
fn parse_url_list(contents: &str) -> impl Iterator<Item = String> + '_ {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
}
