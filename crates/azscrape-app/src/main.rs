//! # azscrape
//!
//! Scrapes album and track listings from lyrics-site artist pages and appends
//! them to a cumulative CSV dataset.

mod cli;
mod pipeline;

use anyhow::{Context, Result};
use azscrape_extractor::Extractor;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Args;
use pipeline::RunOptions;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "azscrape=info,azscrape_extractor=info,azscrape_dataset=info".into()
            }),
        )
        .init();

    let args = Args::parse();

    info!("Starting azscrape v{}", env!("CARGO_PKG_VERSION"));

    let urls = args.collect_urls()?;
    let extractor =
        Extractor::with_config(args.extractor_config()).context("Failed to set up page fetching")?;

    let options = RunOptions {
        output: args.output.clone(),
        policy: args.cover_policy.into(),
        print: args.print,
    };

    let summary = pipeline::run(&extractor, &urls, &options)
        .await
        .with_context(|| format!("Failed writing dataset {}", options.output.display()))?;

    info!(
        "Done: {} artists written, {} skipped, {} rows appended to {}",
        summary.written,
        summary.skipped,
        summary.rows,
        options.output.display()
    );

    Ok(())
}
