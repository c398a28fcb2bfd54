//! Sitescrape main entry point
//!
//! Command-line interface for the domain-scoped incremental crawler.

use anyhow::Context;
use clap::Parser;
use sitescrape::config::{domain_from_seed, validate_seed_url, CrawlConfig};
use sitescrape::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Crawl every page of a single domain into markdown files
///
/// Starting from the seed URL, fetches each same-domain page, converts it to
/// markdown under `<output-dir>/scraped/content/`, and persists progress so
/// an interrupted crawl can be re-run and resume where it stopped.
#[derive(Parser, Debug)]
#[command(name = "crawl")]
#[command(version)]
#[command(about = "Crawl a single domain into markdown files", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(value_name = "WEBSITE_URL")]
    url: String,

    /// Directory to write state and page content under
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Maximum number of pages to crawl before aborting
    #[arg(long, default_value_t = sitescrape::config::DEFAULT_CRAWL_LIMIT)]
    limit: usize,

    /// Exclusion pattern matched against full URLs; repeatable.
    /// Replaces the default asset/keyword exclusions when given.
    #[arg(long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Reject a bad seed before any crawling starts
    let seed = match validate_seed_url(&cli.url) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("invalid seed URL: {}", e);
            std::process::exit(2);
        }
    };
    let domain = domain_from_seed(&seed).context("seed URL lost its host")?;

    tracing::info!("Crawling domain {} into {}", domain, cli.output_dir.display());

    let config = CrawlConfig::new(domain, &cli.output_dir)
        .with_limit(cli.limit)
        .with_exclude_patterns(cli.exclude);

    match crawl(config, &seed).await {
        Ok(()) => {
            tracing::info!("Crawl completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitescrape=info,warn"),
            1 => EnvFilter::new("sitescrape=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
