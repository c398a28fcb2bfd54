//! Crawl engine - round-based breadth-first traversal
//!
//! The engine owns all mutable crawl state (visited set, page counter) so
//! several independent crawls can run in one process. Each round walks the
//! current frontier sequentially, then rebuilds the frontier from the links
//! discovered in that round. State is persisted aggressively:
//! - visited.json is rewritten before every fetch, so a crash-and-restart
//!   cannot reprocess a page whose fetch blew up mid-flight (the trade-off
//!   is that such a page is never retried - a deliberate policy)
//! - queue.json is rewritten at the end of every round

use crate::config::CrawlConfig;
use crate::crawler::extractor::extract_links;
use crate::crawler::fetcher::PageFetcher;
use crate::storage::{ArtifactPaths, StateStore};
use crate::{CrawlError, Result};
use std::collections::HashSet;
use url::Url;

/// Drives a single domain-scoped crawl
pub struct CrawlEngine {
    config: CrawlConfig,
    store: StateStore,
    paths: ArtifactPaths,
    fetcher: PageFetcher,
    visited: HashSet<String>,
    crawled: usize,
}

impl CrawlEngine {
    /// Creates an engine for the given configuration
    pub fn new(config: CrawlConfig) -> Result<Self> {
        let store = StateStore::new(&config.output_dir);
        let paths = ArtifactPaths::new(&config.output_dir);
        let fetcher = PageFetcher::new()?;

        Ok(Self {
            config,
            store,
            paths,
            fetcher,
            visited: HashSet::new(),
            crawled: 0,
        })
    }

    /// Number of pages processed so far in this run
    pub fn pages_crawled(&self) -> usize {
        self.crawled
    }

    /// Runs the crawl until the frontier is empty or the page ceiling trips
    ///
    /// Resumes from persisted state when it exists; otherwise the frontier
    /// is seeded with `seed` alone.
    ///
    /// # Errors
    ///
    /// `CrawlError::LimitExceeded` when the page ceiling trips; storage
    /// errors when state files cannot be read or written. Per-URL fetch and
    /// extraction failures are logged and never abort the run.
    pub async fn crawl(&mut self, seed: &Url) -> Result<()> {
        self.visited = self.store.load_visited()?;

        let mut frontier = self.store.load_queue()?;
        if frontier.is_empty() {
            let mut seed = seed.clone();
            seed.set_fragment(None);
            tracing::info!("Seeding frontier with {}", seed);
            frontier = vec![seed.to_string()];
        } else {
            tracing::info!("Resuming with {} URLs in frontier", frontier.len());
        }

        let mut round = 0usize;
        while !frontier.is_empty() {
            round += 1;
            tracing::info!("Round {}: {} URLs in frontier", round, frontier.len());

            let mut discovered: HashSet<String> = HashSet::new();

            for url_str in &frontier {
                if !self.should_process(url_str) {
                    continue;
                }

                // Mark visited and persist before the fetch, so repeated
                // crashes cannot loop on the same page.
                self.visited.insert(url_str.clone());
                self.store.save_visited(&self.visited)?;

                match self.process_url(url_str).await {
                    Ok(links) => discovered.extend(links),
                    Err(e) => {
                        tracing::warn!("Error processing {}: {}", url_str, e);
                    }
                }

                self.crawled += 1;
                if self.crawled > self.config.crawl_limit {
                    tracing::error!(
                        "Crawl limit of {} pages exceeded, aborting",
                        self.config.crawl_limit
                    );
                    return Err(CrawlError::LimitExceeded {
                        limit: self.config.crawl_limit,
                    });
                }
            }

            frontier = self.build_next_frontier(discovered);
            self.store.save_queue(&frontier)?;
        }

        tracing::info!(
            "Crawl complete: {} pages processed this run",
            self.crawled
        );
        Ok(())
    }

    /// Applies the per-URL skip rules: visited, domain, exclusions, artifact
    fn should_process(&self, url_str: &str) -> bool {
        if self.visited.contains(url_str) {
            tracing::debug!("Skipping visited URL: {}", url_str);
            return false;
        }

        let url = match Url::parse(url_str) {
            Ok(u) => u,
            Err(e) => {
                tracing::debug!("Skipping unparseable URL {}: {}", url_str, e);
                return false;
            }
        };

        let in_domain = url
            .host_str()
            .map(|host| self.config.host_in_domain(host))
            .unwrap_or(false);
        if !in_domain {
            tracing::debug!("Skipping out-of-domain URL: {}", url_str);
            return false;
        }

        if self.config.is_excluded(url_str) {
            tracing::debug!("Skipping excluded URL: {}", url_str);
            return false;
        }

        if self.paths.artifact_exists(&url) {
            tracing::debug!("Skipping already-scraped URL: {}", url_str);
            return false;
        }

        true
    }

    /// Fetches one page, writes its artifact, and returns discovered links
    async fn process_url(&self, url_str: &str) -> Result<HashSet<String>> {
        let url = Url::parse(url_str)?;

        let outcome = self.fetcher.fetch(&url).await?;
        if !outcome.success {
            tracing::warn!("Fetch failed for {}: {}", url_str, outcome.error_message);
            return Ok(HashSet::new());
        }

        let artifact = self.paths.write_artifact(&url, &outcome.markdown)?;
        tracing::debug!("Saved {} to {}", url_str, artifact.display());

        let links = extract_links(&outcome.markdown, &url, &self.config.domain);
        tracing::debug!("Extracted {} same-domain links from {}", links.len(), url_str);
        Ok(links)
    }

    /// Builds the next frontier: discovered minus visited, exclusion-filtered
    ///
    /// Sorted for a stable queue.json across runs.
    fn build_next_frontier(&self, discovered: HashSet<String>) -> Vec<String> {
        let mut next: Vec<String> = discovered
            .into_iter()
            .filter(|url| !self.visited.contains(url))
            .filter(|url| !self.config.is_excluded(url))
            .collect();
        next.sort();
        next
    }
}

/// Runs a complete crawl with the given configuration and seed URL
///
/// Convenience wrapper over [`CrawlEngine`] for one-shot use.
pub async fn crawl(config: CrawlConfig, seed: &Url) -> Result<()> {
    let mut engine = CrawlEngine::new(config)?;
    engine.crawl(seed).await
}
