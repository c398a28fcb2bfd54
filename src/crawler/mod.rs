//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The round-based breadth-first crawl engine
//! - HTTP fetching with markdown conversion
//! - Same-domain link extraction

mod engine;
mod extractor;
mod fetcher;

pub use engine::{crawl, CrawlEngine};
pub use extractor::extract_links;
pub use fetcher::{FetchOutcome, PageFetcher};
