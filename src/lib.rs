//! Sitescrape: a domain-scoped incremental web crawler
//!
//! This crate implements a crawler that, starting from a seed URL, discovers
//! and fetches every page within a single domain, converts each page to
//! markdown, and persists its progress so an interrupted crawl can resume
//! where it left off.

pub mod config;
pub mod crawler;
pub mod storage;

use thiserror::Error;

/// Main error type for crawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("State file error: {0}")]
    State(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Crawl limit of {limit} pages exceeded")]
    LimitExceeded { limit: usize },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("URL has no resolvable host: {0}")]
    MissingHost(String),
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{crawl, CrawlEngine, FetchOutcome};
pub use storage::{ArtifactPaths, StateStore};
