use std::path::{Path, PathBuf};

/// Default safety ceiling on the number of pages crawled in one run.
///
/// A guard against unbounded or looping crawls; the crawl aborts once it
/// trips.
pub const DEFAULT_CRAWL_LIMIT: usize = 50_000;

/// Default exclusion patterns, matched as substrings of the full URL.
///
/// Covers low-value asset files by extension and common shop/listing path
/// keywords that multiply URLs without adding content.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    ".pdf", ".jpg", ".jpeg", ".png", ".gif", ".svg", ".ico", ".css", ".js", ".zip", ".mp3",
    ".mp4", ".webp", ".woff", "category", "checkout", "cart",
];

/// Immutable configuration for one crawl, fixed at crawl start
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Target domain; a candidate URL is in scope when its host contains
    /// this string
    pub domain: String,

    /// Root output directory; state and artifacts live under
    /// `<output_dir>/scraped/`
    pub output_dir: PathBuf,

    /// Maximum total pages before the run aborts
    pub crawl_limit: usize,

    /// Substring patterns that exclude a URL from crawling
    pub exclude_patterns: Vec<String>,
}

impl CrawlConfig {
    /// Creates a configuration with the default limit and exclusions
    pub fn new(domain: impl Into<String>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            domain: domain.into(),
            output_dir: output_dir.as_ref().to_path_buf(),
            crawl_limit: DEFAULT_CRAWL_LIMIT,
            exclude_patterns: DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    /// Sets the crawl limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.crawl_limit = limit;
        self
    }

    /// Replaces the default exclusion patterns with custom ones
    ///
    /// An empty slice leaves the defaults in place.
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        if !patterns.is_empty() {
            self.exclude_patterns = patterns;
        }
        self
    }

    /// Returns true if the URL matches any exclusion pattern
    pub fn is_excluded(&self, url: &str) -> bool {
        self.exclude_patterns.iter().any(|p| url.contains(p))
    }

    /// Returns true if the host belongs to the target domain
    pub fn host_in_domain(&self, host: &str) -> bool {
        host.contains(&self.domain)
    }
}
