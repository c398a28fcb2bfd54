//! Configuration module for sitescrape
//!
//! A crawl is configured once at startup from the command line; there is no
//! config file. The seed URL determines the target domain, and everything
//! else has sensible defaults.

mod types;
mod validation;

// Re-export types
pub use types::{CrawlConfig, DEFAULT_CRAWL_LIMIT, DEFAULT_EXCLUDE_PATTERNS};

// Re-export validation functions
pub use validation::{domain_from_seed, validate_seed_url};
