//! Seed URL validation
//!
//! The seed URL is the only user input that can make a crawl meaningless, so
//! it is validated before any work starts. A URL that does not parse or has
//! no resolvable host is rejected up front.

use crate::ConfigError;
use url::Url;

/// Validates the seed URL and returns its parsed form
///
/// # Errors
///
/// * `ConfigError::InvalidUrl` - the string does not parse as a URL
/// * `ConfigError::MissingHost` - the URL has no host component
pub fn validate_seed_url(seed: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(seed).map_err(|source| ConfigError::InvalidUrl {
        url: seed.to_string(),
        source,
    })?;

    if url.host_str().is_none() {
        return Err(ConfigError::MissingHost(seed.to_string()));
    }

    Ok(url)
}

/// Derives the target domain from a validated seed URL
///
/// The domain is the seed's host with any leading `www.` stripped, so that
/// links to both `www.example.com` and `example.com` stay in scope under the
/// substring host match.
pub fn domain_from_seed(seed: &Url) -> Result<String, ConfigError> {
    let host = seed
        .host_str()
        .ok_or_else(|| ConfigError::MissingHost(seed.to_string()))?;

    let domain = host.strip_prefix("www.").unwrap_or(host);
    Ok(domain.to_string())
}
