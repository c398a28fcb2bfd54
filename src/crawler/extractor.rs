//! Link extraction from markdown page content
//!
//! Pages are stored as markdown, so links are found in two shapes: markdown
//! link targets `[text](target)` and bare `https://` URLs left in the text.
//! Each candidate is resolved against the page's own URL, filtered to the
//! target domain, and stripped of its fragment, since fragments name in-page
//! anchors rather than distinct resources.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use url::Url;

/// Matches markdown link targets: the parenthesized part of `[text](target)`
static MARKDOWN_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]*\]\(([^()\s]+)\)").expect("valid markdown link pattern"));

/// Matches bare absolute URLs in running text
static BARE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"https?://[^\s<>"')\]]+"#).expect("valid bare URL pattern"));

/// Extracts same-domain links from page content
///
/// Returns a set of absolute URL strings: order is irrelevant and duplicates
/// (including fragment-only variants of the same page) collapse. Candidates
/// that fail to resolve against `base_url` are silently dropped.
pub fn extract_links(content: &str, base_url: &Url, domain: &str) -> HashSet<String> {
    let mut links = HashSet::new();

    let markdown_targets = MARKDOWN_LINK
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str());

    let bare_urls = BARE_URL.find_iter(content).map(|m| m.as_str());

    for candidate in markdown_targets.chain(bare_urls) {
        if let Some(resolved) = resolve_candidate(candidate, base_url, domain) {
            links.insert(resolved);
        }
    }

    links
}

/// Resolves one candidate against the base URL and applies the domain filter
fn resolve_candidate(candidate: &str, base_url: &Url, domain: &str) -> Option<String> {
    let candidate = candidate.trim();
    if candidate.is_empty() || candidate.starts_with('#') {
        return None;
    }

    // Skip non-navigational schemes before joining
    if candidate.starts_with("mailto:")
        || candidate.starts_with("javascript:")
        || candidate.starts_with("tel:")
        || candidate.starts_with("data:")
    {
        return None;
    }

    let mut resolved = base_url.join(candidate).ok()?;

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    // Domain containment check on the host
    let host = resolved.host_str()?;
    if !host.contains(domain) {
        return None;
    }

    resolved.set_fragment(None);
    Some(resolved.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    #[test]
    fn test_markdown_link_extracted() {
        let links = extract_links("See [docs](https://example.com/docs)", &base(), "example.com");
        assert_eq!(links.len(), 1);
        assert!(links.contains("https://example.com/docs"));
    }

    #[test]
    fn test_relative_markdown_link_resolved() {
        let links = extract_links("See [about](/about)", &base(), "example.com");
        assert!(links.contains("https://example.com/about"));
    }

    #[test]
    fn test_bare_url_extracted() {
        let links = extract_links(
            "Visit https://example.com/bare for more",
            &base(),
            "example.com",
        );
        assert!(links.contains("https://example.com/bare"));
    }

    #[test]
    fn test_cross_domain_filtered() {
        let links = extract_links(
            "[other](https://other.com/b) and https://elsewhere.net/c",
            &base(),
            "example.com",
        );
        assert!(links.is_empty());
    }

    #[test]
    fn test_fragment_stripped() {
        let links = extract_links(
            "[x](https://example.com/a#section)",
            &base(),
            "example.com",
        );
        assert_eq!(links.len(), 1);
        assert!(links.contains("https://example.com/a"));
    }

    #[test]
    fn test_fragment_variants_collapse() {
        let links = extract_links(
            "[a](https://example.com/a) [a2](https://example.com/a#frag)",
            &base(),
            "example.com",
        );
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_fragment_only_link_skipped() {
        let links = extract_links("[jump](#section)", &base(), "example.com");
        assert!(links.is_empty());
    }

    #[test]
    fn test_mailto_skipped() {
        let links = extract_links("[mail](mailto:a@example.com)", &base(), "example.com");
        assert!(links.is_empty());
    }

    #[test]
    fn test_subdomain_contains_domain() {
        let links = extract_links(
            "[blog](https://blog.example.com/post)",
            &base(),
            "example.com",
        );
        assert!(links.contains("https://blog.example.com/post"));
    }

    #[test]
    fn test_stateless_across_calls() {
        let content = "[a](https://example.com/a)";
        let first = extract_links(content, &base(), "example.com");
        let second = extract_links(content, &base(), "example.com");
        assert_eq!(first, second);
    }

    // The scenario from the crawl contract: one same-domain link, one
    // cross-domain link, one fragment duplicate.
    #[test]
    fn test_mixed_content_scenario() {
        let content = r#"
            [a](https://example.com/a)
            [b](https://other.com/b)
            [a frag](https://example.com/a#frag)
        "#;
        let links = extract_links(content, &base(), "example.com");
        assert_eq!(links.len(), 1);
        assert!(links.contains("https://example.com/a"));
    }
}
