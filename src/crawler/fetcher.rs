//! Page fetching and markdown conversion
//!
//! Wraps one HTTP GET plus HTML-to-markdown conversion behind an explicit
//! outcome type. Failures the engine reports itself (bad status, wrong
//! content type) come back as `success = false` rather than errors; transport
//! failures (connect, timeout) propagate as `Err`. Callers must expect both.

use crate::{CrawlError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Result of fetching one page
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Whether the page was fetched and converted
    pub success: bool,

    /// Cleaned page content as markdown (empty on failure)
    pub markdown: String,

    /// Human-readable failure description (empty on success)
    pub error_message: String,
}

impl FetchOutcome {
    fn ok(markdown: String) -> Self {
        Self {
            success: true,
            markdown,
            error_message: String::new(),
        }
    }

    fn failed(error_message: String) -> Self {
        Self {
            success: false,
            markdown: String::new(),
            error_message,
        }
    }
}

/// Fetches pages and converts them to markdown
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Builds a fetcher with timeouts and compression enabled
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("sitescrape/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    /// Fetches a URL and converts the HTML body to markdown
    ///
    /// # Errors
    ///
    /// Transport-level failures (connection refused, timeout, body read
    /// errors) are returned as `Err`; the engine catches them per URL.
    pub async fn fetch(&self, url: &Url) -> Result<FetchOutcome> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| CrawlError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Ok(FetchOutcome::failed(format!("HTTP {}", status.as_u16())));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        // Only HTML is worth converting; anything else is reported as a
        // non-fatal failure so the engine logs and moves on.
        if !content_type.is_empty() && !content_type.contains("text/html") {
            return Ok(FetchOutcome::failed(format!(
                "unsupported content type: {}",
                content_type
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|source| CrawlError::Http {
                url: url.to_string(),
                source,
            })?;

        let markdown = html2md::parse_html(&body);
        Ok(FetchOutcome::ok(markdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_fetcher() {
        assert!(PageFetcher::new().is_ok());
    }

    #[tokio::test]
    async fn test_fetch_converts_html_to_markdown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(
                    "<html><body><h1>Title</h1><a href=\"/a\">A</a></body></html>",
                    "text/html",
                ),
            )
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new().unwrap();
        let url = Url::parse(&format!("{}/page", server.uri())).unwrap();
        let outcome = fetcher.fetch(&url).await.unwrap();

        assert!(outcome.success);
        assert!(outcome.markdown.contains("Title"));
        assert!(outcome.markdown.contains("(/a)"));
    }

    #[tokio::test]
    async fn test_fetch_http_error_is_failure_not_err() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new().unwrap();
        let url = Url::parse(&format!("{}/missing", server.uri())).unwrap();
        let outcome = fetcher.fetch(&url).await.unwrap();

        assert!(!outcome.success);
        assert!(outcome.error_message.contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_non_html_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data.bin"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(vec![0u8; 4])
                    .insert_header("content-type", "application/octet-stream"),
            )
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new().unwrap();
        let url = Url::parse(&format!("{}/data.bin", server.uri())).unwrap();
        let outcome = fetcher.fetch(&url).await.unwrap();

        assert!(!outcome.success);
        assert!(outcome.error_message.contains("content type"));
    }

    #[tokio::test]
    async fn test_fetch_connection_error_propagates() {
        // Port 1 is never listening
        let fetcher = PageFetcher::new().unwrap();
        let url = Url::parse("http://127.0.0.1:1/").unwrap();
        assert!(fetcher.fetch(&url).await.is_err());
    }
}
