//! URL to artifact path mapping
//!
//! Maps each crawled URL to a flat markdown file under the content directory.
//! The mapping is pure and deterministic: host plus path, with path
//! separators flattened to `__`. It is collision-tolerant rather than
//! collision-proof; two URLs that flatten to the same name overwrite each
//! other, which is acceptable for a single small-to-medium domain.

use std::path::{Path, PathBuf};
use url::Url;

/// Resolves URLs to on-disk artifact paths under a content directory
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    content_dir: PathBuf,
}

impl ArtifactPaths {
    /// Creates a path mapper rooted at `<output_dir>/scraped/content/`
    pub fn new(output_dir: &Path) -> Self {
        Self {
            content_dir: output_dir.join("scraped").join("content"),
        }
    }

    /// Returns the content directory root
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Maps a URL to its artifact path
    ///
    /// The URL's host and path are joined, `/` becomes `__`, leading and
    /// trailing `__` are stripped, and `.md` is appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitescrape::storage::ArtifactPaths;
    /// use std::path::Path;
    /// use url::Url;
    ///
    /// let paths = ArtifactPaths::new(Path::new("/data"));
    /// let url = Url::parse("https://example.com/docs/intro").unwrap();
    /// assert_eq!(
    ///     paths.url_to_path(&url),
    ///     Path::new("/data/scraped/content/example.com__docs__intro.md")
    /// );
    /// ```
    pub fn url_to_path(&self, url: &Url) -> PathBuf {
        let host = url.host_str().unwrap_or("unknown");
        let flattened = format!("{}{}", host, url.path()).replace('/', "__");
        let trimmed = trim_separators(&flattened);
        self.content_dir.join(format!("{}.md", trimmed))
    }

    /// Returns true if the artifact for this URL already exists on disk
    ///
    /// Used by the crawl engine as an idempotence gate independent of the
    /// visited set, so a crawl resumed after losing a visited.json write
    /// still skips pages whose content was saved.
    pub fn artifact_exists(&self, url: &Url) -> bool {
        self.url_to_path(url).exists()
    }

    /// Writes the markdown artifact for a URL, creating directories as needed
    pub fn write_artifact(&self, url: &Url, markdown: &str) -> std::io::Result<PathBuf> {
        let path = self.url_to_path(url);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, markdown)?;
        Ok(path)
    }
}

/// Strips leading and trailing `__` runs left by root or trailing slashes
fn trim_separators(name: &str) -> &str {
    let mut trimmed = name;
    while let Some(rest) = trimmed.strip_prefix("__") {
        trimmed = rest;
    }
    while let Some(rest) = trimmed.strip_suffix("__") {
        trimmed = rest;
    }
    trimmed
}
