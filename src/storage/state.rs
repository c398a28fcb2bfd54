//! Persistent crawl state
//!
//! The visited set and the frontier queue are stored as two independent JSON
//! documents, both plain arrays of URL strings. Loading a missing file yields
//! an empty default so a first run needs no setup; every save is a full
//! overwrite. No write atomicity is attempted beyond what the filesystem
//! gives us, which is an accepted risk at this scope.

use crate::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Load/save access to the two crawl state documents
#[derive(Debug, Clone)]
pub struct StateStore {
    visited_path: PathBuf,
    queue_path: PathBuf,
}

impl StateStore {
    /// Creates a store rooted at `<output_dir>/scraped/`
    pub fn new(output_dir: &Path) -> Self {
        let data_dir = output_dir.join("scraped");
        Self {
            visited_path: data_dir.join("visited.json"),
            queue_path: data_dir.join("queue.json"),
        }
    }

    /// Loads the visited set, or an empty set on first run
    pub fn load_visited(&self) -> Result<HashSet<String>> {
        load_urls(&self.visited_path).map(|urls| urls.into_iter().collect())
    }

    /// Overwrites the visited set on disk
    ///
    /// The engine calls this before every fetch, so a crash loses at most
    /// the one in-flight page.
    pub fn save_visited(&self, visited: &HashSet<String>) -> Result<()> {
        let mut urls: Vec<&String> = visited.iter().collect();
        urls.sort();
        save_urls(&self.visited_path, &urls)
    }

    /// Loads the frontier queue, or an empty queue on first run
    pub fn load_queue(&self) -> Result<Vec<String>> {
        load_urls(&self.queue_path)
    }

    /// Overwrites the frontier queue on disk
    pub fn save_queue(&self, queue: &[String]) -> Result<()> {
        let refs: Vec<&String> = queue.iter().collect();
        save_urls(&self.queue_path, &refs)
    }
}

fn load_urls(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path)?;
    let urls: Vec<String> = serde_json::from_str(&contents)?;
    Ok(urls)
}

fn save_urls(path: &Path, urls: &[&String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(urls)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_files_gives_empty_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path());

        assert!(store.load_visited().unwrap().is_empty());
        assert!(store.load_queue().unwrap().is_empty());
    }

    #[test]
    fn test_visited_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path());

        let mut visited = HashSet::new();
        visited.insert("https://example.com/".to_string());
        visited.insert("https://example.com/a".to_string());
        store.save_visited(&visited).unwrap();

        assert_eq!(store.load_visited().unwrap(), visited);
    }

    #[test]
    fn test_queue_roundtrip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path());

        let queue = vec![
            "https://example.com/b".to_string(),
            "https://example.com/a".to_string(),
        ];
        store.save_queue(&queue).unwrap();

        assert_eq!(store.load_queue().unwrap(), queue);
    }

    #[test]
    fn test_save_is_full_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path());

        store
            .save_queue(&["https://example.com/a".to_string()])
            .unwrap();
        store.save_queue(&[]).unwrap();

        assert!(store.load_queue().unwrap().is_empty());
    }

    #[test]
    fn test_state_files_are_plain_json_arrays() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path());

        store
            .save_queue(&["https://example.com/a".to_string()])
            .unwrap();

        let raw = fs::read_to_string(dir.path().join("scraped").join("queue.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(parsed.is_array());
    }
}
