//! Storage module for crawl state and page artifacts
//!
//! Everything the crawler persists lives under `<output_dir>/scraped/`:
//! - `visited.json` - URLs that have been dequeued at least once
//! - `queue.json` - the frontier for the next crawl round
//! - `content/` - one markdown file per crawled page

mod paths;
mod state;

pub use paths::ArtifactPaths;
pub use state::StateStore;
