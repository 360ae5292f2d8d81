// src/crawl/mod.rs
// =============================================================================
// The concurrent crawl engine.
//
// How a crawl runs:
// 1. The root request gets a work permit, then its task is spawned
// 2. Each task fetches its page, sends a CrawlResult, and (if depth > 0)
//    spawns one task per selected link, reserving a permit for each first
// 3. A watcher waits for the permit count to reach zero, then closes the
//    result stream
//
// Failed pages just don't show up in the results. Nothing is retried and
// nothing is deduplicated.
// =============================================================================

mod engine;
mod error;
mod tracker;
mod types;

pub use engine::Crawler;
pub use types::{CrawlRequest, CrawlResult};
