// src/crawl/types.rs
// =============================================================================
// The two values that flow through a crawl.
//
// CrawlRequest goes in (one per task), CrawlResult comes out (at most one per
// task). Both derive serde so the HTTP endpoint and the --json output can use
// them directly.
// =============================================================================

use serde::{Deserialize, Serialize};

/// One unit of crawl work: fetch `url`, then follow links while `depth` > 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlRequest {
    pub url: String,
    pub depth: u32,
}

impl CrawlRequest {
    pub fn new(url: impl Into<String>, depth: u32) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }

    /// The request for a link found on this page, one level shallower
    ///
    /// Only called when `depth` > 0.
    pub fn child(&self, url: String) -> Self {
        Self {
            url,
            depth: self.depth - 1,
        }
    }
}

/// Emails found on one successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    /// The URL that was fetched
    pub site_name: String,
    /// Every match on the page, in order, duplicates included
    pub emails: Vec<String>,
}
