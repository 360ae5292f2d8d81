// src/crawl/error.rs
// =============================================================================
// Why a single page could not be crawled.
//
// These never leave the task that hit them: the page simply contributes no
// result. They exist so the failure can be logged with a useful message.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Anything other than 200 OK
    #[error("unexpected status: {0}")]
    Status(StatusCode),

    /// The response started but the body could not be read in full
    #[error("failed to read body: {0}")]
    Body(#[source] reqwest::Error),
}
