// src/config.rs
// =============================================================================
// Crawler configuration.
//
// Every field has a serde default, so a partial config (or none at all)
// gives the plain behaviour: no concurrency cap, no request timeout.
// The CLI fills this struct from its flags.
// =============================================================================

use std::num::NonZeroUsize;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlerConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Global cap on fetches in flight across the whole crawl tree
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: Option<NonZeroUsize>,

    /// Per-request deadline; a timed out fetch counts as a transport failure
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Option<Duration>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            max_concurrency: default_max_concurrency(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl CrawlerConfig {
    // Builds the HTTP client shared by every task of a crawl
    //
    // reqwest::Client is reference counted inside, so one client gives us
    // connection pooling across all tasks for free.
    pub fn build_client(&self) -> Result<Client> {
        let mut builder = Client::builder().user_agent(&self.user_agent);
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().context("Failed to create HTTP client")
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn default_max_concurrency() -> Option<NonZeroUsize> {
    None
}

fn default_request_timeout() -> Option<Duration> {
    None
}
