// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - crawl: run one crawl from the terminal and print what was found
// - serve: expose the same crawl as an HTTP endpoint (POST /crawl)
//
// The crawler tuning flags (--max-concurrency, --timeout) are shared by both
// and turned into a CrawlerConfig.
// =============================================================================

use std::num::NonZeroUsize;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::CrawlerConfig;

#[derive(Parser, Debug)]
#[command(
    name = "email-crawler",
    version,
    about = "Crawl a website to a fixed depth and collect email addresses",
    long_about = "email-crawler fetches a page, collects every email address on it, and follows \
                  up to 9 outbound links per page until the requested depth is used up."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website and print the emails found on each page
    ///
    /// Example: email-crawler crawl https://example.com --depth 2
    Crawl {
        /// URL of the first page to fetch (http or https)
        url: String,

        /// How many link hops to follow from the first page
        ///
        /// Depth 0 = just the first page
        /// Depth 1 = first page + the pages it links to
        #[arg(long, short, default_value_t = 1)]
        depth: u32,

        /// Output results in JSON format instead of a listing
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        crawler: CrawlerArgs,
    },

    /// Serve crawls over HTTP
    ///
    /// Example: curl -X POST localhost:3000/crawl -d '{"url":"https://example.com","depth":1}'
    Serve {
        /// Port to listen on (all interfaces)
        #[arg(long, short, default_value_t = 3000)]
        port: u16,

        #[command(flatten)]
        crawler: CrawlerArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct CrawlerArgs {
    /// Cap on pages fetched at the same time (default: no cap)
    #[arg(long)]
    pub max_concurrency: Option<NonZeroUsize>,

    /// Give up on a page after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl CrawlerArgs {
    pub fn into_config(self) -> CrawlerConfig {
        CrawlerConfig {
            max_concurrency: self.max_concurrency,
            request_timeout: self.timeout.map(Duration::from_secs),
            ..CrawlerConfig::default()
        }
    }
}
