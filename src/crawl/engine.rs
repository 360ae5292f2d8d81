// src/crawl/engine.rs
// =============================================================================
// Fetch-and-extract tasks and the fan-out that connects them.
//
// One tokio task per page. A task never waits for its children: it reserves
// a work permit for each child, spawns it, and finishes. The Tracker is the
// only thing that knows when the whole tree is done.
//
// Results travel over an unbounded mpsc channel. The watcher task owns the
// first sender and drops it once the tracker is idle; every task holds a
// clone, so the reader sees the end of the stream only after the last task
// has finished too.
//
// Rust concepts:
// - tokio::spawn: Starts an independent task on the runtime
// - mpsc::unbounded_channel: Many writers, one reader, never blocks a sender
// - futures::Stream: The async version of Iterator
// =============================================================================

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use anyhow::Result;
use futures::{Stream, StreamExt};
use reqwest::{Client, StatusCode};
use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, info};

use super::error::FetchError;
use super::tracker::{Tracker, WorkPermit};
use super::types::{CrawlRequest, CrawlResult};
use crate::config::CrawlerConfig;
use crate::extract::{extract_emails, extract_links, select_links};

type ResultSink = mpsc::UnboundedSender<CrawlResult>;

// What every task of every crawl shares
struct Shared {
    client: Client,
    limiter: Option<Semaphore>,
}

/// Runs crawls. Cheap to clone; clones share one HTTP client.
#[derive(Clone)]
pub struct Crawler {
    shared: Arc<Shared>,
}

impl Crawler {
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        let client = config.build_client()?;
        let limiter = config
            .max_concurrency
            .map(|limit| Semaphore::new(limit.get()));

        Ok(Self {
            shared: Arc::new(Shared { client, limiter }),
        })
    }

    /// Starts a crawl and returns the stream its results arrive on
    ///
    /// The stream ends once the root page and every page spawned from it
    /// (at any depth) has finished. Must be called inside a tokio runtime.
    pub fn start(&self, request: CrawlRequest) -> ResultStream {
        info!(url = %request.url, depth = request.depth, "Starting crawl");

        let tracker = Tracker::new();
        let (sink, rx) = mpsc::unbounded_channel();

        // The root is counted before it exists, so the watcher can't see zero early
        let root = tracker.reserve();
        spawn_task(
            self.shared.clone(),
            tracker.clone(),
            sink.clone(),
            request,
            root,
        );

        tokio::spawn(async move {
            tracker.wait_idle().await;
            debug!("All crawl tasks finished, closing result stream");
            drop(sink);
        });

        ResultStream { rx }
    }

    /// Runs a crawl to completion and returns every result in arrival order
    pub async fn crawl(&self, request: CrawlRequest) -> Vec<CrawlResult> {
        self.start(request).collect().await
    }
}

/// Results of one crawl, in the order pages finished
pub struct ResultStream {
    rx: mpsc::UnboundedReceiver<CrawlResult>,
}

impl Stream for ResultStream {
    type Item = CrawlResult;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

// Spawns the task for one page
//
// Takes the permit already reserved for it; the permit is released when the
// task's future finishes, whichever way it finishes.
//
// This is a plain fn rather than an async fn so the task can spawn copies of
// itself without a self-referential future type.
fn spawn_task(
    shared: Arc<Shared>,
    tracker: Tracker,
    sink: ResultSink,
    request: CrawlRequest,
    permit: WorkPermit,
) {
    tokio::spawn(async move {
        let _permit = permit;

        let body = match shared.fetch(&request.url).await {
            Ok(body) => body,
            Err(e) => {
                debug!(url = %request.url, error = %e, "Skipping page");
                return;
            }
        };

        let emails = extract_emails(&body);
        debug!(
            url = %request.url,
            depth = request.depth,
            emails = emails.len(),
            "Page crawled"
        );

        // Only fails if the reader dropped the stream; the crawl still runs out
        let _ = sink.send(CrawlResult {
            site_name: request.url.clone(),
            emails,
        });

        if request.depth == 0 {
            return;
        }

        for link in select_links(extract_links(&body)) {
            let child = request.child(link);
            let permit = tracker.reserve();
            spawn_task(shared.clone(), tracker.clone(), sink.clone(), child, permit);
        }
    });
}

impl Shared {
    // GET a page and return its body as text
    //
    // Only 200 OK counts. The body is decoded lossily: bytes that aren't
    // UTF-8 become U+FFFD instead of failing the page.
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        // The semaphore is never closed, so acquire only fails if it was
        let _slot = match &self.limiter {
            Some(limiter) => limiter.acquire().await.ok(),
            None => None,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status()));
        }

        let bytes = response.bytes().await.map_err(FetchError::Body)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
