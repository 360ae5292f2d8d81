// src/server/mod.rs
// =============================================================================
// HTTP transport for the crawler.
//
// Just one route, POST /crawl. The handler runs the whole crawl and answers
// once every page is done; there is no streaming to the client.
// =============================================================================

mod routes;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use crate::crawl::Crawler;

pub use routes::build_app;

// Binds 0.0.0.0:<port> and serves until the process is stopped
pub async fn run(crawler: Crawler, port: u16) -> Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("Listening on http://{addr}/crawl");

    axum::serve(listener, build_app(crawler))
        .await
        .context("Server error")
}
