// src/test_support.rs
// =============================================================================
// A tiny local website for tests.
//
// FixtureSite binds an axum server to 127.0.0.1 on a random port and serves
// a fixed set of pages. Every request is counted per path, so tests can
// check exactly which pages the crawler visited and how often.
//
// Pages are built after binding, because their links need the real port.
// Unknown paths answer 404.
// =============================================================================

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct Page {
    status: StatusCode,
    body: String,
}

impl Page {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
        }
    }

    pub fn with_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Default)]
struct SiteState {
    pages: HashMap<String, Page>,
    hits: Mutex<HashMap<String, usize>>,
}

pub struct FixtureSite {
    addr: SocketAddr,
    state: Arc<SiteState>,
}

impl FixtureSite {
    /// Starts the site. `build` gets the base URL (`http://127.0.0.1:PORT`)
    /// and returns `(path, page)` pairs.
    pub async fn serve<F, P>(build: F) -> Self
    where
        F: FnOnce(&str) -> Vec<(P, Page)>,
        P: Into<String>,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base = format!("http://{addr}");

        let pages = build(&base)
            .into_iter()
            .map(|(path, page)| (path.into(), page))
            .collect();
        let state = Arc::new(SiteState {
            pages,
            hits: Mutex::default(),
        });

        let app = Router::new()
            .fallback(serve_page)
            .with_state(state.clone());
        tokio::spawn(async move { axum::serve(listener, app).await.ok() });

        Self { addr, state }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn hits(&self, path: &str) -> usize {
        self.state
            .hits
            .lock()
            .unwrap()
            .get(path)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.state.hits.lock().unwrap().values().sum()
    }
}

async fn serve_page(State(state): State<Arc<SiteState>>, uri: Uri) -> Response {
    let path = uri.path().to_string();
    *state.hits.lock().unwrap().entry(path.clone()).or_insert(0) += 1;

    match state.pages.get(&path) {
        Some(page) => (page.status, Html(page.body.clone())).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// An HTML page with one anchor per URL
pub fn html_with_links(text: &str, urls: &[String]) -> String {
    let anchors: Vec<String> = urls
        .iter()
        .map(|url| format!(r#"<li><a href="{url}">{url}</a></li>"#))
        .collect();
    format!(
        "<html><body><p>{text}</p><ul>\n{}\n</ul></body></html>",
        anchors.join("\n")
    )
}
