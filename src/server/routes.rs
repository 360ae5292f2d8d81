// src/server/routes.rs
// =============================================================================
// The /crawl route.
//
// Request:   POST /crawl  {"url": "https://example.com", "depth": 1}
// Response:  200 {"data": [{"siteName": "...", "emails": ["..."]}, ...]}
//            400 with an empty body if the JSON doesn't fit CrawlRequest
//
// CORS is open to any origin so a browser front end on another host can
// call us; preflight OPTIONS requests are answered by the CorsLayer.
// =============================================================================

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::{
    ACCEPT, ACCEPT_ENCODING, AUTHORIZATION, CACHE_CONTROL, CONTENT_LENGTH, CONTENT_TYPE, ORIGIN,
};
use axum::http::{HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::crawl::{CrawlRequest, CrawlResult, Crawler};

#[derive(Debug, Serialize)]
pub struct CrawlResponse {
    pub data: Vec<CrawlResult>,
}

pub fn build_app(crawler: Crawler) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT_ENCODING,
            HeaderName::from_static("x-csrf-token"),
            AUTHORIZATION,
            ACCEPT,
            ORIGIN,
            CACHE_CONTROL,
            HeaderName::from_static("x-requested-with"),
        ]);

    Router::new()
        .route("/crawl", post(crawl_handler))
        .layer(cors)
        .with_state(crawler)
}

async fn crawl_handler(
    State(crawler): State<Crawler>,
    payload: Result<Json<CrawlRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected crawl request");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let url = request.url.clone();
    let data = crawler.crawl(request).await;
    info!(url = %url, pages = data.len(), "Crawl finished");

    Json(CrawlResponse { data }).into_response()
}
