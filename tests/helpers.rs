#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use sitecrawl::{
    api,
    app_state::AppState,
    fetcher::{FetcherOptions, HttpFetcher},
};

pub fn test_app() -> Router {
    let options = FetcherOptions {
        request_timeout_secs: 5,
        ..FetcherOptions::default()
    };
    let fetcher = HttpFetcher::new(&options).expect("Failed to build fetcher");
    api::router(AppState::new(Arc::new(fetcher)))
}

pub async fn post_crawl(app: Router, body: String) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/crawl-website")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).expect("response body is not JSON")
}
