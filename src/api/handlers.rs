use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

use crate::{
    api::dtos::{CrawlRequest, ErrorResponse},
    app_state::AppState,
    crawler::{CrawlError, CrawlResult},
};

fn error_response(err: &CrawlError) -> Response {
    (
        err.status_code(),
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/crawl-website",
    tag = "crawl",
    request_body = CrawlRequest,
    responses(
        (status = 200, description = "Main page and up to 5 sub-pages", body = CrawlResult),
        (status = 400, description = "Missing or malformed URL", body = ErrorResponse),
        (status = 500, description = "Main page could not be fetched", body = ErrorResponse)
    )
)]
pub async fn crawl_website(
    State(state): State<AppState>,
    payload: Result<Json<CrawlRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection, "rejected crawl request body");
            return error_response(&CrawlError::InvalidRequest(rejection.body_text()));
        }
    };

    let url = match payload.validate() {
        Ok(url) => url,
        Err(err) => return error_response(&err),
    };

    info!(%url, "crawl requested");
    match state.crawler.crawl(&url).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => {
            error!(%url, error = %err, "crawl failed");
            error_response(&err)
        }
    }
}

/// Browsers send a preflight before the cross-origin POST; the CORS layer
/// attaches the headers.
pub async fn crawl_preflight() -> &'static str {
    "ok"
}
