use axum::http::StatusCode;
use thiserror::Error;

use crate::fetcher::FetchError;

/// The HTML5 parser recovers from any input, so a page either fails to
/// arrive or yields a document; there is no separate parse failure.
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },
}

impl CrawlError {
    pub fn from_fetch(url: &str, source: FetchError) -> Self {
        Self::Fetch {
            url: url.to_string(),
            source,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Fetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
