use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use crate::crawler::CrawlError;

pub const URL_REQUIRED: &str = "URL is required";

#[derive(Debug, Deserialize, ToSchema)]
pub struct CrawlRequest {
    /// Absolute http(s) URL of the page to crawl.
    pub url: Option<String>,
}

impl CrawlRequest {
    pub fn validate(&self) -> Result<Url, CrawlError> {
        let raw = self.url.as_deref().map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(CrawlError::InvalidRequest(URL_REQUIRED.to_string()));
        }

        let url = Url::parse(raw)
            .map_err(|e| CrawlError::InvalidRequest(format!("Invalid URL '{raw}': {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CrawlError::InvalidRequest(format!(
                "Unsupported URL scheme '{}'",
                url.scheme()
            )));
        }
        Ok(url)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
