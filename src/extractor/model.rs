use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Extracted summary of one crawled page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageContent {
    pub url: String,
    pub title: String,
    pub description: String,
    pub content: String,
}

/// Candidate text with its relevance score. Lives only while a single page
/// is being ranked.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub score: f64,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// Title and description pulled from the document head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}
