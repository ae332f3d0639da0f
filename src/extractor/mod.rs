pub mod cleaner;
pub mod links;
pub mod metadata;
pub mod model;
pub mod scoring;
pub mod selection;

#[cfg(test)]
mod tests;

pub use model::{PageContent, PageMetadata, TextBlock};

use scraper::Html;
use tracing::debug;
use url::Url;

/// Parse and sanitize a document, ready for scoring and discovery.
fn prepare(html: &str) -> Html {
    let mut document = cleaner::parse(html);
    let removed = cleaner::strip(&mut document);
    debug!(removed, "stripped chrome elements");
    document
}

fn summarize(document: &Html, url: &Url) -> PageContent {
    // 1. Score candidate blocks on the sanitized tree
    let blocks = scoring::collect_blocks(document);
    let total_blocks = blocks.len();

    // 2. Keep the best of them
    let content = selection::select_content(blocks);
    debug!(
        total_blocks,
        kept_blocks = selection::kept_block_count(total_blocks),
        "ranked content blocks"
    );

    // 3. Title and description
    let PageMetadata { title, description } = metadata::extract(document);

    PageContent {
        url: url.to_string(),
        title,
        description,
        content,
    }
}

/// Run the full per-page pipeline on already fetched HTML.
pub fn extract_page(url: &Url, html: &str) -> PageContent {
    let document = prepare(html);
    summarize(&document, url)
}

/// Like [`extract_page`], also returning the page's same-site links in
/// discovery order.
pub fn extract_page_with_links(url: &Url, html: &str) -> (PageContent, Vec<Url>) {
    let document = prepare(html);
    let page = summarize(&document, url);
    let links = links::discover(&document, url);
    (page, links)
}
