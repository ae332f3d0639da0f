//! Parsing and removal of page chrome.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

/// Elements that are chrome rather than content. Add new site idioms here;
/// nothing else needs to change.
pub const STRIP_SELECTORS: &[&str] = &[
    "script",
    "style",
    "nav",
    "footer",
    "header",
    "aside",
    "iframe",
    "noscript",
    // overlays and consent banners
    ".cookie-banner",
    ".popup",
    ".modal",
    ".overlay",
    // CMS and page-builder helpers
    "#wpadminbar",
    ".wp-block-spacer",
    ".elementor-hidden-desktop",
    ".elementor-hidden-mobile",
    ".elementor-widget-spacer",
];

static STRIP: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    STRIP_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("invalid strip selector"))
        .collect()
});

pub fn parse(html: &str) -> Html {
    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        debug!(errors = document.errors.len(), "html parsed with recoverable errors");
    }
    document
}

/// Detach every element matching [`STRIP_SELECTORS`] from the tree.
///
/// Detached subtrees stay in the arena but are unreachable from the root
/// element, so callers must query through `root_element()`.
pub fn strip(document: &mut Html) -> usize {
    let root_id = document.root_element().id();
    let mut removed = 0;

    for selector in STRIP.iter() {
        let ids: Vec<_> = document
            .root_element()
            .select(selector)
            .map(|element| element.id())
            .filter(|id| *id != root_id)
            .collect();

        for id in ids {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
                removed += 1;
            }
        }
    }

    removed
}
