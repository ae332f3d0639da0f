use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::trace;
use url::Url;

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Path fragments that mark endpoints, not pages.
const EXCLUDED_PATH_PARTS: &[&str] = &["/api/", "/auth/", "/login", "/signup"];
/// File types that are never HTML pages.
const EXCLUDED_EXTENSIONS: &[&str] = &[".jpg", ".png", ".pdf"];

/// Same-site candidate sub-pages in first-seen order, without duplicates.
///
/// Malformed hrefs are skipped. Fragments are dropped, and the base page
/// itself is never returned.
pub fn discover(document: &Html, base_url: &Url) -> Vec<Url> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    let mut base = base_url.clone();
    base.set_fragment(None);
    seen.insert(base.to_string());

    for element in document.root_element().select(&ANCHOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let mut link = match base_url.join(href.trim()) {
            Ok(link) => link,
            Err(err) => {
                trace!(href, error = %err, "skipping malformed href");
                continue;
            }
        };
        link.set_fragment(None);

        if is_candidate(&link, base_url) && seen.insert(link.to_string()) {
            links.push(link);
        }
    }

    links
}

pub fn is_candidate(link: &Url, base_url: &Url) -> bool {
    if link.host_str().is_none() || link.host_str() != base_url.host_str() {
        return false;
    }

    let path = link.path();
    !EXCLUDED_PATH_PARTS.iter().any(|part| path.contains(part))
        && !EXCLUDED_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
