use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::extractor::model::PageMetadata;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("invalid metadata selector")
}

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static OG_TITLE: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[property="og:title"]"#));
static H1: LazyLock<Selector> = LazyLock::new(|| selector("h1"));

/// Description sources, all of which contribute when present.
static DESCRIPTIONS: LazyLock<[Selector; 3]> = LazyLock::new(|| {
    [
        selector(r#"meta[name="description"]"#),
        selector(r#"meta[property="og:description"]"#),
        selector(r#"meta[name="twitter:description"]"#),
    ]
});

pub fn extract(document: &Html) -> PageMetadata {
    PageMetadata {
        title: extract_title(document),
        description: extract_description(document),
    }
}

/// First non-empty of `<title>`, `og:title`, first `<h1>`.
fn extract_title(document: &Html) -> String {
    let root = document.root_element();

    let title = root
        .select(&TITLE)
        .next()
        .map(|element| element.text().collect::<String>());
    let og_title = root
        .select(&OG_TITLE)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string);
    let h1 = root
        .select(&H1)
        .next()
        .map(|element| element.text().collect::<String>());

    [title, og_title, h1]
        .into_iter()
        .flatten()
        .map(|candidate| candidate.trim().to_string())
        .find(|candidate| !candidate.is_empty())
        .unwrap_or_default()
}

fn extract_description(document: &Html) -> String {
    let root = document.root_element();

    DESCRIPTIONS
        .iter()
        .filter_map(|selector| root.select(selector).next())
        .filter_map(|element| element.value().attr("content"))
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
