use std::fs;
use url::Url;

use crate::extractor::{extract_page, extract_page_with_links};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

#[test]
fn test_extract_article() {
    let html = fixture("article.html");

    let (page, links) = extract_page_with_links(&url("https://example.com/article"), &html);

    assert_eq!(page.url, "https://example.com/article");
    assert_eq!(page.title, "Sample Article - News Site");
    assert_eq!(
        page.description,
        "A sample article used for extraction tests. Sample article summary."
    );
    assert!(page.content.contains("first paragraph"));
    assert!(page.content.contains("second paragraph"));
    assert!(!page.content.contains("cookies"));
    assert!(!page.content.contains("Copyright"));
    assert!(!page.content.contains("Trending"));
    assert!(!page.content.contains("analytics"));

    // nav, aside and footer links are gone with their containers
    let links: Vec<String> = links.into_iter().map(String::from).collect();
    assert_eq!(links, vec!["https://example.com/related"]);
}

#[test]
fn test_extract_korean_page_builder_site() {
    let html = fixture("korean.html");

    let (page, links) = extract_page_with_links(&url("https://hanbit.example.kr/"), &html);

    assert_eq!(page.title, "한빛테크 | 회사 소개");
    assert_eq!(page.description, "한빛테크는 스마트 공장 솔루션을 만듭니다.");
    assert!(page.content.contains("스마트 공장 솔루션 기업입니다"));
    assert!(!page.content.contains("관리자"));
    assert!(!page.content.contains("배너"));
    assert!(!page.content.contains("뉴스레터"));
    assert_eq!(links.len(), 2);
}

#[test]
fn test_extract_chrome_only_page() {
    let html = fixture("empty.html");

    let (page, links) = extract_page_with_links(&url("https://example.com/"), &html);

    assert_eq!(page.title, "");
    assert_eq!(page.description, "");
    assert_eq!(page.content, "");
    assert!(links.is_empty());
}

#[test]
fn test_extract_minimal_article() {
    let html = r#"<html><head><title>Acme</title><meta name="description" content="We sell widgets"></head><body><nav>menu</nav><article>Acme Corp makes industrial widgets for factories worldwide. Our widgets are durable, affordable, and shipped globally.</article><footer>copyright</footer></body></html>"#;

    let page = extract_page(&url("https://acme.example/"), html);

    assert_eq!(page.title, "Acme");
    assert_eq!(page.description, "We sell widgets");
    assert!(page.content.contains(
        "Acme Corp makes industrial widgets for factories worldwide. Our widgets are durable, affordable, and shipped globally."
    ));
    assert!(!page.content.contains("menu"));
    assert!(!page.content.contains("copyright"));
}

#[test]
fn test_any_long_block_yields_content() {
    let html = "<html><body><span>sixteen chars!!!</span></body></html>";

    let page = extract_page(&url("https://example.com/"), html);

    assert!(!page.content.is_empty());
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Broken</title><body><p>Unclosed tags are common<div>More content that is long enough";

    let page = extract_page(&url("https://example.com/broken"), html);

    assert_eq!(page.title, "Broken");
    assert!(page.content.contains("Unclosed tags are common"));
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use crate::extractor::{model::TextBlock, selection};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract_page_with_links(&url("https://example.com/"), &html);
        }

        #[test]
        fn test_ranked_scores_never_increase(scores in proptest::collection::vec(0.0f64..10.0, 0..200)) {
            let blocks = scores.iter().map(|s| TextBlock::new("x", *s)).collect();
            let ranked = selection::rank(blocks);
            prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
            prop_assert!(selection::kept_block_count(ranked.len()) <= ranked.len());
        }
    }
}
