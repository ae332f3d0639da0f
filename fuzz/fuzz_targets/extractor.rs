#![no_main]

use libfuzzer_sys::fuzz_target;
use url::Url;

use sitecrawl::extractor::extract_page_with_links;

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 is replaced, the same way the fetcher decodes bodies
    let html = String::from_utf8_lossy(data);
    let base = Url::parse("https://example.com/").unwrap();

    // Extraction must never panic regardless of input
    let (page, links) = extract_page_with_links(&base, &html);

    assert!(links.iter().all(|link| link.host_str() == Some("example.com")));
    assert_eq!(page.content, page.content.trim());
});
