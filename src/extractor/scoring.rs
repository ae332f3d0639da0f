//! Relevance scoring of candidate text blocks.
//!
//! Two passes feed one block collection:
//!
//! 1. every element whose text lies inside a well-known content container
//!    (see [`CONTENT_CONTAINER_SELECTORS`]) is taken with a flat score of 1;
//! 2. every element in the tree is scored as
//!    `density * quality * depth_score * script_bonus`.
//!
//! The walk uses an explicit stack so pathological nesting cannot overflow
//! the call stack.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::extractor::model::TextBlock;

/// Blocks at or below this many characters are ignored.
pub const MIN_BLOCK_CHARS: usize = 15;

/// Score given to blocks found through a known content container.
pub const CONTAINER_SCORE: f64 = 1.0;

/// Containers that templated sites (WordPress, Elementor, ...) put their
/// prose in. Heuristics misrank these often enough that they are trusted
/// outright.
pub const CONTENT_CONTAINER_SELECTORS: &[&str] = &[
    ".elementor-widget-container",
    ".elementor-text-editor",
    ".elementor-widget-text-editor",
    ".elementor-widget-heading",
    ".elementor-heading-title",
    ".wp-block-group__inner-container",
    ".entry-content",
    ".post-content",
    ".page-content",
    ".site-content",
    "article",
    "main",
    "[role=\"main\"]",
    ".main-content",
    ".content",
    "#content",
];

/// Scripts that naive whitespace tokenization under-segments. Inclusive
/// ranges.
pub const DENSE_SCRIPT_RANGES: &[(char, char)] = &[
    ('\u{1100}', '\u{11FF}'), // Hangul Jamo
    ('\u{3040}', '\u{309F}'), // Hiragana
    ('\u{30A0}', '\u{30FF}'), // Katakana
    ('\u{3130}', '\u{318F}'), // Hangul Compatibility Jamo
    ('\u{3400}', '\u{4DBF}'), // CJK Extension A
    ('\u{4E00}', '\u{9FFF}'), // CJK Unified Ideographs
    ('\u{AC00}', '\u{D7A3}'), // Hangul Syllables
];

const DENSE_SCRIPT_BONUS: f64 = 1.5;
const DEPTH_PENALTY: f64 = 0.1;

static CONTAINERS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    CONTENT_CONTAINER_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("invalid content container selector"))
        .collect()
});

static WORD_SPLIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,.!?。？！，、]+").unwrap());

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '。' | '？' | '！')
}

fn is_comma(c: char) -> bool {
    matches!(c, ',' | '，' | '、')
}

pub fn is_dense_script(c: char) -> bool {
    DENSE_SCRIPT_RANGES
        .iter()
        .any(|(start, end)| (*start..=*end).contains(&c))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Ratio of visible text to serialized markup.
pub fn text_density(text: &str, inner_html: &str) -> f64 {
    let html_len = inner_html.chars().count();
    if text.is_empty() || html_len == 0 {
        return 0.0;
    }
    text.chars().count() as f64 / html_len as f64
}

/// Prose-likeness of a piece of text, independent of its markup.
pub fn text_quality(text: &str) -> f64 {
    let total_chars = text.chars().count();
    let words = WORD_SPLIT_REGEX
        .split(text)
        .filter(|word| !word.is_empty())
        .count();
    if words == 0 || total_chars == 0 {
        return 0.0;
    }

    let sentence_ends = text.chars().filter(|c| is_sentence_end(*c)).count();
    let commas = text.chars().filter(|c| is_comma(*c)).count();
    let dense_chars = text.chars().filter(|c| is_dense_script(*c)).count();

    let avg_word_length = total_chars as f64 / words as f64;
    let word_length_score = avg_word_length.clamp(2.0, 10.0) / 10.0;
    let structure_score = (sentence_ends + commas) as f64 / words as f64;
    let dense_ratio = dense_chars as f64 / total_chars as f64;

    structure_score * 0.3 + word_length_score * 0.2 + dense_ratio * 2.0 * 0.5
}

/// Shallow blocks are favoured over deeply nested ones.
pub fn depth_score(depth: usize) -> f64 {
    (1.0 - depth as f64 * DEPTH_PENALTY).max(0.0)
}

pub fn script_bonus(text: &str) -> f64 {
    if text.chars().any(is_dense_script) {
        DENSE_SCRIPT_BONUS
    } else {
        1.0
    }
}

pub fn block_score(text: &str, inner_html: &str, depth: usize) -> f64 {
    text_density(text, inner_html) * text_quality(text) * depth_score(depth) * script_bonus(text)
}

/// Collect every candidate block of a (sanitized) document.
pub fn collect_blocks(document: &Html) -> Vec<TextBlock> {
    let mut blocks = Vec::new();
    collect_container_blocks(document, &mut blocks);
    collect_scored_blocks(document, &mut blocks);
    blocks
}

fn collect_container_blocks(document: &Html, blocks: &mut Vec<TextBlock>) {
    let root = document.root_element();
    for selector in CONTAINERS.iter() {
        for element in root.select(selector) {
            let text = element_text(element);
            if text.chars().count() > MIN_BLOCK_CHARS {
                blocks.push(TextBlock::new(text, CONTAINER_SCORE));
            }
        }
    }
}

fn collect_scored_blocks(document: &Html, blocks: &mut Vec<TextBlock>) {
    // The document node sits at depth 0, so <html> starts at 1.
    let mut stack = vec![(document.root_element(), 1usize)];

    while let Some((element, depth)) = stack.pop() {
        let text = element_text(element);
        if text.chars().count() > MIN_BLOCK_CHARS {
            let score = block_score(&text, &element.inner_html(), depth);
            blocks.push(TextBlock::new(text, score));
        }

        // Reversed so children are visited in document order.
        let children: Vec<_> = element.children().filter_map(ElementRef::wrap).collect();
        stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_all_container_selectors_parse() {
        assert_eq!(CONTAINERS.len(), CONTENT_CONTAINER_SELECTORS.len());
    }

    #[test]
    fn test_text_density() {
        assert!((text_density("hello", "<b>hello</b>") - 5.0 / 12.0).abs() < EPSILON);
        assert_eq!(text_density("", "<br>"), 0.0);
        assert_eq!(text_density("text", ""), 0.0);
    }

    #[test]
    fn test_text_quality_empty_and_punctuation_only() {
        assert_eq!(text_quality(""), 0.0);
        assert_eq!(text_quality("...!!!"), 0.0);
    }

    #[test]
    fn test_text_quality_formula() {
        // 2 words, 1 sentence end, 0 commas, 10 chars
        let quality = text_quality("Good dogs.");
        let expected = (1.0 / 2.0) * 0.3 + (5.0 / 10.0) * 0.2;
        assert!((quality - expected).abs() < EPSILON);
    }

    #[test]
    fn test_word_length_is_clamped() {
        let long_word = "a".repeat(40);
        assert!((text_quality(&long_word) - 0.2).abs() < EPSILON);
        // "a a a" -> avg length 5/3, clamped up to 2
        assert!((text_quality("a a a") - 0.04).abs() < EPSILON);
    }

    #[test]
    fn test_sentences_outscore_single_word() {
        let single = "Supercalifragilistic";
        let sentences = "One. Two. Three. Go.";
        assert_eq!(single.chars().count(), sentences.chars().count());
        assert!(text_quality(sentences) > text_quality(single));
        assert!(block_score(sentences, sentences, 2) > block_score(single, single, 2));
    }

    #[test]
    fn test_hangul_quality_and_bonus() {
        let korean = "우리는 좋은 제품을 만듭니다.";
        let english = "We make good products here.";
        assert!(text_quality(korean) > text_quality(english));
        assert_eq!(script_bonus(korean), 1.5);
        assert_eq!(script_bonus(english), 1.0);
        assert_eq!(script_bonus("日本語の文章"), 1.5);
    }

    #[test]
    fn test_cjk_punctuation_counts_as_structure() {
        let punctuated = "文章です。本当です。";
        let bare = "文章です 本当です";
        assert!(text_quality(punctuated) > text_quality(bare));
    }

    #[test]
    fn test_depth_score() {
        assert_eq!(depth_score(0), 1.0);
        assert!((depth_score(3) - 0.7).abs() < EPSILON);
        assert_eq!(depth_score(10), 0.0);
        assert_eq!(depth_score(25), 0.0);
    }

    #[test]
    fn test_collect_blocks_skips_short_text() {
        let document = Html::parse_document("<html><body><p>tiny</p></body></html>");
        assert!(collect_blocks(&document).is_empty());
    }

    #[test]
    fn test_container_blocks_come_first_with_flat_score() {
        let document = Html::parse_document(
            "<html><body><article>Acme Corp makes industrial widgets.</article></body></html>",
        );

        let blocks = collect_blocks(&document);

        assert_eq!(blocks[0].text, "Acme Corp makes industrial widgets.");
        assert_eq!(blocks[0].score, CONTAINER_SCORE);
        // html, body and article are also reached by the walk
        assert_eq!(blocks.len(), 4);
        assert!(blocks[1..].iter().all(|b| b.score < CONTAINER_SCORE));
    }

    #[test]
    fn test_walk_visits_in_document_order_with_depth() {
        let document = Html::parse_document(
            "<html><body><div><p>First paragraph of text here.</p></div><p>Second paragraph of text here.</p></body></html>",
        );

        let blocks = collect_blocks(&document);
        let texts: Vec<_> = blocks.iter().map(|b| b.text.as_str()).collect();

        let first = texts.iter().position(|t| *t == "First paragraph of text here.");
        let second = texts.iter().position(|t| *t == "Second paragraph of text here.");
        assert!(first.unwrap() < second.unwrap());
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let depth = 1_000;
        let html = format!(
            "<html><body>{}A reasonably long sentence at the bottom.{}</body></html>",
            "<div>".repeat(depth),
            "</div>".repeat(depth)
        );
        let document = Html::parse_document(&html);

        let blocks = collect_blocks(&document);

        assert!(!blocks.is_empty());
        assert!(blocks.iter().all(|b| b.score >= 0.0));
    }
}
