use regex::Regex;
use std::sync::LazyLock;

use crate::extractor::model::TextBlock;

/// Lower bound on the number of blocks kept, when that many exist.
pub const MIN_KEPT_BLOCKS: usize = 10;
/// Fraction of all blocks kept on pages with many candidates.
pub const KEPT_FRACTION: f64 = 0.3;

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static BLANK_LINES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").unwrap());

pub fn kept_block_count(total: usize) -> usize {
    let fraction = (total as f64 * KEPT_FRACTION).ceil() as usize;
    MIN_KEPT_BLOCKS.max(fraction).min(total)
}

/// Sort by score, highest first. The sort is stable, so among equal scores
/// the block encountered first wins.
pub fn rank(mut blocks: Vec<TextBlock>) -> Vec<TextBlock> {
    blocks.sort_by(|a, b| b.score.total_cmp(&a.score));
    blocks
}

/// Rank, cut and join blocks into the page's content string.
pub fn select_content(blocks: Vec<TextBlock>) -> String {
    let total = blocks.len();
    let keep = kept_block_count(total);

    let joined = rank(blocks)
        .into_iter()
        .take(keep)
        .map(|block| block.text)
        .collect::<Vec<_>>()
        .join("\n\n");

    normalize_content(&joined)
}

pub fn normalize_content(text: &str) -> String {
    let spaced = WHITESPACE_REGEX.replace_all(text, " ");
    BLANK_LINES_REGEX
        .replace_all(&spaced, "\n\n")
        .trim()
        .to_string()
}
