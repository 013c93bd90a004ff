//! FAQ extraction: repeated `Q: ... A: ...` blocks.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::Pair;

static Q_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bQ:").expect("Invalid regex: question marker"));

static A_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bA:").expect("Invalid regex: answer marker"));

/// Extract question/answer candidates. Each `Q:` opens a block running to
/// the next `Q:` (or end of text); the first `A:` inside the block splits
/// question from answer. Blocks without an answer are skipped.
pub fn extract(text: &str) -> Vec<Pair> {
    let mut pairs = Vec::new();
    let starts: Vec<_> = Q_MARKER.find_iter(text).collect();

    for (i, start) in starts.iter().enumerate() {
        let block_end = starts
            .get(i + 1)
            .map(|next| next.start())
            .unwrap_or(text.len());
        let block = &text[start.end()..block_end];

        let Some(answer_marker) = A_MARKER.find(block) else {
            continue;
        };
        let question = block[..answer_marker.start()].trim();
        let answer = block[answer_marker.end()..].trim();

        if !question.is_empty() && !answer.is_empty() {
            pairs.push(Pair::tagged(question, answer, &["faq"]));
        }
    }

    pairs
}
