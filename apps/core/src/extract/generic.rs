//! Generic fallback extraction.
//!
//! Six independent sub-strategies, applied in sequence with their results
//! merged; only the sentence-chain stage is conditional, engaging when the
//! structural stages found little. Overlapping candidates are expected —
//! collapsing them is the deduplicator's job.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::Pair;

const PARAGRAPH_MIN_LEN: usize = 20;
const SECTION_BODY_MIN_LEN: usize = 30;
const LIST_ITEM_MIN_LEN: usize = 15;
const SENTENCE_PROMPT_MIN_LEN: usize = 20;
const SENTENCE_COMPLETION_MIN_LEN: usize = 30;
const QUESTION_COMPLETION_MIN_LEN: usize = 20;
const QUESTION_COMPLETION_MAX_LEN: usize = 500;

/// Sentence chaining engages only below this candidate count.
const SENTENCE_CHAIN_THRESHOLD: usize = 3;
const SENTENCE_CHAIN_MIN_SENTENCES: usize = 5;

const MAX_HEADING_LEN: usize = 60;
const MAX_HEADING_WORDS: usize = 8;

static NUMBERED_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\d+(?:\.\d+)*\.?)[ \t]+(\S[^\n]*)$").expect("Invalid regex: numbered heading")
});

/// Words that open an interrogative sentence.
const QUESTION_WORDS: [&str; 18] = [
    "what", "how", "why", "when", "where", "who", "which", "whose", "can", "could", "should",
    "would", "will", "do", "does", "did", "is", "are",
];

const BULLET_GLYPHS: [char; 3] = ['•', '-', '*'];

/// Run the full fallback chain over normalized text.
pub fn extract(text: &str) -> Vec<Pair> {
    let mut candidates = Vec::new();

    candidates.extend(paragraph_pairs(text));
    candidates.extend(numbered_section_pairs(text));
    candidates.extend(heading_pairs(text));
    if candidates.len() < SENTENCE_CHAIN_THRESHOLD {
        candidates.extend(sentence_chain_pairs(text));
    }
    candidates.extend(list_item_pairs(text));
    candidates.extend(implicit_question_pairs(text));

    candidates
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Stage 1: pair each blank-line-separated paragraph with its successor.
fn paragraph_pairs(text: &str) -> Vec<Pair> {
    let paragraphs: Vec<&str> = text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    paragraphs
        .windows(2)
        .filter(|w| char_len(w[0]) > PARAGRAPH_MIN_LEN && char_len(w[1]) > PARAGRAPH_MIN_LEN)
        .map(|w| Pair::tagged(w[0], w[1], &["generic"]))
        .collect()
}

/// Stage 2: `N[.N...] <heading>` blocks; the heading becomes a synthesized
/// question, the lines up to the next numbered heading become the answer.
fn numbered_section_pairs(text: &str) -> Vec<Pair> {
    let matches: Vec<_> = NUMBERED_HEADING.captures_iter(text).collect();
    let mut pairs = Vec::new();

    for (i, caps) in matches.iter().enumerate() {
        let heading = caps.get(2).expect("heading group").as_str().trim();
        let body_start = caps.get(0).expect("match").end();
        let body_end = matches
            .get(i + 1)
            .map(|next| next.get(0).expect("match").start())
            .unwrap_or(text.len());
        let body = text[body_start..body_end].trim();

        if char_len(body) > SECTION_BODY_MIN_LEN {
            pairs.push(Pair::tagged(
                format!("Explain about \"{heading}\""),
                body,
                &["section"],
            ));
        }
    }

    pairs
}

/// Stage 3: ALL-CAPS or Title-Case standalone heading lines, each paired
/// with the body running to the next such heading.
fn heading_pairs(text: &str) -> Vec<Pair> {
    let mut headings: Vec<(usize, usize, &str)> = Vec::new();
    let mut offset = 0;
    for line in text.split('\n') {
        if is_heading_line(line) {
            headings.push((offset, offset + line.len(), line.trim()));
        }
        offset += line.len() + 1;
    }

    let mut pairs = Vec::new();
    for (i, &(_, line_end, heading)) in headings.iter().enumerate() {
        let body_end = headings
            .get(i + 1)
            .map(|&(next_start, _, _)| next_start)
            .unwrap_or(text.len());
        let body = text[line_end.min(body_end)..body_end].trim();

        if char_len(body) > SECTION_BODY_MIN_LEN && body.chars().any(|c| c.is_alphabetic()) {
            pairs.push(Pair::tagged(
                format!("What about {}?", heading.to_lowercase()),
                body,
                &["section"],
            ));
        }
    }

    pairs
}

/// A standalone heading: short, unpunctuated, every word either Title-Case
/// or ALL-CAPS. Bullet and numbered lines are someone else's business.
fn is_heading_line(line: &str) -> bool {
    let line = line.trim();
    if char_len(line) < 3 || char_len(line) > MAX_HEADING_LEN {
        return false;
    }
    let first = line.chars().next().expect("non-empty line");
    if BULLET_GLYPHS.contains(&first) || first.is_ascii_digit() {
        return false;
    }
    if line.ends_with(['.', '!', '?', ',', ';', ':']) {
        return false;
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() || words.len() > MAX_HEADING_WORDS {
        return false;
    }
    words.iter().all(|w| heading_word(w))
}

fn heading_word(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    let rest: Vec<char> = chars.collect();
    let title_case = rest
        .iter()
        .all(|c| c.is_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '\''));
    let all_caps = rest.iter().all(|c| c.is_uppercase() || c.is_ascii_digit());
    title_case || all_caps
}

/// Stage 4: overlapping sentence windows — one prompt sentence followed by
/// the next two as completion. Engaged only on sparse results.
fn sentence_chain_pairs(text: &str) -> Vec<Pair> {
    let sentences: Vec<&str> = split_sentences(text);
    if sentences.len() < SENTENCE_CHAIN_MIN_SENTENCES {
        return Vec::new();
    }

    let mut pairs = Vec::new();
    for window in sentences.windows(3) {
        let prompt = window[0];
        let completion = format!("{}. {}", window[1], window[2]);
        if char_len(prompt) >= SENTENCE_PROMPT_MIN_LEN
            && char_len(&completion) >= SENTENCE_COMPLETION_MIN_LEN
        {
            pairs.push(Pair::tagged(prompt, completion, &["sentence"]));
        }
    }
    pairs
}

fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Stage 5: consecutive bullet list items paired adjacently.
fn list_item_pairs(text: &str) -> Vec<Pair> {
    let mut runs: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        match bullet_item(line) {
            Some(item) => current.push(item),
            None => {
                if current.len() > 1 {
                    runs.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() > 1 {
        runs.push(current);
    }

    runs.iter()
        .flat_map(|run| run.windows(2))
        .filter(|w| char_len(w[0]) > LIST_ITEM_MIN_LEN && char_len(w[1]) > LIST_ITEM_MIN_LEN)
        .map(|w| Pair::tagged(w[0], w[1], &["list"]))
        .collect()
}

fn bullet_item(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let first = trimmed.chars().next()?;
    if !BULLET_GLYPHS.contains(&first) {
        return None;
    }
    let rest = &trimmed[first.len_utf8()..];
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let item = rest.trim();
    (!item.is_empty()).then_some(item)
}

/// Stage 6: interrogative-led sentences ending in `?`, answered by the text
/// that immediately follows, cut at the next paragraph break and bounded to
/// 20–500 characters.
fn implicit_question_pairs(text: &str) -> Vec<Pair> {
    let mut pairs = Vec::new();

    for (start, end) in sentence_spans(text) {
        let sentence = text[start..end].trim();
        if !sentence.ends_with('?') || !leads_with_question_word(sentence) {
            continue;
        }

        let after = &text[end..];
        let segment = match after.find("\n\n") {
            Some(idx) => &after[..idx],
            None => after,
        };
        let mut completion: String = segment.trim().chars().take(QUESTION_COMPLETION_MAX_LEN).collect();
        let trimmed_len = completion.trim_end().len();
        completion.truncate(trimmed_len);

        if char_len(&completion) >= QUESTION_COMPLETION_MIN_LEN {
            pairs.push(Pair::tagged(sentence, completion, &["question"]));
        }
    }

    pairs
}

/// Sentence segments with byte spans; each span includes its run of
/// terminator punctuation.
fn sentence_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        if matches!(c, '.' | '!' | '?') {
            let mut end = i + c.len_utf8();
            while let Some(&(j, c2)) = iter.peek() {
                if matches!(c2, '.' | '!' | '?') {
                    end = j + c2.len_utf8();
                    iter.next();
                } else {
                    break;
                }
            }
            spans.push((start, end));
            start = end;
        }
    }
    if start < text.len() {
        spans.push((start, text.len()));
    }
    spans
}

fn leads_with_question_word(sentence: &str) -> bool {
    sentence
        .split_whitespace()
        .next()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .is_some_and(|w| QUESTION_WORDS.contains(&w.as_str()))
}
