//! Vocabulary and tag diversity.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::report::{DiversityMetrics, WordCount};
use crate::models::Pair;

/// Tokens at or below this length are ignored.
const MIN_TOKEN_LEN: usize = 3;

/// Number of entries in the top-words listing.
const TOP_WORDS_LIMIT: usize = 10;

/// Analyze vocabulary spread across a non-empty dataset.
pub fn analyze(pairs: &[Pair]) -> DiversityMetrics {
    let prompt_tokens: Vec<String> = pairs.iter().flat_map(|p| tokenize(&p.prompt)).collect();
    let completion_tokens: Vec<String> =
        pairs.iter().flat_map(|p| tokenize(&p.completion)).collect();

    let unique_prompt: HashSet<&String> = prompt_tokens.iter().collect();
    let unique_completion: HashSet<&String> = completion_tokens.iter().collect();

    let unique_total = unique_prompt.len() + unique_completion.len();
    let token_total = prompt_tokens.len() + completion_tokens.len();
    let lexical_diversity = if token_total > 0 {
        unique_total as f64 / token_total as f64 * 100.0
    } else {
        0.0
    };

    let mut tag_distribution: BTreeMap<String, usize> = BTreeMap::new();
    for pair in pairs {
        for tag in &pair.tags {
            *tag_distribution.entry(tag.clone()).or_insert(0) += 1;
        }
    }

    let combined = prompt_tokens.iter().chain(completion_tokens.iter());
    let top_words = top_words(combined, TOP_WORDS_LIMIT);

    DiversityMetrics {
        vocabulary_size: unique_total,
        unique_prompt_words: unique_prompt.len(),
        unique_completion_words: unique_completion.len(),
        lexical_diversity,
        tag_distribution,
        top_words,
    }
}

/// Lower-cased whitespace tokens longer than [`MIN_TOKEN_LEN`].
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Most frequent tokens. The sort is stable, so equal counts keep their
/// first-seen order.
fn top_words<'a>(tokens: impl Iterator<Item = &'a String>, limit: usize) -> Vec<WordCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for token in tokens {
        let entry = counts.entry(token.as_str()).or_insert(0);
        if *entry == 0 {
            order.push(token.as_str());
        }
        *entry += 1;
    }

    let mut ranked: Vec<WordCount> = order
        .into_iter()
        .map(|word| WordCount {
            word: word.to_string(),
            count: counts[word],
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}
