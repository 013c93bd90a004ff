//! Near-duplicate collapsing over extraction candidates.
//!
//! Identity is a fuzzy key: the first 50 characters of prompt and
//! completion. Long passages that differ only deep into their text are
//! treated as the same candidate on purpose.

use std::collections::HashSet;

use crate::models::Pair;

/// Characters of each side contributing to the identity key.
const KEY_PREFIX_LEN: usize = 50;

/// Collapse candidates sharing a fuzzy key. Order-preserving; the first
/// occurrence wins.
pub fn dedupe(candidates: Vec<Pair>) -> Vec<Pair> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|pair| seen.insert(fuzzy_key(pair)))
        .collect()
}

fn fuzzy_key(pair: &Pair) -> String {
    let prompt: String = pair.prompt.chars().take(KEY_PREFIX_LEN).collect();
    let completion: String = pair.completion.chars().take(KEY_PREFIX_LEN).collect();
    format!("{prompt}|{completion}")
}
