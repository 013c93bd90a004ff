//! Completion-to-prompt length balance.

use super::report::BalanceMetrics;
use crate::models::Pair;

/// Analyze the mean completion:prompt character ratio for a non-empty
/// dataset. Empty sides count as length 1 so the ratio stays defined.
pub fn analyze(pairs: &[Pair]) -> BalanceMetrics {
    let avg_ratio = pairs
        .iter()
        .map(|p| {
            let prompt_len = p.prompt.chars().count().max(1) as f64;
            let completion_len = p.completion.chars().count().max(1) as f64;
            completion_len / prompt_len
        })
        .sum::<f64>()
        / pairs.len() as f64;

    let advisory = if avg_ratio < 2.0 {
        "Completions are too short"
    } else if avg_ratio > 10.0 {
        "Completions might be too long"
    } else {
        "Well balanced"
    };

    BalanceMetrics {
        avg_completion_to_prompt_ratio: avg_ratio,
        balance_score: score_for(avg_ratio),
        advisory: advisory.to_string(),
    }
}

/// Banded score; the ideal ratio sits between 3 and 7.
fn score_for(ratio: f64) -> f64 {
    if (3.0..=7.0).contains(&ratio) {
        100.0
    } else if (2.0..=10.0).contains(&ratio) {
        80.0
    } else if (1.5..=15.0).contains(&ratio) {
        60.0
    } else {
        40.0
    }
}
