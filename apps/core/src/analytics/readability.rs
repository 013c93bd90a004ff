//! Approximate readability over completions.
//!
//! Flesch Reading Ease with a fixed syllables-per-word constant — no real
//! syllable counting happens here, only sentence-length statistics.

use super::report::{Complexity, ReadabilityLevel, ReadabilityMetrics};
use crate::models::Pair;

/// Assumed average syllables per word.
const AVG_SYLLABLES_PER_WORD: f64 = 1.5;

/// Words-per-sentence gates for the coarse complexity label.
const COMPLEX_SENTENCE_LEN: f64 = 20.0;
const MODERATE_SENTENCE_LEN: f64 = 15.0;

/// Analyze readability for a non-empty dataset.
pub fn analyze(pairs: &[Pair]) -> ReadabilityMetrics {
    let avg_sentence_length = pairs
        .iter()
        .map(|p| words_per_sentence(&p.completion))
        .sum::<f64>()
        / pairs.len() as f64;

    let flesch_score =
        206.835 - 1.015 * avg_sentence_length - 84.6 * AVG_SYLLABLES_PER_WORD;

    let complexity = if avg_sentence_length > COMPLEX_SENTENCE_LEN {
        Complexity::Complex
    } else if avg_sentence_length > MODERATE_SENTENCE_LEN {
        Complexity::Moderate
    } else {
        Complexity::Simple
    };

    ReadabilityMetrics {
        avg_sentence_length,
        flesch_score,
        readability_level: level_for(flesch_score),
        complexity,
    }
}

/// Mean words per sentence in one completion; 0 when no sentences exist.
fn words_per_sentence(text: &str) -> f64 {
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();
    if sentences == 0 {
        return 0.0;
    }
    text.split_whitespace().count() as f64 / sentences as f64
}

fn level_for(score: f64) -> ReadabilityLevel {
    if score >= 90.0 {
        ReadabilityLevel::VeryEasy
    } else if score >= 80.0 {
        ReadabilityLevel::Easy
    } else if score >= 70.0 {
        ReadabilityLevel::FairlyEasy
    } else if score >= 60.0 {
        ReadabilityLevel::Standard
    } else if score >= 50.0 {
        ReadabilityLevel::FairlyDifficult
    } else {
        ReadabilityLevel::Difficult
    }
}
