//! Dataset quality scoring.
//!
//! Four sub-scores averaged into an overall grade. All scores live in
//! [0, 100]; the consistency formula is informal by design (100 minus the
//! coefficient of variation of prompt word counts, floored at 0).

use std::collections::HashSet;

use super::report::{Grade, QualityAssessment, QualityScores};
use crate::models::Pair;

/// Minimum prompt length (chars) for a pair to count as adequately sized.
const ADEQUATE_PROMPT_LEN: usize = 10;
/// Minimum completion length (chars) for the same gate.
const ADEQUATE_COMPLETION_LEN: usize = 20;
/// Length-quality score below this threshold raises an issue.
const LENGTH_QUALITY_TARGET: f64 = 80.0;

/// Score a non-empty dataset. The empty case is the caller's to handle —
/// there is no meaningful score for zero pairs.
pub fn assess(pairs: &[Pair]) -> QualityAssessment {
    let n = pairs.len() as f64;

    let complete = pairs.iter().filter(|p| p.is_valid()).count() as f64;
    let completeness = complete / n * 100.0;

    let consistency = consistency_score(pairs);

    let mut seen = HashSet::new();
    let distinct = pairs
        .iter()
        .filter(|p| seen.insert(format!("{}|{}", p.prompt, p.completion)))
        .count() as f64;
    let uniqueness = distinct / n * 100.0;

    let adequate = pairs
        .iter()
        .filter(|p| {
            p.prompt.chars().count() >= ADEQUATE_PROMPT_LEN
                && p.completion.chars().count() >= ADEQUATE_COMPLETION_LEN
        })
        .count() as f64;
    let length_quality = adequate / n * 100.0;

    let scores = QualityScores {
        completeness,
        consistency,
        uniqueness,
        length_quality,
    };
    let overall_score = (completeness + consistency + uniqueness + length_quality) / 4.0;

    QualityAssessment {
        issues: identify_issues(&scores),
        grade: Grade::from_score(overall_score),
        overall_score,
        scores,
    }
}

/// 100 − coefficient-of-variation of prompt word counts (as a percent),
/// floored at 0. Degenerates to 0 when the mean is zero.
fn consistency_score(pairs: &[Pair]) -> f64 {
    let n = pairs.len() as f64;
    let counts: Vec<f64> = pairs
        .iter()
        .map(|p| p.prompt.split_whitespace().count() as f64)
        .collect();
    let mean = counts.iter().sum::<f64>() / n;
    if mean == 0.0 {
        return 0.0;
    }
    let variance = counts.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / n;
    (100.0 - variance.sqrt() / mean * 100.0).max(0.0)
}

fn identify_issues(scores: &QualityScores) -> Vec<String> {
    let mut issues = Vec::new();
    if scores.completeness < 100.0 {
        issues.push("Some pairs have empty fields".to_string());
    }
    if scores.uniqueness < 100.0 {
        issues.push("Dataset contains duplicates".to_string());
    }
    if scores.length_quality < LENGTH_QUALITY_TARGET {
        issues.push("Some responses are too short".to_string());
    }
    issues
}
