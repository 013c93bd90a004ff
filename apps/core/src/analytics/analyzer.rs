//! Dataset analyzer — main orchestrator for the analytics module.
//!
//! Recomputes a full report from a dataset snapshot on every call. There is
//! no caching or invalidation to manage: the report is pure output.

use tracing::info;

use super::report::{AnalysisReport, Overview, TrendPoint};
use super::{balance, distribution, diversity, insights, quality, readability};
use crate::models::Pair;

/// Number of contiguous batches in the trend analysis.
const TREND_CHUNKS: usize = 5;

/// Characters per word, for the rough word estimate.
const CHARS_PER_WORD: f64 = 5.0;

/// Characters per token, for the rough token estimate.
const CHARS_PER_TOKEN: f64 = 4.0;

/// Analytics front end combining all metric computations.
pub struct DatasetAnalyzer;

impl Default for DatasetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a dataset snapshot. Returns `None` for an empty dataset —
    /// "no report available" is a normal outcome, not a fault.
    pub fn analyze(&self, pairs: &[Pair]) -> Option<AnalysisReport> {
        if pairs.is_empty() {
            return None;
        }

        let overview = overview(pairs);
        let quality = quality::assess(pairs);
        let diversity = diversity::analyze(pairs);
        let insights = insights::insights(pairs.len(), &quality, &diversity, &overview);
        let recommendations = insights::recommendations(pairs.len(), &quality, &overview);

        info!(
            "Analysis complete: {} pairs, grade {}",
            pairs.len(),
            quality.grade
        );

        Some(AnalysisReport {
            distribution: distribution::analyze(pairs),
            readability: readability::analyze(pairs),
            balance: balance::analyze(pairs),
            trends: trend_buckets(pairs),
            overview,
            quality,
            diversity,
            insights,
            recommendations,
        })
    }
}

/// Volume statistics. Callers guarantee a non-empty dataset.
pub fn overview(pairs: &[Pair]) -> Overview {
    let n = pairs.len();
    let prompt_chars: usize = pairs.iter().map(|p| p.prompt.chars().count()).sum();
    let completion_chars: usize = pairs.iter().map(|p| p.completion.chars().count()).sum();
    let total_characters = prompt_chars + completion_chars;

    let unique_tags: std::collections::HashSet<&String> =
        pairs.iter().flat_map(|p| p.tags.iter()).collect();

    Overview {
        total_pairs: n,
        total_words: (total_characters as f64 / CHARS_PER_WORD).round() as usize,
        avg_prompt_length: (prompt_chars as f64 / n as f64).round() as usize,
        avg_completion_length: (completion_chars as f64 / n as f64).round() as usize,
        total_characters,
        estimated_tokens: (total_characters as f64 / CHARS_PER_TOKEN).round() as usize,
        unique_tags: unique_tags.len(),
    }
}

/// Split the dataset into up to five contiguous, order-preserving batches
/// and report mean completion length per batch. Insertion order stands in
/// for chronology.
fn trend_buckets(pairs: &[Pair]) -> Vec<TrendPoint> {
    let chunk_size = pairs.len().div_ceil(TREND_CHUNKS);

    pairs
        .chunks(chunk_size)
        .enumerate()
        .map(|(i, chunk)| {
            let total: usize = chunk.iter().map(|p| p.completion.chars().count()).sum();
            TrendPoint {
                period: format!("Batch {}", i + 1),
                avg_length: (total as f64 / chunk.len() as f64).round() as usize,
                count: chunk.len(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pairs(n: usize) -> Vec<Pair> {
        (0..n)
            .map(|i| {
                Pair::tagged(
                    format!("What is concept number {i} about?"),
                    format!("Concept number {i} concerns a specific well-documented topic area."),
                    &["sample"],
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_dataset_has_no_report() {
        let analyzer = DatasetAnalyzer::new();
        assert!(analyzer.analyze(&[]).is_none());
    }

    #[test]
    fn test_report_is_complete() {
        let analyzer = DatasetAnalyzer::new();
        let report = analyzer.analyze(&sample_pairs(10)).expect("report");

        assert_eq!(report.overview.total_pairs, 10);
        assert!(!report.insights.is_empty());
        assert_eq!(report.distribution.histogram.len(), 5);
        assert!(!report.trends.is_empty());
    }

    #[test]
    fn test_overview_counts() {
        let pairs = vec![
            Pair::tagged("abcde", "0123456789", &["x"]),
            Pair::tagged("abcde", "0123456789", &["x", "y"]),
        ];
        let overview = overview(&pairs);

        assert_eq!(overview.total_pairs, 2);
        assert_eq!(overview.total_characters, 30);
        assert_eq!(overview.avg_prompt_length, 5);
        assert_eq!(overview.avg_completion_length, 10);
        assert_eq!(overview.total_words, 6);
        assert_eq!(overview.estimated_tokens, 8);
        assert_eq!(overview.unique_tags, 2);
    }

    #[test]
    fn test_trend_buckets_cover_all_pairs() {
        for n in [1, 4, 5, 7, 23] {
            let buckets = trend_buckets(&sample_pairs(n));
            let covered: usize = buckets.iter().map(|b| b.count).sum();
            assert_eq!(covered, n, "lost pairs for n={n}");
            assert!(buckets.len() <= TREND_CHUNKS);
        }
    }

    #[test]
    fn test_trend_buckets_are_ordered() {
        let buckets = trend_buckets(&sample_pairs(12));

        let periods: Vec<&str> = buckets.iter().map(|b| b.period.as_str()).collect();
        assert_eq!(periods, vec!["Batch 1", "Batch 2", "Batch 3", "Batch 4"]);
    }
}
