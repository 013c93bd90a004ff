//! Analytics Engine Tests
//!
//! Report assembly and metric properties over realistic datasets.

use crate::analytics::{DatasetAnalyzer, Grade, InsightKind};
use crate::models::Pair;

fn qa_pair(prompt: &str, completion: &str, tags: &[&str]) -> Pair {
    Pair::tagged(prompt, completion, tags)
}

/// A healthy dataset: complete, unique, consistently sized pairs.
fn healthy_dataset(n: usize) -> Vec<Pair> {
    (0..n)
        .map(|i| {
            qa_pair(
                &format!("What does module {i} of the system handle?"),
                &format!(
                    "Module {i} handles a distinct responsibility, with clear boundaries and documented behavior across releases."
                ),
                &["docs", if i % 2 == 0 { "even" } else { "odd" }],
            )
        })
        .collect()
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn test_empty_dataset_yields_no_report() {
        assert!(DatasetAnalyzer::new().analyze(&[]).is_none());
    }

    #[test]
    fn test_full_report_shape() {
        let report = DatasetAnalyzer::new()
            .analyze(&healthy_dataset(120))
            .expect("report");

        assert_eq!(report.overview.total_pairs, 120);
        assert_eq!(report.overview.unique_tags, 3);
        assert_eq!(report.distribution.histogram.len(), 5);
        assert_eq!(report.trends.len(), 5);
        assert!(!report.insights.is_empty());
    }

    #[test]
    fn test_healthy_dataset_gets_success_insight() {
        let report = DatasetAnalyzer::new()
            .analyze(&healthy_dataset(120))
            .expect("report");

        assert_eq!(report.insights.len(), 1);
        assert_eq!(report.insights[0].kind, InsightKind::Success);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_small_dataset_draws_warnings_and_recommendations() {
        let report = DatasetAnalyzer::new()
            .analyze(&healthy_dataset(8))
            .expect("report");

        assert!(report
            .insights
            .iter()
            .any(|i| i.kind == InsightKind::Warning && i.message.contains("only 8 pairs")));
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.title == "Increase Dataset Size"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let pairs = healthy_dataset(40);
        let analyzer = DatasetAnalyzer::new();

        let first = analyzer.analyze(&pairs).expect("report");
        let second = analyzer.analyze(&pairs).expect("report");
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn test_scores_bounded_for_awkward_datasets() {
        let datasets = vec![
            vec![qa_pair("", "", &[])],
            vec![qa_pair("x", "y", &[]); 10],
            vec![
                qa_pair("a", &"long ".repeat(500), &[]),
                qa_pair(&"word ".repeat(300), "b", &[]),
            ],
            healthy_dataset(3),
        ];

        for pairs in datasets {
            let report = DatasetAnalyzer::new().analyze(&pairs).expect("report");
            let scores = [
                report.quality.scores.completeness,
                report.quality.scores.consistency,
                report.quality.scores.uniqueness,
                report.quality.scores.length_quality,
                report.quality.overall_score,
            ];
            for score in scores {
                assert!(
                    (0.0..=100.0).contains(&score),
                    "score {score} out of bounds for {} pairs",
                    pairs.len()
                );
            }
        }
    }

    #[test]
    fn test_uniqueness_monotone_under_duplicate_removal() {
        let mut pairs = healthy_dataset(10);
        pairs.push(pairs[0].clone());
        pairs.push(pairs[0].clone());

        let analyzer = DatasetAnalyzer::new();
        let before = analyzer
            .analyze(&pairs)
            .expect("report")
            .quality
            .scores
            .uniqueness;

        pairs.pop();
        let after = analyzer
            .analyze(&pairs)
            .expect("report")
            .quality
            .scores
            .uniqueness;

        assert!(after >= before);
    }

    #[test]
    fn test_histogram_conserves_pair_count() {
        for n in [1, 2, 7, 50] {
            let report = DatasetAnalyzer::new()
                .analyze(&healthy_dataset(n))
                .expect("report");
            let binned: usize = report.distribution.histogram.iter().map(|b| b.count).sum();
            assert_eq!(binned, n);
        }
    }

    #[test]
    fn test_balance_score_for_ratio_five() {
        let pairs: Vec<Pair> = (0..10)
            .map(|i| qa_pair(&"p".repeat(20 + i), &"c".repeat((20 + i) * 5), &[]))
            .collect();
        let report = DatasetAnalyzer::new().analyze(&pairs).expect("report");

        assert_eq!(report.balance.balance_score, 100.0);
        assert_eq!(report.balance.advisory, "Well balanced");
    }

    #[test]
    fn test_trend_batches_cover_dataset_in_order() {
        let report = DatasetAnalyzer::new()
            .analyze(&healthy_dataset(23))
            .expect("report");

        let total: usize = report.trends.iter().map(|t| t.count).sum();
        assert_eq!(total, 23);
        for (i, point) in report.trends.iter().enumerate() {
            assert_eq!(point.period, format!("Batch {}", i + 1));
        }
    }

    #[test]
    fn test_duplicated_dataset_grades_worse() {
        let unique = healthy_dataset(20);
        let mut duplicated = healthy_dataset(10);
        duplicated.extend(healthy_dataset(10));

        let analyzer = DatasetAnalyzer::new();
        let unique_score = analyzer.analyze(&unique).expect("report").quality.overall_score;
        let duplicated_score = analyzer
            .analyze(&duplicated)
            .expect("report")
            .quality
            .overall_score;

        assert!(unique_score > duplicated_score);
    }

    #[test]
    fn test_grade_matches_overall_score() {
        let report = DatasetAnalyzer::new()
            .analyze(&healthy_dataset(60))
            .expect("report");

        assert_eq!(
            report.quality.grade,
            Grade::from_score(report.quality.overall_score)
        );
    }
}
