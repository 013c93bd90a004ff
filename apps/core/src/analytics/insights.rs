//! Rule-based insight and recommendation generation.
//!
//! Each rule independently contributes at most one entry. The insight list
//! is never empty: when no warning fires, a single success insight stands
//! in.

use super::report::{
    DiversityMetrics, Insight, InsightKind, Overview, Priority, QualityAssessment, Recommendation,
};

/// Datasets below this size get a size warning.
const SMALL_DATASET: usize = 50;
/// Uniqueness below this raises a duplicate notice.
const UNIQUENESS_TARGET: f64 = 95.0;
/// Lexical diversity below this percentage raises a vocabulary warning.
const DIVERSITY_TARGET: f64 = 30.0;
/// Mean completion length below this raises a short-response warning.
const COMPLETION_LENGTH_TARGET: usize = 50;

/// Datasets below this size get a growth recommendation.
const RECOMMENDED_SIZE: usize = 100;
/// Overall quality below this gets an improvement recommendation.
const QUALITY_TARGET: f64 = 70.0;
/// Fewer distinct tags than this gets a tagging recommendation.
const RECOMMENDED_TAGS: usize = 3;

/// Generate observations about the dataset.
pub fn insights(
    total_pairs: usize,
    quality: &QualityAssessment,
    diversity: &DiversityMetrics,
    overview: &Overview,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if total_pairs < SMALL_DATASET {
        insights.push(Insight {
            kind: InsightKind::Warning,
            message: format!(
                "Your dataset has only {total_pairs} pairs. Consider adding at least 50-100 pairs for better model training."
            ),
        });
    }

    if quality.scores.uniqueness < UNIQUENESS_TARGET {
        insights.push(Insight {
            kind: InsightKind::Info,
            message: "Found duplicate pairs. Run the cleaning scan to locate them.".to_string(),
        });
    }

    if diversity.lexical_diversity < DIVERSITY_TARGET {
        insights.push(Insight {
            kind: InsightKind::Warning,
            message: format!(
                "Low vocabulary diversity ({:.2}%). Try adding more varied examples.",
                diversity.lexical_diversity
            ),
        });
    }

    if overview.avg_completion_length < COMPLETION_LENGTH_TARGET {
        insights.push(Insight {
            kind: InsightKind::Warning,
            message:
                "Average completion length is quite short. Consider adding more detailed responses."
                    .to_string(),
        });
    }

    if insights.is_empty() {
        insights.push(Insight {
            kind: InsightKind::Success,
            message: "Your dataset looks great! It's well-balanced and ready for training."
                .to_string(),
        });
    }

    insights
}

/// Generate actionable curation recommendations.
pub fn recommendations(
    total_pairs: usize,
    quality: &QualityAssessment,
    overview: &Overview,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if total_pairs < RECOMMENDED_SIZE {
        recommendations.push(Recommendation {
            priority: Priority::High,
            title: "Increase Dataset Size".to_string(),
            description: format!(
                "Add {} more training pairs for better model performance.",
                RECOMMENDED_SIZE - total_pairs
            ),
            action: "Extract pairs from additional source material.".to_string(),
        });
    }

    if quality.overall_score < QUALITY_TARGET {
        recommendations.push(Recommendation {
            priority: Priority::High,
            title: "Improve Data Quality".to_string(),
            description: format!(
                "Your quality score is {}%. Focus on completeness and consistency.",
                quality.overall_score.round() as i64
            ),
            action: "Run the cleaning scan and review flagged pairs.".to_string(),
        });
    }

    if overview.unique_tags < RECOMMENDED_TAGS {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            title: "Add More Tags".to_string(),
            description: "Tags help organize and analyze your dataset.".to_string(),
            action: "Edit pairs and add relevant category tags.".to_string(),
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::report::{Grade, QualityScores};
    use std::collections::BTreeMap;

    fn quality(uniqueness: f64, overall: f64) -> QualityAssessment {
        QualityAssessment {
            scores: QualityScores {
                completeness: 100.0,
                consistency: 100.0,
                uniqueness,
                length_quality: 100.0,
            },
            overall_score: overall,
            grade: Grade::from_score(overall),
            issues: vec![],
        }
    }

    fn diversity(lexical: f64) -> DiversityMetrics {
        DiversityMetrics {
            vocabulary_size: 100,
            unique_prompt_words: 50,
            unique_completion_words: 50,
            lexical_diversity: lexical,
            tag_distribution: BTreeMap::new(),
            top_words: vec![],
        }
    }

    fn overview(avg_completion: usize, unique_tags: usize) -> Overview {
        Overview {
            total_pairs: 100,
            total_words: 1000,
            avg_prompt_length: 40,
            avg_completion_length: avg_completion,
            total_characters: 10_000,
            estimated_tokens: 2500,
            unique_tags,
        }
    }

    #[test]
    fn test_small_dataset_warning() {
        let result = insights(10, &quality(100.0, 90.0), &diversity(50.0), &overview(80, 5));

        assert!(result
            .iter()
            .any(|i| i.kind == InsightKind::Warning && i.message.contains("only 10 pairs")));
    }

    #[test]
    fn test_duplicate_notice() {
        let result = insights(100, &quality(90.0, 90.0), &diversity(50.0), &overview(80, 5));

        assert!(result
            .iter()
            .any(|i| i.kind == InsightKind::Info && i.message.contains("duplicate")));
    }

    #[test]
    fn test_low_diversity_warning() {
        let result = insights(100, &quality(100.0, 90.0), &diversity(12.5), &overview(80, 5));

        assert!(result.iter().any(|i| i.message.contains("12.50%")));
    }

    #[test]
    fn test_short_completion_warning() {
        let result = insights(100, &quality(100.0, 90.0), &diversity(50.0), &overview(30, 5));

        assert!(result.iter().any(|i| i.message.contains("quite short")));
    }

    #[test]
    fn test_success_insight_when_nothing_fires() {
        let result = insights(100, &quality(100.0, 90.0), &diversity(50.0), &overview(80, 5));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kind, InsightKind::Success);
    }

    #[test]
    fn test_insights_never_empty() {
        for (n, uniq, lex, avg) in [(10, 80.0, 10.0, 20), (100, 100.0, 50.0, 80)] {
            let result = insights(n, &quality(uniq, 90.0), &diversity(lex), &overview(avg, 5));
            assert!(!result.is_empty());
        }
    }

    #[test]
    fn test_size_recommendation() {
        let result = recommendations(40, &quality(100.0, 90.0), &overview(80, 5));

        let size = result.iter().find(|r| r.title == "Increase Dataset Size");
        let size = size.expect("size recommendation");
        assert_eq!(size.priority, Priority::High);
        assert!(size.description.contains("Add 60 more"));
    }

    #[test]
    fn test_quality_recommendation() {
        let result = recommendations(200, &quality(100.0, 55.4), &overview(80, 5));

        assert!(result
            .iter()
            .any(|r| r.title == "Improve Data Quality" && r.description.contains("55%")));
    }

    #[test]
    fn test_tag_recommendation() {
        let result = recommendations(200, &quality(100.0, 90.0), &overview(80, 1));

        assert!(result
            .iter()
            .any(|r| r.title == "Add More Tags" && r.priority == Priority::Medium));
    }

    #[test]
    fn test_healthy_dataset_needs_nothing() {
        assert!(recommendations(200, &quality(100.0, 90.0), &overview(80, 5)).is_empty());
    }
}
