//! Analysis report records.
//!
//! A report is a derived, read-only snapshot recomputed from scratch on
//! every request; none of these records has independent identity or a
//! persisted lifecycle.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Basic volume statistics over a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    /// Number of pairs, valid or not.
    pub total_pairs: usize,
    /// Approximate word count (characters / 5).
    pub total_words: usize,
    /// Mean prompt length in characters, rounded.
    pub avg_prompt_length: usize,
    /// Mean completion length in characters, rounded.
    pub avg_completion_length: usize,
    /// Characters across prompts and completions.
    pub total_characters: usize,
    /// Rough token estimate (characters / 4).
    pub estimated_tokens: usize,
    /// Count of distinct tags in use.
    pub unique_tags: usize,
}

/// The four quality sub-scores, each in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    /// Share of pairs with both fields non-empty after trimming.
    pub completeness: f64,
    /// 100 minus the coefficient of variation of prompt word counts,
    /// floored at 0. Low variance reads as high consistency.
    pub consistency: f64,
    /// Share of distinct exact `prompt|completion` keys.
    pub uniqueness: f64,
    /// Share of pairs with prompt ≥ 10 and completion ≥ 20 characters.
    pub length_quality: f64,
}

/// Letter grade bands over the overall quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Band an overall score into a grade.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::APlus
        } else if score >= 80.0 {
            Grade::A
        } else if score >= 70.0 {
            Grade::B
        } else if score >= 60.0 {
            Grade::C
        } else {
            Grade::D
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }

    /// Fixed display label for the band.
    pub fn message(&self) -> &'static str {
        match self {
            Grade::APlus => "Excellent!",
            Grade::A => "Great!",
            Grade::B => "Good",
            Grade::C => "Fair",
            Grade::D => "Needs Work",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Quality scoring output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityAssessment {
    pub scores: QualityScores,
    /// Unweighted mean of the four sub-scores.
    pub overall_score: f64,
    pub grade: Grade,
    /// One human-readable entry per sub-score below its target.
    pub issues: Vec<String>,
}

/// A word with its frequency, for top-word listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Vocabulary and tag spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiversityMetrics {
    /// Distinct prompt tokens plus distinct completion tokens.
    pub vocabulary_size: usize,
    pub unique_prompt_words: usize,
    pub unique_completion_words: usize,
    /// Unique over total tokens, as a percentage.
    pub lexical_diversity: f64,
    /// Pairs carrying each tag.
    pub tag_distribution: BTreeMap<String, usize>,
    /// Most frequent tokens, ties kept in first-seen order.
    pub top_words: Vec<WordCount>,
}

/// Summary statistics over one length sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionStats {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub median: usize,
    /// Most frequent value; smallest wins on ties.
    pub mode: usize,
    pub range: usize,
}

/// One equal-width histogram bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Display label, `"<lo>-<hi>"` with rounded edges.
    pub range: String,
    pub count: usize,
}

/// Prompt and completion length distributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthDistribution {
    pub prompt: DistributionStats,
    pub completion: DistributionStats,
    /// Equal-width bins over completion lengths.
    pub histogram: Vec<HistogramBin>,
}

/// Qualitative Flesch bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityLevel {
    VeryEasy,
    Easy,
    FairlyEasy,
    Standard,
    FairlyDifficult,
    Difficult,
}

impl ReadabilityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ReadabilityLevel::VeryEasy => "Very Easy",
            ReadabilityLevel::Easy => "Easy",
            ReadabilityLevel::FairlyEasy => "Fairly Easy",
            ReadabilityLevel::Standard => "Standard",
            ReadabilityLevel::FairlyDifficult => "Fairly Difficult",
            ReadabilityLevel::Difficult => "Difficult",
        }
    }
}

/// Coarse sentence-length complexity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

/// Approximate readability over completions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityMetrics {
    /// Mean words per sentence across completions.
    pub avg_sentence_length: f64,
    /// Flesch Reading Ease with a fixed 1.5 syllables/word assumption.
    pub flesch_score: f64,
    pub readability_level: ReadabilityLevel,
    pub complexity: Complexity,
}

/// Completion-to-prompt length balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceMetrics {
    /// Mean per-pair completion:prompt character ratio.
    pub avg_completion_to_prompt_ratio: f64,
    /// Banded score: 100 / 80 / 60 / 40.
    pub balance_score: f64,
    /// Human-readable verdict on the ratio.
    pub advisory: String,
}

/// One contiguous batch in the trend analysis. Assumes insertion order
/// correlates with chronology — the caller guarantees that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub period: String,
    /// Mean completion length within the batch, rounded.
    pub avg_length: usize,
    pub count: usize,
}

/// Insight severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Warning,
    Info,
    Success,
}

/// A human-readable observation about the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
}

/// Recommendation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

/// An actionable curation recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action: String,
}

/// Complete analysis snapshot for a non-empty dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overview: Overview,
    pub quality: QualityAssessment,
    pub diversity: DiversityMetrics,
    pub distribution: LengthDistribution,
    pub readability: ReadabilityMetrics,
    pub balance: BalanceMetrics,
    pub trends: Vec<TrendPoint>,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<Recommendation>,
}
