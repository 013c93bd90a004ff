//! # Dataset Analytics Engine
//!
//! Quality, diversity, readability and balance metrics over a pair
//! collection, plus rule-based insights to guide curation. Everything here
//! is a pure function of a dataset snapshot; reports are recomputed fresh
//! on every request.
//!
//! ## Components
//! - `quality`: completeness/consistency/uniqueness/length scoring + grade
//! - `diversity`: vocabulary size, lexical diversity, tag spread, top words
//! - `distribution`: length statistics and histogram binning
//! - `readability`: approximated Flesch Reading Ease
//! - `balance`: completion:prompt ratio banding
//! - `insights`: warning/recommendation rules
//! - `report`: output data structures
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod balance;
pub mod distribution;
pub mod diversity;
pub mod insights;
pub mod quality;
pub mod readability;
pub mod report;

pub use analyzer::DatasetAnalyzer;
pub use report::{
    AnalysisReport, BalanceMetrics, Complexity, DistributionStats, DiversityMetrics, Grade,
    HistogramBin, Insight, InsightKind, LengthDistribution, Overview, Priority,
    QualityAssessment, QualityScores, ReadabilityLevel, ReadabilityMetrics, Recommendation,
    TrendPoint, WordCount,
};
