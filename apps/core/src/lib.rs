//! # PairForge Core
//!
//! Turns unstructured text into normalized training pairs and computes
//! quality/diversity/readability statistics over pair collections.
//!
//! Two independent pipelines share only the [`models::Pair`] shape:
//!
//! - Extraction: raw text → normalize → classify → per-format strategy →
//!   near-duplicate collapsing → pairs ([`extract`]).
//! - Analytics: dataset snapshot → scores, distributions and rule-based
//!   insights in one report ([`analytics`]).
//!
//! Everything is synchronous and pure over its inputs; persistence, UI and
//! transport belong to outside collaborators. They hand the core text (or
//! file bytes, via [`ingest`]) and get pairs and reports back.

pub mod analytics;
pub mod cleaning;
pub mod dataset;
pub mod error;
pub mod exchange;
pub mod extract;
pub mod ingest;
pub mod models;

pub use analytics::{AnalysisReport, DatasetAnalyzer};
pub use dataset::Dataset;
pub use error::CoreError;
pub use extract::{Extraction, FormatClassifier, FormatLabel, PairExtractor};
pub use models::{DatasetStats, Pair};

#[cfg(test)]
mod tests;
