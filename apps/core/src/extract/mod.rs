//! # Extraction Pipeline
//!
//! Turns a raw text blob into deduplicated training pairs.
//! Flow: normalize → classify (unless the caller forces a format) →
//! run the matching strategy → collapse near-duplicates.
//!
//! ## Components
//! - `normalizer`: whitespace/artifact cleanup before any matching
//! - `classifier`: ordered-predicate format detection
//! - `cv`, `faq`, `conversation`, `json`, `email`, `generic`: one strategy
//!   per format label
//! - `dedupe`: fuzzy-key near-duplicate collapsing

pub mod classifier;
pub mod conversation;
pub mod cv;
pub mod dedupe;
pub mod email;
pub mod faq;
pub mod generic;
pub mod json;
pub mod normalizer;

pub use classifier::{FormatClassifier, FormatLabel};
pub use dedupe::dedupe;
pub use normalizer::normalize;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::Pair;

/// Result of one extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    /// The format the strategies ran under (detected or forced).
    pub format: FormatLabel,
    /// Deduplicated pairs, in discovery order.
    pub pairs: Vec<Pair>,
}

/// Extraction pipeline front end.
///
/// Every call is a pure function of its arguments; the struct only carries
/// the prebuilt classifier table.
pub struct PairExtractor {
    classifier: FormatClassifier,
}

impl Default for PairExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PairExtractor {
    /// Create an extractor with the standard format precedence.
    pub fn new() -> Self {
        Self {
            classifier: FormatClassifier::new(),
        }
    }

    /// Normalize, auto-detect the format, extract and deduplicate.
    pub fn extract(&self, text: &str) -> Extraction {
        let normalized = normalizer::normalize(text);
        let format = self.classifier.classify(&normalized);
        self.run(&normalized, format)
    }

    /// Same as [`extract`](Self::extract) but with the caller's explicit
    /// format; classification is skipped entirely.
    pub fn extract_as(&self, text: &str, format: FormatLabel) -> Extraction {
        let normalized = normalizer::normalize(text);
        self.run(&normalized, format)
    }

    fn run(&self, normalized: &str, format: FormatLabel) -> Extraction {
        let candidates = match format {
            FormatLabel::Cv => cv::extract(normalized),
            FormatLabel::Faq => faq::extract(normalized),
            FormatLabel::Conversation => conversation::extract(normalized),
            FormatLabel::Json => json::extract(normalized),
            FormatLabel::Email => email::extract(normalized),
            FormatLabel::Generic => generic::extract(normalized),
        };

        let found = candidates.len();
        let pairs = dedupe::dedupe(candidates);
        info!(
            "Extraction complete: format={}, {} candidates, {} kept",
            format,
            found,
            pairs.len()
        );

        Extraction { format, pairs }
    }
}
