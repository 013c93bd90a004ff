use serde::{Deserialize, Serialize};

/// Represents a single training example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// The prompt side of the example (question, instruction, context).
    pub prompt: String,
    /// The completion side (answer, response).
    pub completion: String,
    /// Free-form category tags. Order is kept for display but carries no meaning.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Pair {
    /// Create a pair with owned tag strings.
    pub fn new(prompt: impl Into<String>, completion: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            completion: completion.into(),
            tags,
        }
    }

    /// Create a pair from static tag labels.
    pub fn tagged(prompt: impl Into<String>, completion: impl Into<String>, tags: &[&str]) -> Self {
        Self::new(
            prompt,
            completion,
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    /// A pair is valid when both sides are non-empty after trimming.
    /// Invalid pairs may exist in a dataset but are excluded from
    /// validity-gated metrics.
    pub fn is_valid(&self) -> bool {
        !self.prompt.trim().is_empty() && !self.completion.trim().is_empty()
    }
}

/// Summary counts over a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    /// Total number of pairs, valid or not.
    pub total: usize,
    /// Pairs with both fields non-empty after trimming.
    pub valid: usize,
    /// Pairs failing validity (total - valid).
    pub warnings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pair() {
        let pair = Pair::tagged("What is Rust?", "A systems language.", &["faq"]);
        assert!(pair.is_valid());
        assert_eq!(pair.tags, vec!["faq"]);
    }

    #[test]
    fn test_whitespace_only_fields_are_invalid() {
        let pair = Pair::tagged("   ", "A completion.", &[]);
        assert!(!pair.is_valid());

        let pair = Pair::tagged("A prompt", "\n\t", &[]);
        assert!(!pair.is_valid());
    }

    #[test]
    fn test_serde_round_trip() {
        let pair = Pair::tagged("p", "c", &["a", "b"]);
        let json = serde_json::to_string(&pair).expect("serialize");
        let back: Pair = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(pair, back);
    }

    #[test]
    fn test_tags_default_to_empty() {
        let pair: Pair = serde_json::from_str(r#"{"prompt":"p","completion":"c"}"#).expect("parse");
        assert!(pair.tags.is_empty());
    }
}
