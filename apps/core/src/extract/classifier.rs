//! Input format detection.
//!
//! Classification is an ordered predicate chain — first match wins. The
//! order is part of the contract: a resume that also contains speaker-style
//! lines must still classify as `Cv`, so the rules live in an explicit table
//! rather than buried control flow.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Detected input format, driving extraction strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatLabel {
    /// Resume/CV with named section headers.
    Cv,
    /// `Q: ... A: ...` question/answer lists.
    Faq,
    /// Speaker-turn transcripts (`User:`, `Assistant:`, ...).
    Conversation,
    /// JSON array or JSON-Lines records.
    Json,
    /// Email with `From:`/`To:`/`Subject:` headers.
    Email,
    /// Anything else; handled by the fallback chain.
    Generic,
}

impl FormatLabel {
    /// Returns the wire/display label for the format.
    pub fn label(&self) -> &'static str {
        match self {
            FormatLabel::Cv => "cv",
            FormatLabel::Faq => "faq",
            FormatLabel::Conversation => "conversation",
            FormatLabel::Json => "json",
            FormatLabel::Email => "email",
            FormatLabel::Generic => "generic",
        }
    }
}

impl fmt::Display for FormatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

static CV_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(EDUCATION|WORK EXPERIENCE|RESEARCH EXPERIENCE|SKILLS)\b")
        .expect("Invalid regex: CV section markers")
});

static FAQ_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bQ:\s*[^\n]+?\s*A:").expect("Invalid regex: FAQ marker")
});

static SPEAKER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(User|Human|Customer|Assistant|AI|Agent):")
        .expect("Invalid regex: speaker marker")
});

static EMAIL_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(From|To|Subject):").expect("Invalid regex: email header")
});

/// One entry of the precedence table.
struct FormatRule {
    label: FormatLabel,
    matches: fn(&str) -> bool,
}

/// Ordered format classifier. Total over all strings: the `Generic`
/// fallback always applies.
pub struct FormatClassifier {
    rules: Vec<FormatRule>,
}

impl Default for FormatClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatClassifier {
    /// Build the classifier with the documented precedence order.
    pub fn new() -> Self {
        let rules = vec![
            FormatRule {
                label: FormatLabel::Cv,
                matches: |text| CV_MARKERS.is_match(text),
            },
            FormatRule {
                label: FormatLabel::Faq,
                matches: |text| FAQ_MARKER.is_match(text),
            },
            FormatRule {
                label: FormatLabel::Conversation,
                matches: |text| SPEAKER_MARKER.is_match(text),
            },
            FormatRule {
                label: FormatLabel::Json,
                matches: |text| {
                    let trimmed = text.trim_start();
                    trimmed.starts_with('{') || trimmed.starts_with('[')
                },
            },
            FormatRule {
                label: FormatLabel::Email,
                matches: |text| EMAIL_HEADER.is_match(text),
            },
        ];

        Self { rules }
    }

    /// Classify normalized text. First matching rule wins; `Generic` when
    /// nothing matches.
    pub fn classify(&self, text: &str) -> FormatLabel {
        self.rules
            .iter()
            .find(|rule| (rule.matches)(text))
            .map(|rule| rule.label)
            .unwrap_or(FormatLabel::Generic)
    }

    /// The precedence order, highest priority first.
    pub fn precedence(&self) -> Vec<FormatLabel> {
        let mut order: Vec<FormatLabel> = self.rules.iter().map(|r| r.label).collect();
        order.push(FormatLabel::Generic);
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cv_detection() {
        let classifier = FormatClassifier::new();

        let cv = "JANE DOE\nEDUCATION\nBSc Physics\nWORK EXPERIENCE\nLab tech";
        assert_eq!(classifier.classify(cv), FormatLabel::Cv);

        let skills_only = "Skills\nRust, SQL, Linux";
        assert_eq!(classifier.classify(skills_only), FormatLabel::Cv);
    }

    #[test]
    fn test_faq_detection() {
        let classifier = FormatClassifier::new();

        assert_eq!(
            classifier.classify("Q: What is it? A: A thing."),
            FormatLabel::Faq
        );
        assert_eq!(
            classifier.classify("Q: Multi line?\nA: Yes."),
            FormatLabel::Faq
        );
    }

    #[test]
    fn test_conversation_detection() {
        let classifier = FormatClassifier::new();

        let chat = "User: hello\nAssistant: hi there";
        assert_eq!(classifier.classify(chat), FormatLabel::Conversation);

        let support = "Customer: my order is late\nAgent: let me check";
        assert_eq!(classifier.classify(support), FormatLabel::Conversation);
    }

    #[test]
    fn test_json_detection() {
        let classifier = FormatClassifier::new();

        assert_eq!(classifier.classify("[{\"a\":1}]"), FormatLabel::Json);
        assert_eq!(classifier.classify("  {\"a\":1}"), FormatLabel::Json);
    }

    #[test]
    fn test_email_detection() {
        let classifier = FormatClassifier::new();

        let email = "Subject: Meeting notes\n\nSee attached.";
        assert_eq!(classifier.classify(email), FormatLabel::Email);
    }

    #[test]
    fn test_generic_fallback_is_total() {
        let classifier = FormatClassifier::new();

        for text in ["", "   ", "plain prose with nothing special", "\n\n"] {
            assert_eq!(classifier.classify(text), FormatLabel::Generic);
        }
    }

    #[test]
    fn test_cv_beats_conversation() {
        let classifier = FormatClassifier::new();

        let ambiguous = "EDUCATION\nBSc\nUser: something speaker-like";
        assert_eq!(classifier.classify(ambiguous), FormatLabel::Cv);
    }

    #[test]
    fn test_faq_beats_conversation() {
        let classifier = FormatClassifier::new();

        let ambiguous = "Q: who said this? A: the User: marker below is later";
        assert_eq!(classifier.classify(ambiguous), FormatLabel::Faq);
    }

    #[test]
    fn test_precedence_order() {
        let classifier = FormatClassifier::new();

        assert_eq!(
            classifier.precedence(),
            vec![
                FormatLabel::Cv,
                FormatLabel::Faq,
                FormatLabel::Conversation,
                FormatLabel::Json,
                FormatLabel::Email,
                FormatLabel::Generic,
            ]
        );
    }
}
