//! Email extraction: subject line plus first body block.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::Pair;

static SUBJECT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bSubject:\s*([^\n]+)").expect("Invalid regex: subject line")
});

/// Extract a single candidate from an email: the `Subject:` line becomes
/// the prompt context, everything after the first blank line becomes the
/// completion. Both parts are required.
pub fn extract(text: &str) -> Vec<Pair> {
    let subject = SUBJECT_LINE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim());

    let body = text.find("\n\n").map(|idx| text[idx + 2..].trim());

    match (subject, body) {
        (Some(subject), Some(body)) if !subject.is_empty() && !body.is_empty() => {
            vec![Pair::tagged(
                format!("Email about: {subject}"),
                body,
                &["email"],
            )]
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_subject_and_body() {
        let text = "From: a@example.com\nTo: b@example.com\nSubject: Quarterly review\n\nThe review is scheduled for Friday.\nPlease prepare your slides.";
        let pairs = extract(text);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].prompt, "Email about: Quarterly review");
        assert!(pairs[0].completion.starts_with("The review is scheduled"));
        assert_eq!(pairs[0].tags, vec!["email"]);
    }

    #[test]
    fn test_body_spans_remaining_blocks() {
        let text = "Subject: Notes\n\nFirst block.\n\nSecond block.";
        let pairs = extract(text);

        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].completion.contains("First block."));
        assert!(pairs[0].completion.contains("Second block."));
    }

    #[test]
    fn test_missing_body_yields_nothing() {
        assert!(extract("Subject: Lone subject line").is_empty());
    }

    #[test]
    fn test_missing_subject_yields_nothing() {
        assert!(extract("From: a@example.com\n\nBody without a subject.").is_empty());
    }
}
