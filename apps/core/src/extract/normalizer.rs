//! Text normalization pass applied before any pattern matching.
//!
//! Collapses whitespace, removes page-number and header/footer artifacts
//! left behind by document extraction, merges hyphenated line breaks and
//! strips stray leading characters. Line order is never changed.

use regex::Regex;
use std::sync::LazyLock;

static HORIZONTAL_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("Invalid regex: horizontal whitespace"));

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid regex: newline runs"));

static PAGE_NUMBER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,4}$").expect("Invalid regex: page number line"));

static HYPHEN_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)-\n(\w)").expect("Invalid regex: hyphenated break"));

/// Glyphs that introduce list items and must survive normalization.
const BULLET_GLYPHS: [char; 3] = ['•', '-', '*'];

/// Normalize raw input text. Pure and idempotent; empty in, empty out.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = HORIZONTAL_WS.replace_all(text, " ");
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");

    // Drop page-number-only lines, then lines immediately repeated by the
    // next line (header/footer artifacts). The look-ahead keeps the last
    // occurrence so surrounding context stays attached to it.
    let lines: Vec<&str> = text.split('\n').collect();
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if PAGE_NUMBER_LINE.is_match(trimmed) {
            continue;
        }
        if !trimmed.is_empty() {
            if let Some(next) = lines.get(i + 1) {
                if next.trim() == trimmed {
                    continue;
                }
            }
        }
        kept.push(line);
    }
    let text = kept.join("\n");

    let text = HYPHEN_BREAK.replace_all(&text, "${1}${2}");

    let text = text
        .split('\n')
        .map(|line| strip_stray_lead(line).trim())
        .collect::<Vec<_>>()
        .join("\n");

    // Dropped lines can leave fresh blank runs behind; collapse once more so
    // a second normalize pass is a no-op.
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Strip a single stray leading character from a line.
///
/// Recognized bullet glyphs and digits are kept (list-item extraction needs
/// them). The strip only fires when alphanumeric content follows, so a line
/// of punctuation is left alone and repeated passes reach a fixed point.
fn strip_stray_lead(line: &str) -> &str {
    let trimmed = line.trim_start();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return line;
    };
    if first.is_alphanumeric() || first == '_' || BULLET_GLYPHS.contains(&first) {
        return line;
    }
    let rest = chars.as_str().trim_start();
    if rest.chars().next().is_some_and(|c| c.is_alphanumeric()) {
        rest
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_horizontal_whitespace() {
        assert_eq!(normalize("a   b\t\tc"), "a b c");
    }

    #[test]
    fn test_collapses_newline_runs() {
        assert_eq!(normalize("one\n\n\n\ntwo"), "one\n\ntwo");
    }

    #[test]
    fn test_strips_page_number_lines() {
        let text = "First paragraph.\n\n42\n\nSecond paragraph.";
        assert_eq!(normalize(text), "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn test_strips_repeated_header_lines() {
        let text = "Annual Report\nAnnual Report\nContents follow.";
        assert_eq!(normalize(text), "Annual Report\nContents follow.");
    }

    #[test]
    fn test_merges_hyphenated_line_breaks() {
        assert_eq!(normalize("compre-\nhensive"), "comprehensive");
        // A dash before a bullet line is not a word split.
        assert_eq!(normalize("trailing-\n- item"), "trailing-\n- item");
    }

    #[test]
    fn test_strips_stray_leading_characters() {
        assert_eq!(normalize("§ Section one"), "Section one");
        assert_eq!(normalize("~Heading"), "Heading");
    }

    #[test]
    fn test_preserves_bullet_glyphs() {
        assert_eq!(normalize("• first\n- second\n* third"), "• first\n- second\n* third");
        assert_eq!(normalize("1. numbered"), "1. numbered");
    }

    #[test]
    fn test_trims_lines_and_text() {
        assert_eq!(normalize("  padded line  \n  another  "), "padded line\nanother");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\n  "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "a   b\n\n\n\nc",
            "First.\n\n12\n\nSecond.",
            "Header\nHeader\nbody text",
            "hy-\nphen and § stray\n\n\n• bullet",
            "~ ~ not content",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_line_order_preserved() {
        let text = "beta\nalpha\ngamma";
        assert_eq!(normalize(text), "beta\nalpha\ngamma");
    }
}
