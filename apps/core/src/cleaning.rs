//! Read-only cleaning scan.
//!
//! Flags duplicates, short text and empty fields without touching the
//! dataset; the fixes themselves live on [`crate::dataset::Dataset`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::Pair;

/// Prompt or completion below this length counts as short.
const SHORT_TEXT_LEN: usize = 20;

/// Kinds of problems the scan reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    Duplicates,
    ShortText,
    EmptyFields,
}

/// One detected problem with the indices of the pairs it affects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningIssue {
    pub kind: IssueKind,
    pub description: String,
    /// Indices into the scanned dataset, in order.
    pub affected_pairs: Vec<usize>,
    /// Whether a mechanical fix exists (duplicate/empty removal).
    pub can_fix: bool,
}

/// Which optional checks to run. Empty-field detection always runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningOptions {
    pub check_duplicates: bool,
    pub check_length: bool,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            check_duplicates: true,
            check_length: true,
        }
    }
}

/// Scan a dataset for curation problems. Returns an empty list when the
/// dataset is clean.
pub fn scan(pairs: &[Pair], options: &CleaningOptions) -> Vec<CleaningIssue> {
    let mut issues = Vec::new();

    if options.check_duplicates {
        let mut seen = HashSet::new();
        let duplicates: Vec<usize> = pairs
            .iter()
            .enumerate()
            .filter(|(_, p)| !seen.insert(format!("{}|{}", p.prompt, p.completion)))
            .map(|(i, _)| i)
            .collect();

        if !duplicates.is_empty() {
            issues.push(CleaningIssue {
                kind: IssueKind::Duplicates,
                description: format!("Found {} duplicate pair(s)", duplicates.len()),
                affected_pairs: duplicates,
                can_fix: true,
            });
        }
    }

    if options.check_length {
        let short: Vec<usize> = pairs
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                (!p.prompt.is_empty() && p.prompt.chars().count() < SHORT_TEXT_LEN)
                    || (!p.completion.is_empty()
                        && p.completion.chars().count() < SHORT_TEXT_LEN)
            })
            .map(|(i, _)| i)
            .collect();

        if !short.is_empty() {
            issues.push(CleaningIssue {
                kind: IssueKind::ShortText,
                description: format!(
                    "Found {} pair(s) with short text (<{} chars)",
                    short.len(),
                    SHORT_TEXT_LEN
                ),
                affected_pairs: short,
                can_fix: true,
            });
        }
    }

    let empty: Vec<usize> = pairs
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_valid())
        .map(|(i, _)| i)
        .collect();

    if !empty.is_empty() {
        issues.push(CleaningIssue {
            kind: IssueKind::EmptyFields,
            description: format!("Found {} pair(s) with empty fields", empty.len()),
            affected_pairs: empty,
            can_fix: true,
        });
    }

    issues
}
