//! Dataset import and export.
//!
//! Three serializations: a JSON array of `{prompt, completion, tags}`,
//! JSON-Lines of `{prompt, completion}`, and CSV with a `prompt,completion`
//! header and RFC-4180 quote-doubling. Import accepts the same three plus
//! pasted text blocks.

use serde_json::{json, Value};
use tracing::info;

use crate::error::CoreError;
use crate::models::Pair;

/// Supported export serializations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    JsonLines,
    Csv,
}

/// Pre-export filtering, mirroring the export dialog switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Drop exact duplicates (first occurrence wins).
    pub remove_duplicates: bool,
    /// Drop pairs with an empty side.
    pub validate: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            remove_duplicates: false,
            validate: true,
        }
    }
}

/// Serialize a dataset in the requested format.
pub fn export(
    pairs: &[Pair],
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<String, CoreError> {
    let prepared = prepare(pairs, options);
    info!(
        "Exporting {} of {} pairs as {:?}",
        prepared.len(),
        pairs.len(),
        format
    );
    match format {
        ExportFormat::Json => to_json(&prepared),
        ExportFormat::JsonLines => to_jsonl(&prepared),
        ExportFormat::Csv => Ok(to_csv(&prepared)),
    }
}

fn prepare<'a>(pairs: &'a [Pair], options: &ExportOptions) -> Vec<&'a Pair> {
    let mut seen = std::collections::HashSet::new();
    pairs
        .iter()
        .filter(|p| !options.validate || p.is_valid())
        .filter(|p| {
            !options.remove_duplicates || seen.insert(format!("{}|{}", p.prompt, p.completion))
        })
        .collect()
}

fn to_json(pairs: &[&Pair]) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(pairs)?)
}

fn to_jsonl(pairs: &[&Pair]) -> Result<String, CoreError> {
    let lines: Result<Vec<String>, serde_json::Error> = pairs
        .iter()
        .map(|p| serde_json::to_string(&json!({ "prompt": p.prompt, "completion": p.completion })))
        .collect();
    Ok(lines?.join("\n"))
}

fn to_csv(pairs: &[&Pair]) -> String {
    let mut content = String::from("prompt,completion\n");
    let rows: Vec<String> = pairs
        .iter()
        .map(|p| format!("\"{}\",\"{}\"", csv_escape(&p.prompt), csv_escape(&p.completion)))
        .collect();
    content.push_str(&rows.join("\n"));
    content
}

fn csv_escape(field: &str) -> String {
    field.replace('"', "\"\"")
}

/// Import a JSON array or JSON-Lines document. Entries need non-empty
/// `prompt` and `completion`; `tags` is optional.
pub fn from_json(content: &str) -> Result<Vec<Pair>, CoreError> {
    let trimmed = content.trim();
    let records: Vec<Value> = if trimmed.starts_with('[') {
        match serde_json::from_str::<Value>(trimmed)? {
            Value::Array(items) => items,
            _ => return Err(CoreError::Validation("Expected a JSON array".to_string())),
        }
    } else {
        trimmed
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(serde_json::from_str::<Value>)
            .collect::<Result<_, _>>()?
    };

    let pairs: Vec<Pair> = records
        .iter()
        .filter_map(|item| {
            let prompt = item.get("prompt").and_then(Value::as_str)?;
            let completion = item.get("completion").and_then(Value::as_str)?;
            if prompt.is_empty() || completion.is_empty() {
                return None;
            }
            let tags = item
                .get("tags")
                .and_then(Value::as_array)
                .map(|a| a.iter().filter_map(Value::as_str).map(String::from).collect())
                .unwrap_or_default();
            Some(Pair::new(prompt, completion, tags))
        })
        .collect();

    info!("Imported {} pairs from JSON", pairs.len());
    Ok(pairs)
}

/// Header names accepted for the prompt column.
const CSV_PROMPT_HEADERS: [&str; 2] = ["prompt", "input"];

/// Header names accepted for the completion column.
const CSV_COMPLETION_HEADERS: [&str; 3] = ["completion", "output", "response"];

/// Import CSV content. The header row must name a prompt column and a
/// completion column (synonyms allowed); rows too short for both columns
/// are skipped.
pub fn from_csv(content: &str) -> Result<Vec<Pair>, CoreError> {
    let mut lines = content.lines().filter(|l| !l.trim().is_empty());
    let header = lines
        .next()
        .ok_or_else(|| CoreError::Validation("CSV content is empty".to_string()))?;

    let columns: Vec<String> = parse_csv_line(header)
        .into_iter()
        .map(|h| h.to_lowercase())
        .collect();
    let prompt_index = find_column(&columns, &CSV_PROMPT_HEADERS);
    let completion_index = find_column(&columns, &CSV_COMPLETION_HEADERS);

    let (Some(prompt_index), Some(completion_index)) = (prompt_index, completion_index) else {
        return Err(CoreError::Validation(
            "CSV must have prompt/input and completion/output/response columns".to_string(),
        ));
    };

    let pairs: Vec<Pair> = lines
        .filter_map(|line| {
            let values = parse_csv_line(line);
            if values.len() > prompt_index.max(completion_index) {
                Some(Pair::new(
                    values[prompt_index].clone(),
                    values[completion_index].clone(),
                    Vec::new(),
                ))
            } else {
                None
            }
        })
        .collect();

    info!("Imported {} pairs from CSV", pairs.len());
    Ok(pairs)
}

fn find_column(columns: &[String], names: &[&str]) -> Option<usize> {
    columns
        .iter()
        .position(|c| names.iter().any(|n| c.contains(n)))
}

/// Split one CSV line into fields, honoring quotes and doubled-quote
/// escapes. Multi-line quoted fields are not supported.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Import pasted text: blank-line-separated blocks, first line as prompt,
/// remaining lines joined as the completion. Blocks with fewer than two
/// lines are skipped.
pub fn from_text_blocks(content: &str) -> Vec<Pair> {
    let pairs: Vec<Pair> = content
        .split("\n\n")
        .filter_map(|block| {
            let lines: Vec<&str> = block
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();
            if lines.len() >= 2 {
                Some(Pair::new(lines[0], lines[1..].join(" "), Vec::new()))
            } else {
                None
            }
        })
        .collect();

    info!("Imported {} pairs from pasted text", pairs.len());
    pairs
}
