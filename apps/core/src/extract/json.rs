//! JSON / JSON-Lines extraction with synonym field resolution.

use serde_json::Value;
use tracing::warn;

use crate::models::Pair;

/// Field names accepted for the prompt side, in resolution order.
const PROMPT_FIELDS: [&str; 3] = ["prompt", "question", "input"];

/// Field names accepted for the completion side, in resolution order.
const COMPLETION_FIELDS: [&str; 4] = ["completion", "answer", "output", "response"];

/// Extract candidates from a JSON array or JSON-Lines text.
///
/// Malformed input never raises: the strategy logs and returns an empty
/// list, and one bad JSONL line voids the whole batch (the caller reports
/// "0 pairs extracted"). Entries missing either resolved field are dropped.
pub fn extract(text: &str) -> Vec<Pair> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let records = if trimmed.starts_with('[') {
        match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                warn!("JSON input was not an array of records");
                return Vec::new();
            }
            Err(err) => {
                warn!("JSON parsing failed: {err}");
                return Vec::new();
            }
        }
    } else {
        let mut items = Vec::new();
        for line in trimmed.lines().filter(|l| !l.trim().is_empty()) {
            match serde_json::from_str::<Value>(line) {
                Ok(value) => items.push(value),
                Err(err) => {
                    warn!("JSONL line parsing failed: {err}");
                    return Vec::new();
                }
            }
        }
        items
    };

    records.iter().filter_map(map_record).collect()
}

/// Resolve the first synonym field with a non-empty string value.
fn resolve_field<'a>(value: &'a Value, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .filter_map(|name| value.get(name).and_then(Value::as_str))
        .find(|s| !s.is_empty())
}

fn map_record(value: &Value) -> Option<Pair> {
    let prompt = resolve_field(value, &PROMPT_FIELDS)?;
    let completion = resolve_field(value, &COMPLETION_FIELDS)?;

    let tags = match value.get("tags").and_then(Value::as_array) {
        Some(provided) => provided
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect(),
        None => vec!["json".to_string()],
    };

    Some(Pair::new(prompt, completion, tags))
}
