use thiserror::Error;

/// Core error type, covering the ingest and data-exchange boundaries.
///
/// Extraction strategies never return errors — they are total and fall back
/// to empty candidate lists on malformed input. `CoreError` appears only
/// where the caller hands us external material (file bytes, serialized
/// datasets) that can be rejected outright.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Represents a file extension the ingest layer has no handler for.
    #[error("Unsupported file extension: {0}")]
    UnsupportedFile(String),

    /// Represents a failure while extracting text from a binary document.
    #[error("Text extraction failed: {0}")]
    Ingest(String),

    /// Represents imported data that is structurally unusable (e.g. a CSV
    /// without the required columns).
    #[error("Invalid data: {0}")]
    Validation(String),

    /// Represents errors from JSON parsing or serialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
