//! File ingest: turns uploaded file bytes into raw text.
//! Supports: TXT, MD, CSV, JSON, JSONL, PDF, DOCX.
//!
//! Output is handed to the extraction pipeline untouched — blank lines are
//! meaningful to the generic strategy, so no cleanup happens here.

use tracing::{info, warn};

use crate::error::CoreError;

/// Extract text content from file bytes based on the file extension.
pub fn extract_text(file_name: &str, file_data: &[u8]) -> Result<String, CoreError> {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    info!("Ingesting file: {} (type: {})", file_name, extension);

    match extension.as_str() {
        // Plain text formats - direct UTF-8 conversion
        "txt" | "md" | "csv" | "json" | "jsonl" => String::from_utf8(file_data.to_vec())
            .map_err(|e| CoreError::Ingest(format!("Invalid UTF-8 content: {e}"))),

        "pdf" => extract_pdf_text(file_data),

        "docx" | "doc" => extract_docx_text(file_data),

        _ => Err(CoreError::UnsupportedFile(extension)),
    }
}

fn extract_pdf_text(file_data: &[u8]) -> Result<String, CoreError> {
    match pdf_extract::extract_text_from_mem(file_data) {
        Ok(text) => {
            info!("PDF ingest successful: {} characters", text.len());
            Ok(text)
        }
        Err(e) => {
            warn!("PDF ingest failed: {}", e);
            Err(CoreError::Ingest(format!("Failed to extract PDF text: {e}")))
        }
    }
}

fn extract_docx_text(file_data: &[u8]) -> Result<String, CoreError> {
    let docx = docx_rs::read_docx(file_data).map_err(|e| {
        warn!("DOCX ingest failed: {}", e);
        CoreError::Ingest(format!("Failed to read DOCX document: {e}"))
    })?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let text: String = para
                .children
                .iter()
                .filter_map(|pc| match pc {
                    docx_rs::ParagraphChild::Run(run) => Some(
                        run.children
                            .iter()
                            .filter_map(|rc| match rc {
                                docx_rs::RunChild::Text(t) => Some(t.text.clone()),
                                _ => None,
                            })
                            .collect::<Vec<_>>()
                            .join(""),
                    ),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("");

            if !text.trim().is_empty() {
                paragraphs.push(text);
            }
        }
    }

    // Paragraph boundaries become blank lines so downstream paragraph
    // pairing still sees them.
    let text = paragraphs.join("\n\n");
    info!("DOCX ingest successful: {} characters", text.len());
    Ok(text)
}
