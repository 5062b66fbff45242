//! Text extraction from uploaded documents.
//!
//! Supports PDF, plain text, and Markdown. Extraction yields the trimmed
//! text plus its word count; format detection is by file extension, decided
//! upstream from the upload's filename.

use pulldown_cmark::{Event, Parser, Tag};
use thiserror::Error;

/// File extensions accepted by the upload endpoint, lowercase with dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".pdf", ".txt", ".md"];

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Type de fichier non supporté: {0}")]
    UnsupportedFormat(String),

    #[error("Échec de l'extraction PDF: {0}")]
    PdfExtraction(String),
}

/// Extracted text plus its whitespace-separated word count.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    pub text: String,
    pub word_count: usize,
}

/// Extract text from a document of the given extension. The extension is
/// matched case-insensitively; unsupported ones are rejected as-is.
pub fn extract_text(bytes: &[u8], extension: &str) -> Result<ExtractedDocument, ExtractionError> {
    let text = match extension.to_lowercase().as_str() {
        ".pdf" => extract_pdf(bytes)?,
        ".txt" => extract_plain_text(bytes),
        ".md" => extract_markdown(bytes),
        _ => return Err(ExtractionError::UnsupportedFormat(extension.to_string())),
    };

    let text = text.trim().to_string();
    let word_count = text.split_whitespace().count();

    Ok(ExtractedDocument { text, word_count })
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::PdfExtraction(e.to_string()))
}

/// Invalid UTF-8 sequences are replaced rather than rejected; uploads are
/// user files of unknown provenance.
fn extract_plain_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Flatten Markdown to plain text: keep text and inline code, turn block
/// ends and explicit breaks into newlines, drop all other markup.
fn extract_markdown(bytes: &[u8]) -> String {
    let source = String::from_utf8_lossy(bytes);
    let mut text = String::new();

    for event in Parser::new(&source) {
        match event {
            Event::Text(chunk) | Event::Code(chunk) => text.push_str(&chunk),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item) => text.push('\n'),
            _ => {}
        }
    }

    text
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
