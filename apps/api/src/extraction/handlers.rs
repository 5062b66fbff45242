//! Axum route handlers for document text extraction.

use std::net::SocketAddr;
use std::path::Path;

use axum::{
    extract::{ConnectInfo, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::extractor::{extract_text, ExtractedDocument, SUPPORTED_EXTENSIONS};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ExtractionResponse {
    pub cv_text: String,
    /// Empty when no job description file was uploaded.
    pub jd_text: String,
    pub file_type: String,
    pub word_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /extract
///
/// Multipart upload: a required `cv` file plus an optional `jd` file.
/// Returns the extracted text of both and the CV's word count.
pub async fn handle_extract(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    mut multipart: Multipart,
) -> Result<Json<ExtractionResponse>, AppError> {
    state.rate_limiter.enforce(&addr.ip().to_string())?;

    info!(client = %addr.ip(), "Extraction request");

    let mut cv_upload: Option<(String, Bytes)> = None;
    let mut jd_upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read field '{name}': {e}")))?;

        match name.as_str() {
            "cv" => cv_upload = Some((filename, bytes)),
            "jd" => jd_upload = Some((filename, bytes)),
            _ => {}
        }
    }

    let (cv_filename, cv_bytes) = cv_upload
        .ok_or_else(|| AppError::Validation("Missing required file field 'cv'".to_string()))?;

    let cv_extension = file_extension(&cv_filename);
    if !SUPPORTED_EXTENSIONS.contains(&cv_extension.as_str()) {
        return Err(AppError::Validation(format!(
            "Type de fichier invalide. Autorisés: {SUPPORTED_EXTENSIONS:?}"
        )));
    }

    if cv_bytes.len() > state.config.max_file_size {
        return Err(AppError::Validation(format!(
            "Fichier trop volumineux. Max {}MB",
            state.config.max_file_size / (1024 * 1024)
        )));
    }

    let cv_document = extract_upload(cv_bytes, cv_extension.clone()).await?;

    let jd_text = match jd_upload {
        Some((jd_filename, jd_bytes)) => {
            let jd_extension = file_extension(&jd_filename);
            extract_upload(jd_bytes, jd_extension).await?.text
        }
        None => String::new(),
    };

    info!(words = cv_document.word_count, "Extracted text from CV");

    Ok(Json(ExtractionResponse {
        cv_text: cv_document.text,
        jd_text,
        file_type: cv_extension,
        word_count: cv_document.word_count,
    }))
}

/// Run the extraction off the async runtime; PDF parsing is CPU bound.
async fn extract_upload(bytes: Bytes, extension: String) -> Result<ExtractedDocument, AppError> {
    let document = tokio::task::spawn_blocking(move || extract_text(&bytes, &extension))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    Ok(document)
}

/// Lowercased extension with its leading dot, or an empty string when the
/// filename has none.
fn file_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
