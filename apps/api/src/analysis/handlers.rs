//! Axum route handlers for CV optimization.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::engine::CvAnalysis;
use crate::analysis::{MAX_CV_TEXT_CHARS, MIN_CV_TEXT_CHARS};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub candidate_cv_text: String,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub original_cv_score: u32,
    pub optimized_cv_score: u32,
    pub optimized_cv_text: String,
    pub improvements: Vec<String>,
    pub ats_keywords: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl OptimizeResponse {
    fn from_analysis(analysis: CvAnalysis) -> Self {
        Self {
            original_cv_score: analysis.original_score,
            optimized_cv_score: analysis.optimized_score,
            optimized_cv_text: analysis.optimized_text,
            improvements: analysis.improvements,
            ats_keywords: analysis.ats_keywords,
            timestamp: Utc::now(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /optimize
///
/// Scores the submitted CV and returns the optimized rendition together with
/// improvement suggestions and ATS keywords.
pub async fn handle_optimize(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    state.rate_limiter.enforce(&addr.ip().to_string())?;

    info!(client = %addr.ip(), "Optimization request");

    let cv_text = validate_cv_text(&request.candidate_cv_text)?;
    let analysis = state.analyzer.optimize(cv_text).await?;

    info!(
        original = analysis.original_score,
        optimized = analysis.optimized_score,
        "Optimization complete"
    );

    Ok(Json(OptimizeResponse::from_analysis(analysis)))
}

/// Validate the submitted CV text and hand back the trimmed form used for
/// analysis. Length bounds apply to the raw input, in characters.
pub fn validate_cv_text(text: &str) -> Result<&str, AppError> {
    let char_count = text.chars().count();
    if char_count < MIN_CV_TEXT_CHARS {
        return Err(AppError::Validation(format!(
            "candidate_cv_text must be at least {MIN_CV_TEXT_CHARS} characters"
        )));
    }
    if char_count > MAX_CV_TEXT_CHARS {
        return Err(AppError::Validation(format!(
            "candidate_cv_text must be at most {MAX_CV_TEXT_CHARS} characters"
        )));
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "candidate_cv_text cannot be empty".to_string(),
        ));
    }

    Ok(trimmed)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
