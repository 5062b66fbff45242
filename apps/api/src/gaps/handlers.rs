//! Axum route handlers for skill-gap analysis.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::MIN_CV_TEXT_CHARS;
use crate::errors::AppError;
use crate::gaps::detector::SkillGapEntry;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SkillGapsRequest {
    pub cv_text: String,
    /// Optional job description. An absent field and an empty string both
    /// suppress the match score.
    #[serde(default)]
    pub jd_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillGapsResponse {
    pub skill_gaps: Vec<SkillGapEntry>,
    pub match_score: Option<u32>,
    pub timestamp: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /skill-gaps
///
/// Reports catalog skills missing from the CV, with a vocabulary match score
/// when a job description is supplied.
pub async fn handle_skill_gaps(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(request): Json<SkillGapsRequest>,
) -> Result<Json<SkillGapsResponse>, AppError> {
    state.rate_limiter.enforce(&addr.ip().to_string())?;

    info!(client = %addr.ip(), "Skill gap analysis request");

    if request.cv_text.chars().count() < MIN_CV_TEXT_CHARS {
        return Err(AppError::Validation(format!(
            "cv_text must be at least {MIN_CV_TEXT_CHARS} characters"
        )));
    }

    let report = state
        .analyzer
        .skill_gaps(&request.cv_text, request.jd_text.as_deref())
        .await?;

    info!(gaps = report.skill_gaps.len(), "Skill gap analysis complete");

    Ok(Json(SkillGapsResponse {
        skill_gaps: report.skill_gaps,
        match_score: report.match_score,
        timestamp: Utc::now(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
