//! CV analysis engine.
//!
//! [`CvAnalyzer`] is the seam between HTTP handlers and analysis backends.
//! [`HeuristicAnalyzer`] is the deterministic implementation: same CV in,
//! same analysis out, no external calls. The trait is async so an
//! LLM-backed implementation can slot in behind the same handlers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::analysis::advice::{build_improvements, select_ats_keywords};
use crate::analysis::reformatter::render_optimized_cv;
use crate::analysis::scoring::score_signals;
use crate::analysis::signals::extract_signals;
use crate::errors::AppError;
use crate::gaps::detector::{analyze_skill_gaps, SkillGapReport};

// ────────────────────────────────────────────────────────────────────────────
// Analysis result
// ────────────────────────────────────────────────────────────────────────────

/// Complete optimization result for one CV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvAnalysis {
    pub original_score: u32,
    pub optimized_score: u32,
    pub optimized_text: String,
    pub improvements: Vec<String>,
    pub ats_keywords: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Analyzer trait
// ────────────────────────────────────────────────────────────────────────────

/// Analysis backend behind the optimization and skill-gap endpoints.
#[async_trait]
pub trait CvAnalyzer: Send + Sync {
    /// Short backend identifier surfaced by the service info endpoints.
    fn backend(&self) -> &'static str;

    /// Score the CV and produce the optimized rendition.
    async fn optimize(&self, cv_text: &str) -> Result<CvAnalysis, AppError>;

    /// Detect missing skills, scoring against the job description when one
    /// is supplied.
    async fn skill_gaps(
        &self,
        cv_text: &str,
        jd_text: Option<&str>,
    ) -> Result<SkillGapReport, AppError>;
}

/// Rule-based analyzer. Infallible and deterministic.
pub struct HeuristicAnalyzer;

#[async_trait]
impl CvAnalyzer for HeuristicAnalyzer {
    fn backend(&self) -> &'static str {
        "heuristic"
    }

    async fn optimize(&self, cv_text: &str) -> Result<CvAnalysis, AppError> {
        Ok(analyze_cv(cv_text))
    }

    async fn skill_gaps(
        &self,
        cv_text: &str,
        jd_text: Option<&str>,
    ) -> Result<SkillGapReport, AppError> {
        Ok(analyze_skill_gaps(cv_text, jd_text))
    }
}

/// Run the full heuristic pipeline: signal extraction, scoring, rendering,
/// and suggestion selection.
pub fn analyze_cv(cv_text: &str) -> CvAnalysis {
    let signals = extract_signals(cv_text);
    let score = score_signals(&signals);

    CvAnalysis {
        original_score: score.original_score,
        optimized_score: score.optimized_score,
        optimized_text: render_optimized_cv(cv_text, &signals.detected_skills, &score),
        improvements: build_improvements(score.original_score),
        ats_keywords: select_ats_keywords(&signals.detected_skills),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
