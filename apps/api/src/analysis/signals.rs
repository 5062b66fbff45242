//! Raw signal extraction from CV text.
//!
//! Produces the [`SignalBundle`] consumed by scoring and rendering. Detection
//! is plain substring matching against the lowercased text, so the same input
//! always yields the same bundle.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::lexicon::{EDUCATION_KEYWORDS, EXPERIENCE_KEYWORDS, SKILL_LEXICON};

// ────────────────────────────────────────────────────────────────────────────
// Detection constants
// ────────────────────────────────────────────────────────────────────────────

/// Matches quantified statements: bare numbers with optional `%`/`+`, or a
/// number followed by a duration/magnitude word. Alternation is
/// leftmost-first, so a bare number match wins before the unit variants are
/// tried at the same position.
static ACHIEVEMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+[%+]?|\d+\s*(?:ans|years|mois|months|millions?|k\b)")
        .expect("achievement pattern is a valid regex")
});

/// Minimum distinct experience keywords for the full experience bonus.
pub const STRONG_EXPERIENCE_THRESHOLD: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Signal bundle
// ────────────────────────────────────────────────────────────────────────────

/// Everything the scorer needs to know about one CV, extracted in a single
/// pass over the text.
#[derive(Debug, Clone)]
pub struct SignalBundle {
    /// Whitespace-separated token count of the raw text.
    pub word_count: usize,
    /// Canonical names of detected skills, in lexicon order (not text order).
    pub detected_skills: Vec<&'static str>,
    /// Number of distinct experience keywords present. Repeating one keyword
    /// does not raise this.
    pub experience_match_count: usize,
    /// Whether any education keyword is present.
    pub has_education_signal: bool,
    /// Number of quantified-achievement matches in the raw text.
    pub quantifiable_achievement_count: usize,
}

impl SignalBundle {
    /// True when the CV shows enough distinct experience language to earn the
    /// full experience bonus.
    pub fn has_strong_experience(&self) -> bool {
        self.experience_match_count >= STRONG_EXPERIENCE_THRESHOLD
    }
}

/// Extract all scoring signals from the CV text.
///
/// Skill and keyword detection runs on the lowercased text; the achievement
/// pattern runs on the raw text since digits are case-free anyway.
pub fn extract_signals(cv_text: &str) -> SignalBundle {
    let cv_lower = cv_text.to_lowercase();

    let detected_skills: Vec<&'static str> = SKILL_LEXICON
        .iter()
        .filter(|&&(keyword, _)| cv_lower.contains(keyword))
        .map(|&(_, canonical)| canonical)
        .collect();

    let experience_match_count = EXPERIENCE_KEYWORDS
        .iter()
        .filter(|&&keyword| cv_lower.contains(keyword))
        .count();

    let has_education_signal = EDUCATION_KEYWORDS
        .iter()
        .any(|&keyword| cv_lower.contains(keyword));

    SignalBundle {
        word_count: cv_text.split_whitespace().count(),
        detected_skills,
        experience_match_count,
        has_education_signal,
        quantifiable_achievement_count: ACHIEVEMENT_PATTERN.find_iter(cv_text).count(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
