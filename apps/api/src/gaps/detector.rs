//! Skill-gap detection and job-description match scoring.
//!
//! Walks [`GAP_CATALOG`] for keywords absent from the CV, keeps the top few
//! per priority band, pads thin results from the universal fallback, and
//! optionally scores CV/JD vocabulary overlap. Fully deterministic.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::gaps::catalog::{GapAdvice, Priority, GAP_CATALOG, UNIVERSAL_FALLBACK};

// ────────────────────────────────────────────────────────────────────────────
// Selection constants
// ────────────────────────────────────────────────────────────────────────────

/// Per-band caps applied to the missing-skill list, in band order.
const MAX_HIGH_PRIORITY: usize = 4;
const MAX_MEDIUM_PRIORITY: usize = 3;
const MAX_LOW_PRIORITY: usize = 1;

/// Below this many gaps, the universal fallback pads the list.
const MIN_GAPS: usize = 5;
/// Hard cap on the returned gap list.
const MAX_GAPS: usize = 8;

/// Tokens this short (in characters) are ignored by the match score.
const SIGNIFICANT_TOKEN_LEN: usize = 3;
/// Overlap percentage is boosted by this factor before truncation.
const MATCH_BOOST: f64 = 1.2;
/// Ceiling for the boosted match score.
const MATCH_SCORE_CAP: u32 = 95;
/// Score returned when the JD holds no significant token at all.
const EMPTY_JD_MATCH_SCORE: u32 = 70;

// ────────────────────────────────────────────────────────────────────────────
// Report types
// ────────────────────────────────────────────────────────────────────────────

/// One recommended skill with its learning suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapEntry {
    pub skill: String,
    pub suggestion: String,
    pub priority: Priority,
}

impl From<&GapAdvice> for SkillGapEntry {
    fn from(advice: &GapAdvice) -> Self {
        Self {
            skill: advice.skill.to_string(),
            suggestion: advice.suggestion.to_string(),
            priority: advice.priority,
        }
    }
}

/// Full gap analysis for one CV. `match_score` is present only when a job
/// description was supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGapReport {
    pub skill_gaps: Vec<SkillGapEntry>,
    pub match_score: Option<u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis
// ────────────────────────────────────────────────────────────────────────────

/// Analyze one CV against the catalog, and against a job description when
/// one is given. An empty JD string still counts as "supplied" for the match
/// score; `None` suppresses it entirely.
pub fn analyze_skill_gaps(cv_text: &str, jd_text: Option<&str>) -> SkillGapReport {
    let match_score = match jd_text {
        Some(jd) if !jd.is_empty() => Some(compute_match_score(cv_text, jd)),
        _ => None,
    };

    SkillGapReport {
        skill_gaps: detect_skill_gaps(cv_text),
        match_score,
    }
}

/// Collect catalog keywords absent from the CV and shape them into the final
/// recommendation list: up to four high, three medium, and one low priority
/// entry, padded from the universal fallback when fewer than five remain.
pub fn detect_skill_gaps(cv_text: &str) -> Vec<SkillGapEntry> {
    let cv_lower = cv_text.to_lowercase();

    let missing: Vec<&GapAdvice> = GAP_CATALOG
        .iter()
        .flat_map(|category| category.rules.iter())
        .filter(|rule| !cv_lower.contains(rule.keyword))
        .map(|rule| &rule.advice)
        .collect();

    let mut selected: Vec<SkillGapEntry> = Vec::new();
    for (priority, limit) in [
        (Priority::High, MAX_HIGH_PRIORITY),
        (Priority::Medium, MAX_MEDIUM_PRIORITY),
        (Priority::Low, MAX_LOW_PRIORITY),
    ] {
        selected.extend(
            missing
                .iter()
                .filter(|advice| advice.priority == priority)
                .take(limit)
                .map(|advice| SkillGapEntry::from(*advice)),
        );
    }

    if selected.len() < MIN_GAPS {
        let shortfall = MIN_GAPS - selected.len();
        selected.extend(
            UNIVERSAL_FALLBACK
                .iter()
                .take(shortfall)
                .map(SkillGapEntry::from),
        );
    }

    selected.truncate(MAX_GAPS);
    selected
}

/// Score CV/JD overlap: the share of the JD's significant vocabulary that
/// also appears in the CV, as a percentage, boosted and capped. A JD with no
/// significant token scores a flat [`EMPTY_JD_MATCH_SCORE`].
pub fn compute_match_score(cv_text: &str, jd_text: &str) -> u32 {
    let cv_lower = cv_text.to_lowercase();
    let jd_lower = jd_text.to_lowercase();

    let cv_tokens = significant_tokens(&cv_lower);
    let jd_tokens = significant_tokens(&jd_lower);

    if jd_tokens.is_empty() {
        return EMPTY_JD_MATCH_SCORE;
    }

    let common = cv_tokens.intersection(&jd_tokens).count();
    let percentage = (common as f64 / jd_tokens.len() as f64) * 100.0;
    ((percentage * MATCH_BOOST) as u32).min(MATCH_SCORE_CAP)
}

/// Whitespace tokens longer than [`SIGNIFICANT_TOKEN_LEN`] characters.
/// Length is counted in characters, not bytes, so short accented French
/// words are still filtered out.
fn significant_tokens(text: &str) -> HashSet<&str> {
    text.split_whitespace()
        .filter(|token| token.chars().count() > SIGNIFICANT_TOKEN_LEN)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(entries: &[SkillGapEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.skill.as_str()).collect()
    }

    #[test]
    fn test_empty_cv_yields_full_banded_selection() {
        let gaps = detect_skill_gaps("");
        assert_eq!(
            skills(&gaps),
            vec![
                "Python",
                "JavaScript",
                "React",
                "SQL / Bases de données",
                "Java",
                "TypeScript",
                "Angular",
                "Redis",
            ]
        );
    }

    #[test]
    fn test_covered_skills_are_not_reported() {
        let gaps = detect_skill_gaps("python docker");
        let highs: Vec<&str> = gaps
            .iter()
            .filter(|g| g.priority == Priority::High)
            .map(|g| g.skill.as_str())
            .collect();
        assert_eq!(
            highs,
            vec!["JavaScript", "React", "SQL / Bases de données", "Kubernetes"]
        );
        assert!(!skills(&gaps).contains(&"Python"));
        assert!(!skills(&gaps).contains(&"Docker"));
    }

    #[test]
    fn test_full_coverage_falls_back_to_universal_advice() {
        let cv = "python javascript java typescript react angular django spring \
                  sql mongodb redis docker kubernetes aws ci/cd agile test \
                  leadership communication";
        let gaps = detect_skill_gaps(cv);
        assert_eq!(
            skills(&gaps),
            vec![
                "Certifications professionnelles",
                "Projets open source",
                "Veille technologique",
            ]
        );
    }

    #[test]
    fn test_thin_gap_list_is_padded_to_five() {
        // Everything covered except python and leadership ("javascript"
        // covers "java" as a substring).
        let cv = "javascript typescript react angular django spring sql mongodb \
                  redis docker kubernetes aws ci/cd agile test communication";
        let gaps = detect_skill_gaps(cv);
        assert_eq!(
            skills(&gaps),
            vec![
                "Python",
                "Leadership",
                "Certifications professionnelles",
                "Projets open source",
                "Veille technologique",
            ]
        );
    }

    #[test]
    fn test_gap_list_never_exceeds_cap() {
        assert!(detect_skill_gaps("").len() <= MAX_GAPS);
        assert!(detect_skill_gaps("short cv").len() <= MAX_GAPS);
    }

    #[test]
    fn test_match_score_absent_without_jd() {
        let report = analyze_skill_gaps("some cv text", None);
        assert_eq!(report.match_score, None);

        let report = analyze_skill_gaps("some cv text", Some(""));
        assert_eq!(report.match_score, None);
    }

    #[test]
    fn test_whitespace_jd_scores_neutral() {
        // Non-empty but token-free: the neutral score applies.
        let report = analyze_skill_gaps("some cv text", Some("   "));
        assert_eq!(report.match_score, Some(EMPTY_JD_MATCH_SCORE));
    }

    #[test]
    fn test_jd_with_only_short_tokens_scores_neutral() {
        assert_eq!(compute_match_score("python everywhere", "go c js sql the and"), 70);
    }

    #[test]
    fn test_token_length_counts_characters_not_bytes() {
        // Every token here is three characters or fewer, "été" included.
        assert_eq!(compute_match_score("anything at all", "été par les uns"), 70);
    }

    #[test]
    fn test_zero_overlap_scores_zero() {
        assert_eq!(
            compute_match_score("alpha beta gamma delta", "omega sigma theta lambda"),
            0
        );
    }

    #[test]
    fn test_full_overlap_is_capped() {
        assert_eq!(
            compute_match_score("senior python developer here", "python developer"),
            MATCH_SCORE_CAP
        );
    }

    #[test]
    fn test_partial_overlap_is_boosted() {
        // 1 of 7 significant JD tokens: 14.28% boosted to 17.
        let jd = "python coding career growth mentor remote office";
        assert_eq!(compute_match_score("python developer", jd), 17);
    }

    #[test]
    fn test_match_score_is_case_insensitive() {
        assert_eq!(
            compute_match_score("PYTHON Developer", "python DEVELOPER"),
            MATCH_SCORE_CAP
        );
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let first = analyze_skill_gaps("python and sql", Some("python engineer"));
        let second = analyze_skill_gaps("python and sql", Some("python engineer"));
        assert_eq!(first, second);
    }
}
