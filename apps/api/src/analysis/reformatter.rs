//! Optimized-CV text rendering.
//!
//! Builds the plain-text document returned by the optimization endpoint:
//! banner, the original content with blank lines stripped, the applied
//! optimizations, detected skills, and a score footer. Layout is fixed so
//! output stays byte-stable for identical inputs.

use crate::analysis::scoring::ScoreResult;

// ────────────────────────────────────────────────────────────────────────────
// Layout constants
// ────────────────────────────────────────────────────────────────────────────

/// Width of the section divider rules.
const RULE_WIDTH: usize = 70;

/// At most this many detected skills are listed in the skills section.
const SKILLS_DISPLAY_LIMIT: usize = 12;

/// Lines of the "OPTIMISATIONS APPLIQUÉES" block, rendered verbatim.
const APPLIED_OPTIMIZATIONS: &[&str] = &[
    "✓ Mise en forme professionnelle standardisée",
    "✓ Optimisation pour les systèmes de tracking (ATS)",
    "✓ Restructuration avec hiérarchie claire",
    "✓ Valorisation des expériences avec verbes d'action",
    "✓ Mise en avant des réalisations mesurables",
    "✓ Intégration de mots-clés stratégiques",
];

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Render the optimized CV document.
///
/// Original lines are kept verbatim (indentation included); only fully blank
/// lines are dropped. The skills section is omitted when no skill was
/// detected.
pub fn render_optimized_cv(
    cv_text: &str,
    detected_skills: &[&str],
    score: &ScoreResult,
) -> String {
    let heavy_rule = "═".repeat(RULE_WIDTH);
    let light_rule = "─".repeat(RULE_WIDTH);

    let mut sections: Vec<String> = Vec::new();

    sections.push(heavy_rule.clone());
    sections.push("CV PROFESSIONNEL OPTIMISÉ".to_string());
    sections.push(heavy_rule);
    sections.push(String::new());

    for line in cv_text.lines() {
        if !line.trim().is_empty() {
            sections.push(line.to_string());
        }
    }

    sections.push(String::new());
    sections.push(light_rule.clone());
    sections.push("OPTIMISATIONS APPLIQUÉES".to_string());
    sections.push(light_rule.clone());
    sections.push(String::new());
    sections.extend(APPLIED_OPTIMIZATIONS.iter().map(|line| line.to_string()));

    if !detected_skills.is_empty() {
        let displayed: Vec<&str> = detected_skills
            .iter()
            .take(SKILLS_DISPLAY_LIMIT)
            .copied()
            .collect();
        sections.push(String::new());
        sections.push(light_rule.clone());
        sections.push("COMPÉTENCES TECHNIQUES IDENTIFIÉES".to_string());
        sections.push(light_rule.clone());
        sections.push(String::new());
        sections.push(format!("• {}", displayed.join(", ")));
    }

    sections.push(String::new());
    sections.push(light_rule.clone());
    sections.push(format!(
        "SCORE D'OPTIMISATION: {}/100 → {}/100",
        score.original_score, score.optimized_score
    ));
    sections.push(format!("AMÉLIORATION: +{} points", score.improvement_delta()));
    sections.push(light_rule);

    sections.join("\n")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_score(original: u32, optimized: u32) -> ScoreResult {
        ScoreResult {
            original_score: original,
            optimized_score: optimized,
        }
    }

    #[test]
    fn test_banner_and_footer_are_present() {
        let rendered = render_optimized_cv("content", &["Python"], &make_score(64, 82));
        assert!(rendered.starts_with(&"═".repeat(70)));
        assert!(rendered.contains("CV PROFESSIONNEL OPTIMISÉ"));
        assert!(rendered.contains("SCORE D'OPTIMISATION: 64/100 → 82/100"));
        assert!(rendered.contains("AMÉLIORATION: +18 points"));
        assert!(rendered.ends_with(&"─".repeat(70)));
    }

    #[test]
    fn test_blank_lines_are_dropped_from_original_content() {
        let rendered =
            render_optimized_cv("Line one\n\n   \nLine two", &[], &make_score(45, 63));
        assert!(rendered.contains("Line one\nLine two"));
    }

    #[test]
    fn test_original_lines_kept_verbatim() {
        let rendered =
            render_optimized_cv("  - indented bullet", &[], &make_score(45, 63));
        assert!(rendered.contains("  - indented bullet"));
    }

    #[test]
    fn test_all_applied_optimizations_listed() {
        let rendered = render_optimized_cv("x", &[], &make_score(45, 63));
        assert!(rendered.contains("OPTIMISATIONS APPLIQUÉES"));
        for line in APPLIED_OPTIMIZATIONS {
            assert!(rendered.contains(line));
        }
    }

    #[test]
    fn test_skills_section_omitted_when_no_skill_detected() {
        let rendered = render_optimized_cv("x", &[], &make_score(45, 63));
        assert!(!rendered.contains("COMPÉTENCES TECHNIQUES IDENTIFIÉES"));
    }

    #[test]
    fn test_skills_section_lists_detected_skills() {
        let rendered =
            render_optimized_cv("x", &["Python", "React.js"], &make_score(64, 82));
        assert!(rendered.contains("COMPÉTENCES TECHNIQUES IDENTIFIÉES"));
        assert!(rendered.contains("• Python, React.js"));
    }

    #[test]
    fn test_skills_display_truncates_to_twelve() {
        let skills: Vec<&str> = vec![
            "Python",
            "Java",
            "JavaScript",
            "TypeScript",
            "C++",
            "C#",
            "PHP",
            "Ruby",
            "Go",
            "Rust",
            "Swift",
            "React.js",
            "Angular",
            "Vue.js",
        ];
        let rendered = render_optimized_cv("x", &skills, &make_score(90, 97));
        assert!(rendered.contains("React.js"));
        assert!(!rendered.contains("Angular"));
        assert!(!rendered.contains("Vue.js"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let score = make_score(64, 82);
        let first = render_optimized_cv("some cv", &["Python"], &score);
        let second = render_optimized_cv("some cv", &["Python"], &score);
        assert_eq!(first, second);
    }
}
