//! Improvement suggestions and ATS keyword selection.

// ────────────────────────────────────────────────────────────────────────────
// Suggestion tables
// ────────────────────────────────────────────────────────────────────────────

/// Suggestions returned for every CV, in this order.
const BASE_IMPROVEMENTS: &[&str] = &[
    "Structuration du CV avec sections hiérarchisées et espacement optimal",
    "Utilisation de verbes d'action impactants (Développé, Piloté, Optimisé, Coordonné)",
    "Intégration de mots-clés sectoriels pour maximiser la visibilité ATS",
    "Quantification systématique des réalisations avec métriques précises",
    "Reformulation orientée résultats plutôt que tâches",
];

/// Extra suggestions appended when the original score sits below
/// [`LOW_SCORE_THRESHOLD`].
const LOW_SCORE_IMPROVEMENTS: &[&str] = &[
    "Enrichissement de la section compétences techniques",
    "Mise en valeur des projets et réalisations concrètes",
];

/// Original scores below this get the extra low-score suggestions.
const LOW_SCORE_THRESHOLD: u32 = 75;

/// Soft skills used to pad the ATS keyword list, in priority order.
const SOFT_SKILLS: &[&str] = &[
    "Leadership",
    "Gestion de projet",
    "Travail d'équipe",
    "Communication",
    "Résolution de problèmes",
    "Esprit d'analyse",
    "Innovation",
    "Adaptabilité",
    "Autonomie",
];

/// At most this many detected technical skills lead the ATS keyword list.
const ATS_TECHNICAL_LIMIT: usize = 6;

/// Soft-skill padding stops once the list reaches this size.
const ATS_KEYWORD_TARGET: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Selection
// ────────────────────────────────────────────────────────────────────────────

/// Build the improvement suggestions for a CV with the given original score.
pub fn build_improvements(original_score: u32) -> Vec<String> {
    let mut improvements: Vec<String> =
        BASE_IMPROVEMENTS.iter().map(|s| s.to_string()).collect();

    if original_score < LOW_SCORE_THRESHOLD {
        improvements.extend(LOW_SCORE_IMPROVEMENTS.iter().map(|s| s.to_string()));
    }

    improvements
}

/// Select ATS keywords: up to six detected technical skills first, then soft
/// skills until the list holds ten entries (or the soft-skill table runs out).
pub fn select_ats_keywords(detected_skills: &[&str]) -> Vec<String> {
    let mut keywords: Vec<String> = detected_skills
        .iter()
        .take(ATS_TECHNICAL_LIMIT)
        .map(|s| s.to_string())
        .collect();

    for soft_skill in SOFT_SKILLS {
        if keywords.len() >= ATS_KEYWORD_TARGET {
            break;
        }
        keywords.push(soft_skill.to_string());
    }

    keywords
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
