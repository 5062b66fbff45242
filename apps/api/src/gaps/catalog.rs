//! Skill-gap rule catalog.
//!
//! Six categories of keyword rules, each mapping a lowercase detection
//! keyword to a display name, a priority, and a concrete learning
//! suggestion. Catalog order is load-bearing: gap selection walks categories
//! and rules in declaration order.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Priority of a recommended skill, serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// What to tell the candidate when a skill is missing.
#[derive(Debug, Clone, Copy)]
pub struct GapAdvice {
    pub skill: &'static str,
    pub priority: Priority,
    pub suggestion: &'static str,
}

/// One catalog rule: a detection keyword plus the advice to emit when the
/// keyword is absent from the CV.
#[derive(Debug, Clone, Copy)]
pub struct GapRule {
    pub keyword: &'static str,
    pub advice: GapAdvice,
}

/// A labeled group of rules.
#[derive(Debug, Clone, Copy)]
pub struct GapCategory {
    pub label: &'static str,
    pub rules: &'static [GapRule],
}

const fn rule(
    keyword: &'static str,
    skill: &'static str,
    priority: Priority,
    suggestion: &'static str,
) -> GapRule {
    GapRule {
        keyword,
        advice: GapAdvice {
            skill,
            priority,
            suggestion,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

pub static GAP_CATALOG: &[GapCategory] = &[
    GapCategory {
        label: "Langages de programmation",
        rules: &[
            rule(
                "python",
                "Python",
                Priority::High,
                "Cours Python sur Coursera ou Udemy. Pratiquer avec des projets sur GitHub.",
            ),
            rule(
                "javascript",
                "JavaScript",
                Priority::High,
                "Maîtriser JS via FreeCodeCamp. Construire 3 projets portfolio interactifs.",
            ),
            rule(
                "java",
                "Java",
                Priority::Medium,
                "Oracle Java Certification ou cours sur Pluralsight. Développer une application Spring Boot.",
            ),
            rule(
                "typescript",
                "TypeScript",
                Priority::Medium,
                "Documentation officielle TypeScript + projet Angular ou React avec TS.",
            ),
        ],
    },
    GapCategory {
        label: "Frameworks & Librairies",
        rules: &[
            rule(
                "react",
                "React",
                Priority::High,
                "Documentation officielle React. Créer 2-3 applications complètes et les déployer.",
            ),
            rule(
                "angular",
                "Angular",
                Priority::Medium,
                "Angular University ou cours officiel. Développer une SPA complète.",
            ),
            rule(
                "django",
                "Django",
                Priority::Medium,
                "Django for Beginners puis Django for Professionals. API REST avec DRF.",
            ),
            rule(
                "spring",
                "Spring Boot",
                Priority::Medium,
                "Spring Academy ou Baeldung tutorials. Microservices avec Spring Cloud.",
            ),
        ],
    },
    GapCategory {
        label: "Bases de données",
        rules: &[
            rule(
                "sql",
                "SQL / Bases de données",
                Priority::High,
                "SQLBolt et Mode Analytics pour la pratique. PostgreSQL en production.",
            ),
            rule(
                "mongodb",
                "MongoDB",
                Priority::Medium,
                "MongoDB University (gratuit). Intégrer dans un projet Node.js.",
            ),
            rule(
                "redis",
                "Redis",
                Priority::Low,
                "Redis University. Implémenter du caching dans vos applications.",
            ),
        ],
    },
    GapCategory {
        label: "DevOps & Cloud",
        rules: &[
            rule(
                "docker",
                "Docker",
                Priority::High,
                "Docker Mastery sur Udemy. Containeriser tous vos projets.",
            ),
            rule(
                "kubernetes",
                "Kubernetes",
                Priority::High,
                "Certified Kubernetes Application Developer (CKAD). Déploiements en prod.",
            ),
            rule(
                "aws",
                "AWS",
                Priority::High,
                "AWS Certified Solutions Architect Associate. Utiliser free tier intensivement.",
            ),
            rule(
                "ci/cd",
                "CI/CD",
                Priority::High,
                "GitHub Actions ou GitLab CI. Automatiser déploiement de 3+ projets.",
            ),
        ],
    },
    GapCategory {
        label: "Méthodologies",
        rules: &[
            rule(
                "agile",
                "Agile / Scrum",
                Priority::Medium,
                "Certified Scrum Master (CSM) ou Professional Scrum Master I.",
            ),
            rule(
                "test",
                "Tests automatisés",
                Priority::High,
                "Jest/Pytest selon stack. Test-Driven Development (TDD) sur projets.",
            ),
        ],
    },
    GapCategory {
        label: "Soft Skills",
        rules: &[
            rule(
                "leadership",
                "Leadership",
                Priority::Medium,
                "Lire \"Leaders Eat Last\". Prendre des rôles de lead dans projets.",
            ),
            rule(
                "communication",
                "Communication professionnelle",
                Priority::Low,
                "Toastmasters ou formations en communication interculturelle.",
            ),
        ],
    },
];

/// Generic recommendations used to pad thin gap lists, in priority order.
pub static UNIVERSAL_FALLBACK: &[GapAdvice] = &[
    GapAdvice {
        skill: "Certifications professionnelles",
        priority: Priority::High,
        suggestion: "Obtenir 2-3 certifications reconnues dans votre domaine (AWS, Google, Microsoft).",
    },
    GapAdvice {
        skill: "Projets open source",
        priority: Priority::Medium,
        suggestion: "Contribuer à des projets open source sur GitHub pour prouver vos compétences.",
    },
    GapAdvice {
        skill: "Veille technologique",
        priority: Priority::Low,
        suggestion: "S'abonner aux newsletters tech (TLDR, Pointer, HackerNews). Participer à des meetups.",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_categories_in_order() {
        let labels: Vec<&str> = GAP_CATALOG.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec![
                "Langages de programmation",
                "Frameworks & Librairies",
                "Bases de données",
                "DevOps & Cloud",
                "Méthodologies",
                "Soft Skills",
            ]
        );
    }

    #[test]
    fn test_catalog_rule_count() {
        let total: usize = GAP_CATALOG.iter().map(|c| c.rules.len()).sum();
        assert_eq!(total, 19);
    }

    #[test]
    fn test_catalog_priority_distribution() {
        let count = |priority: Priority| {
            GAP_CATALOG
                .iter()
                .flat_map(|c| c.rules.iter())
                .filter(|r| r.advice.priority == priority)
                .count()
        };
        assert_eq!(count(Priority::High), 9);
        assert_eq!(count(Priority::Medium), 8);
        assert_eq!(count(Priority::Low), 2);
    }

    #[test]
    fn test_catalog_keywords_are_lowercase() {
        for category in GAP_CATALOG {
            for rule in category.rules {
                assert_eq!(rule.keyword, rule.keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_universal_fallback_covers_each_priority_once() {
        let priorities: Vec<Priority> =
            UNIVERSAL_FALLBACK.iter().map(|a| a.priority).collect();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::Medium, Priority::Low]
        );
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Priority::High).unwrap(),
            serde_json::json!("high")
        );
        assert_eq!(
            serde_json::to_value(Priority::Medium).unwrap(),
            serde_json::json!("medium")
        );
        assert_eq!(
            serde_json::to_value(Priority::Low).unwrap(),
            serde_json::json!("low")
        );
    }
}
