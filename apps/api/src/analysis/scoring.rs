//! CV score computation.
//!
//! Pure arithmetic over a [`SignalBundle`]: a fixed base plus bonuses per
//! signal family, capped, then an improvement delta that shrinks as the
//! original score rises. No I/O, no randomness.

use crate::analysis::signals::SignalBundle;

// ────────────────────────────────────────────────────────────────────────────
// Score constants
// ────────────────────────────────────────────────────────────────────────────

/// Every CV starts here; bonuses only add.
pub const BASE_SCORE: u32 = 45;
/// Ceiling for the original score.
pub const ORIGINAL_SCORE_CAP: u32 = 95;
/// Ceiling for the optimized score.
pub const OPTIMIZED_SCORE_CAP: u32 = 97;

// ────────────────────────────────────────────────────────────────────────────
// Score result
// ────────────────────────────────────────────────────────────────────────────

/// Original and optimized scores for one CV, both on a 0..=100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub original_score: u32,
    pub optimized_score: u32,
}

impl ScoreResult {
    /// Points gained by the optimization pass.
    pub fn improvement_delta(&self) -> u32 {
        self.optimized_score - self.original_score
    }
}

/// Compute both scores from extracted signals.
///
/// Word-count bonuses stack (a 451-word CV earns all three tiers); the skill
/// and achievement tiers award only the highest matching bracket.
pub fn score_signals(signals: &SignalBundle) -> ScoreResult {
    let mut score = BASE_SCORE;

    if signals.word_count > 150 {
        score += 8;
    }
    if signals.word_count > 250 {
        score += 7;
    }
    if signals.word_count > 400 {
        score += 5;
    }

    score += match signals.detected_skills.len() {
        n if n >= 8 => 18,
        n if n >= 5 => 13,
        n if n >= 3 => 8,
        n if n >= 1 => 4,
        _ => 0,
    };

    if signals.has_strong_experience() {
        score += 12;
    } else if signals.experience_match_count > 0 {
        score += 6;
    }

    if signals.has_education_signal {
        score += 5;
    }

    score += match signals.quantifiable_achievement_count {
        n if n >= 5 => 8,
        n if n >= 3 => 5,
        n if n >= 1 => 3,
        _ => 0,
    };

    let original_score = score.min(ORIGINAL_SCORE_CAP);

    let delta = if original_score < 70 {
        18
    } else if original_score < 80 {
        15
    } else {
        12
    };

    ScoreResult {
        original_score,
        optimized_score: (original_score + delta).min(OPTIMIZED_SCORE_CAP),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_signals(
        word_count: usize,
        skill_count: usize,
        experience_match_count: usize,
        has_education_signal: bool,
        quantifiable_achievement_count: usize,
    ) -> SignalBundle {
        SignalBundle {
            word_count,
            detected_skills: vec!["Python"; skill_count],
            experience_match_count,
            has_education_signal,
            quantifiable_achievement_count,
        }
    }

    #[test]
    fn test_empty_cv_scores_floor() {
        let result = score_signals(&make_signals(0, 0, 0, false, 0));
        assert_eq!(result.original_score, BASE_SCORE);
        assert_eq!(result.optimized_score, 63);
        assert_eq!(result.improvement_delta(), 18);
    }

    #[test]
    fn test_short_cv_with_a_few_signals() {
        // 2 skills (+4), 4 distinct experience words (+12), 2 achievements (+3).
        let result = score_signals(&make_signals(17, 2, 4, false, 2));
        assert_eq!(result.original_score, 64);
        assert_eq!(result.optimized_score, 82);
    }

    #[test]
    fn test_word_count_bonuses_stack() {
        assert_eq!(score_signals(&make_signals(150, 0, 0, false, 0)).original_score, 45);
        assert_eq!(score_signals(&make_signals(151, 0, 0, false, 0)).original_score, 53);
        assert_eq!(score_signals(&make_signals(251, 0, 0, false, 0)).original_score, 60);
        assert_eq!(score_signals(&make_signals(451, 0, 0, false, 0)).original_score, 65);
    }

    #[test]
    fn test_skill_tier_awards_highest_bracket_only() {
        assert_eq!(score_signals(&make_signals(0, 1, 0, false, 0)).original_score, 49);
        assert_eq!(score_signals(&make_signals(0, 3, 0, false, 0)).original_score, 53);
        assert_eq!(score_signals(&make_signals(0, 5, 0, false, 0)).original_score, 58);
        assert_eq!(score_signals(&make_signals(0, 8, 0, false, 0)).original_score, 63);
        assert_eq!(score_signals(&make_signals(0, 30, 0, false, 0)).original_score, 63);
    }

    #[test]
    fn test_experience_bonus_tiers() {
        assert_eq!(score_signals(&make_signals(0, 0, 1, false, 0)).original_score, 51);
        assert_eq!(score_signals(&make_signals(0, 0, 2, false, 0)).original_score, 51);
        assert_eq!(score_signals(&make_signals(0, 0, 3, false, 0)).original_score, 57);
    }

    #[test]
    fn test_achievement_tier_awards_highest_bracket_only() {
        assert_eq!(score_signals(&make_signals(0, 0, 0, false, 1)).original_score, 48);
        assert_eq!(score_signals(&make_signals(0, 0, 0, false, 3)).original_score, 50);
        assert_eq!(score_signals(&make_signals(0, 0, 0, false, 5)).original_score, 53);
    }

    #[test]
    fn test_education_bonus() {
        assert_eq!(score_signals(&make_signals(0, 0, 0, true, 0)).original_score, 50);
    }

    #[test]
    fn test_scores_are_capped() {
        // 45 + 20 + 18 + 12 + 5 + 8 = 108 before the cap.
        let result = score_signals(&make_signals(500, 10, 5, true, 6));
        assert_eq!(result.original_score, ORIGINAL_SCORE_CAP);
        assert_eq!(result.optimized_score, OPTIMIZED_SCORE_CAP);
    }

    #[test]
    fn test_improvement_delta_shrinks_as_score_rises() {
        // 69: words (+8), 5 skills (+13), 1 achievement (+3).
        let low = score_signals(&make_signals(151, 5, 0, false, 1));
        assert_eq!(low.original_score, 69);
        assert_eq!(low.improvement_delta(), 18);

        // 70: words (+8), strong experience (+12), education (+5).
        let mid_low = score_signals(&make_signals(151, 0, 3, true, 0));
        assert_eq!(mid_low.original_score, 70);
        assert_eq!(mid_low.improvement_delta(), 15);

        // 79: words (+8), 8 skills (+18), education (+5), 1 achievement (+3).
        let mid_high = score_signals(&make_signals(151, 8, 0, true, 1));
        assert_eq!(mid_high.original_score, 79);
        assert_eq!(mid_high.improvement_delta(), 15);

        // 80: words (+8), 8 skills (+18), weak experience (+6), 1 achievement (+3).
        let high = score_signals(&make_signals(151, 8, 1, false, 1));
        assert_eq!(high.original_score, 80);
        assert_eq!(high.improvement_delta(), 12);
    }

    #[test]
    fn test_optimized_always_exceeds_original() {
        for skills in 0..12 {
            for words in [0, 200, 300, 500] {
                let result = score_signals(&make_signals(words, skills, skills, true, skills));
                assert!(result.optimized_score > result.original_score);
            }
        }
    }
}
