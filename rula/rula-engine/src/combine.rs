//! Combining posture sub-scores into the final grade.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::EvaluationConfig;
use crate::posture::PostureScores;
use crate::tables::{self, TABLE_C_MAX_A, TABLE_C_MAX_B};

/// Intermediate and final table scores of one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableScores {
    /// Table A posture score before muscle/force adjustment.
    pub posture_a: u8,
    /// Wrist-and-arm score: adjusted Table A, clamped to `1..=8`.
    pub table_a: u8,
    /// Table B posture score before muscle/force adjustment.
    pub posture_b: u8,
    /// Neck-trunk-leg score: adjusted Table B, clamped to `1..=7`.
    pub table_b: u8,
    /// Table C grand score, `1..=7`.
    pub final_score: u8,
}

/// Runs tables A, B and C for one side.
///
/// Total over any config: `scores` is in domain by construction, while
/// out-of-range twist and legs are clamped to the table columns and
/// oversized adjustments saturate before the Table C clamp.
///
/// # Example
///
/// ```
/// use rula_engine::{EvaluationConfig, PostureScores, combine};
///
/// let scores = PostureScores::new(4, 2, 3, 3, 3).unwrap();
/// let config = EvaluationConfig::default().legs(2).muscle_use_a(1).force_load_a(2);
///
/// let out = combine(&scores, &config);
/// assert_eq!(out.posture_a, 4);
/// assert_eq!(out.table_a, 7);
/// assert_eq!(out.table_b, 5);
/// assert_eq!(out.final_score, 7);
/// ```
#[must_use]
pub fn combine(scores: &PostureScores, config: &EvaluationConfig) -> TableScores {
    let posture_a = tables::table_a(scores, config.wrist_twist);
    let posture_b = tables::table_b(scores, config.legs);

    let table_a = posture_a
        .saturating_add(config.adjustment_a())
        .clamp(1, TABLE_C_MAX_A);
    let table_b = posture_b
        .saturating_add(config.adjustment_b())
        .clamp(1, TABLE_C_MAX_B);

    TableScores {
        posture_a,
        table_a,
        posture_b,
        table_b,
        final_score: tables::table_c(table_a, table_b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_posture_is_lowest_grade() {
        let scores = PostureScores::new(1, 1, 1, 1, 1).unwrap();
        let out = combine(&scores, &EvaluationConfig::default());
        assert_eq!(out.table_a, 1);
        assert_eq!(out.table_b, 1);
        assert_eq!(out.final_score, 1);
    }

    #[test]
    fn test_adjustments_are_added() {
        let scores = PostureScores::new(2, 1, 2, 2, 2).unwrap();
        let config = EvaluationConfig::default()
            .muscle_use_a(1)
            .force_load_a(1)
            .muscle_use_b(1);
        let out = combine(&scores, &config);
        assert_eq!(out.posture_a, 3);
        assert_eq!(out.table_a, 5);
        assert_eq!(out.posture_b, 2);
        assert_eq!(out.table_b, 3);
        assert_eq!(out.final_score, 4);
    }

    #[test]
    fn test_adjusted_scores_are_clamped() {
        let scores = PostureScores::new(6, 3, 4, 6, 6).unwrap();
        let config = EvaluationConfig::new(2, 2, 1, 1, 2, 2).unwrap();
        let out = combine(&scores, &config);
        assert_eq!(out.posture_a, 9);
        assert_eq!(out.table_a, TABLE_C_MAX_A);
        assert_eq!(out.posture_b, 9);
        assert_eq!(out.table_b, TABLE_C_MAX_B);
        assert_eq!(out.final_score, 7);
    }

    #[test]
    fn test_wrist_twist_and_legs_select_columns() {
        let scores = PostureScores::new(1, 1, 1, 1, 1).unwrap();
        let twisted = combine(&scores, &EvaluationConfig::default().wrist_twist(2));
        assert_eq!(twisted.posture_a, 2);
        let unsupported = combine(&scores, &EvaluationConfig::default().legs(2));
        assert_eq!(unsupported.posture_b, 3);
    }

    #[test]
    fn test_unvalidated_config_does_not_overflow() {
        let scores = PostureScores::new(1, 1, 1, 1, 1).unwrap();
        let config = EvaluationConfig {
            wrist_twist: 0,
            legs: 9,
            muscle_use_a: 200,
            muscle_use_b: u8::MAX,
            force_load_a: 100,
            force_load_b: u8::MAX,
        };
        assert!(config.validate().is_err());

        let out = combine(&scores, &config);
        assert_eq!(out.posture_a, 1);
        assert_eq!(out.table_a, TABLE_C_MAX_A);
        assert_eq!(out.posture_b, 3);
        assert_eq!(out.table_b, TABLE_C_MAX_B);
        assert_eq!(out.final_score, 7);
    }

    #[test]
    fn test_combine_is_idempotent() {
        let scores = PostureScores::new(3, 2, 2, 2, 3).unwrap();
        let config = EvaluationConfig::default().force_load_b(1);
        assert_eq!(combine(&scores, &config), combine(&scores, &config));
    }
}
