//! Axis-opposition bonus, computed from the two codes directly.
//!
//! Each axis has exactly two poles, so "differs" and "opposite" coincide.
//!
//! | differing axes | bonus |
//! |---------------:|------:|
//! | 4 | +3 |
//! | 3 | +2 |
//! | 1 or 2 | 0 |
//! | 0 | −2 |
//!
//! Zero differing axes only happens when a type meets itself.

use crate::types::{Axis, AxisSet, PersonalityType};

/// Bonus per count of differing axes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisBonusTable {
    /// All four axes differ (complete opposites).
    pub four: f32,
    /// Three axes differ.
    pub three: f32,
    /// One or two axes differ.
    pub partial: f32,
    /// No axis differs (identical codes).
    pub identical: f32,
}

impl AxisBonusTable {
    /// The standard table: +3, +2, 0, −2.
    pub const fn standard() -> Self {
        Self {
            four: 3.0,
            three: 2.0,
            partial: 0.0,
            identical: -2.0,
        }
    }

    /// Bonus for `count` differing axes.
    pub const fn for_count(&self, count: usize) -> f32 {
        match count {
            0 => self.identical,
            1 | 2 => self.partial,
            3 => self.three,
            _ => self.four,
        }
    }
}

impl Default for AxisBonusTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Axes on which `a` and `b` hold different poles.
pub fn differing_axes(a: PersonalityType, b: PersonalityType) -> AxisSet {
    Axis::ALL
        .into_iter()
        .filter(|&axis| a.letter(axis) != b.letter(axis))
        .collect()
}

/// Standard axis bonus of `a` against `b`.
pub fn axis_bonus(a: PersonalityType, b: PersonalityType) -> f32 {
    AxisBonusTable::standard().for_count(differing_axes(a, b).len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use PersonalityType::*;

    #[test]
    fn test_one_differing_axis_scores_zero() {
        let d = differing_axes(LAEF, SAEF);
        assert_eq!(d.len(), 1);
        assert!(d.contains(Axis::Viewing));
        assert_eq!(axis_bonus(LAEF, SAEF), 0.0);
    }

    #[test]
    fn test_complete_opposites_score_three() {
        assert_eq!(differing_axes(LAEF, SRMC), AxisSet::FULL);
        assert_eq!(axis_bonus(LAEF, SRMC), 3.0);
    }

    #[test]
    fn test_three_and_two_differing_axes() {
        assert_eq!(axis_bonus(LAEF, SRMF), 2.0);
        assert_eq!(axis_bonus(LAEF, LRMF), 0.0);
    }

    #[test]
    fn test_identical_codes_penalised() {
        assert!(differing_axes(SAMC, SAMC).is_empty());
        assert_eq!(axis_bonus(SAMC, SAMC), -2.0);
    }

    #[test]
    fn test_bonus_is_symmetric_and_in_range() {
        for a in PersonalityType::ALL {
            for b in PersonalityType::ALL {
                let x = axis_bonus(a, b);
                assert_eq!(x, axis_bonus(b, a));
                assert!([3.0, 2.0, 0.0, -2.0].contains(&x), "{}-{} -> {}", a, b, x);
            }
        }
    }
}
