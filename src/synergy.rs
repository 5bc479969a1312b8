//! Legacy axis-synergy percentage.
//!
//! An older, coarser compatibility figure still shown next to the synergy
//! narratives: start from 40 and add fixed points per axis depending on whether
//! the two types agree on it.
//!
//! | axis | same | different |
//! |------|-----:|----------:|
//! | Viewing | 20 | 15 |
//! | Perception | 15 | 20 |
//! | Reflection | 15 | 20 |
//! | Exploration | 10 | 15 |
//!
//! The result is capped at 100. Identical types score a fixed [`SAME_TYPE_SYNERGY`].
//! Independent of the function-stack chemistry; the two are never mixed.

use crate::matrix::PairKey;
use crate::types::{Axis, PersonalityType};

/// Starting points before any axis is compared.
pub const BASE_SYNERGY: u8 = 40;

/// Synergy of a type with itself.
pub const SAME_TYPE_SYNERGY: u8 = 85;

/// Points awarded on `axis` when the poles are `same` or not.
pub const fn axis_points(axis: Axis, same: bool) -> u8 {
    match (axis, same) {
        (Axis::Viewing, true) => 20,
        (Axis::Viewing, false) => 15,
        (Axis::Perception, true) | (Axis::Reflection, true) => 15,
        (Axis::Perception, false) | (Axis::Reflection, false) => 20,
        (Axis::Exploration, true) => 10,
        (Axis::Exploration, false) => 15,
    }
}

/// Synergy percentage of `a` with `b`, in [0, 100].
pub fn synergy_score(a: PersonalityType, b: PersonalityType) -> u8 {
    if a == b {
        return SAME_TYPE_SYNERGY;
    }
    let points: u8 = Axis::ALL
        .into_iter()
        .map(|axis| axis_points(axis, a.letter(axis) == b.letter(axis)))
        .sum();
    BASE_SYNERGY.saturating_add(points).min(100)
}

/// Lookup key of the synergy narrative for `a` and `b`.
///
/// Sorted, so both orders share one entry.
pub fn synergy_key(a: PersonalityType, b: PersonalityType) -> PairKey {
    PairKey::new(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PersonalityType::*;

    #[test]
    fn test_same_type_is_fixed() {
        for t in PersonalityType::ALL {
            assert_eq!(synergy_score(t, t), SAME_TYPE_SYNERGY);
        }
    }

    #[test]
    fn test_known_scores() {
        // only exploration differs: 40 + 20 + 15 + 15 + 15
        assert_eq!(synergy_score(LAEF, LAEC), 100);
        // only viewing differs: 40 + 15 + 15 + 15 + 10
        assert_eq!(synergy_score(LAEF, SAEF), 95);
        // all differ: 40 + 15 + 20 + 20 + 15, capped
        assert_eq!(synergy_score(LAEF, SRMC), 100);
    }

    #[test]
    fn test_scores_symmetric_and_bounded() {
        for a in PersonalityType::ALL {
            for b in PersonalityType::ALL {
                let s = synergy_score(a, b);
                assert_eq!(s, synergy_score(b, a));
                assert!((85..=100).contains(&s), "{}-{} -> {}", a, b, s);
            }
        }
    }

    #[test]
    fn test_key_is_sorted() {
        assert_eq!(synergy_key(LAEF, LAEC), synergy_key(LAEC, LAEF));
        assert_eq!(synergy_key(LAEF, LAEC).lo, LAEC);
    }
}
