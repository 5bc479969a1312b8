/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! The complete compatibility reference table.
//!
//! # Algorithm
//!
//! Nested iteration over every type against every type. Identical pairs are
//! skipped; each remaining pair is reduced to its canonical [`PairKey`] (both
//! codes sorted lexicographically) and scored only the first time that key is
//! seen. For the 16 canonical types this yields exactly C(16,2) = 120 scores,
//! independent of iteration order.
//!
//! # Lifecycle
//!
//! Building is pure and repeatable. With the `std` feature,
//! [`ChemistryMatrix::shared`] holds one process-wide table behind a
//! `OnceLock`: unbuilt until first use, then immutable.
//!
//! # Invariants
//!
//! - No self-pairs and no duplicate unordered pairs.
//! - Capacity is fixed at [`MAX_PAIRS`]; no heap beyond the seen-set.

use core::fmt;

use hashbrown::HashSet;

use crate::chemistry::{Chemistry, ChemistryScore};
use crate::types::PersonalityType;

/// Number of unordered pairs of distinct types: C(16, 2).
pub const MAX_PAIRS: usize = PersonalityType::COUNT * (PersonalityType::COUNT - 1) / 2;

// ─── PairKey ─────────────────────────────────────────────────────────────────

/// Canonical key of an unordered pair: the two codes in lexicographic order.
///
/// Displays as `"{lo}-{hi}"`, e.g. `LAEC-LAEF`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairKey {
    /// Lexicographically smaller code.
    pub lo: PersonalityType,
    /// Lexicographically larger (or equal) code.
    pub hi: PersonalityType,
}

impl PairKey {
    /// Canonical key of `a` and `b`, in either order.
    pub fn new(a: PersonalityType, b: PersonalityType) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Whether `t` is one side of the pair.
    pub fn contains(&self, t: PersonalityType) -> bool {
        self.lo == t || self.hi == t
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

// ─── ChemistryMatrix ─────────────────────────────────────────────────────────

/// All unique pair scores of a type set. Read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct ChemistryMatrix {
    entries: heapless::Vec<ChemistryScore, MAX_PAIRS>,
}

impl ChemistryMatrix {
    /// Build the matrix for all 16 canonical types with the standard configuration.
    pub fn build() -> Self {
        build_matrix(&PersonalityType::ALL)
    }

    /// Process-wide matrix for the standard configuration, built on first use.
    ///
    /// Concurrent first callers block on a single build.
    #[cfg(feature = "std")]
    pub fn shared() -> &'static ChemistryMatrix {
        static SHARED: std::sync::OnceLock<ChemistryMatrix> = std::sync::OnceLock::new();
        SHARED.get_or_init(ChemistryMatrix::build)
    }

    /// Number of pair scores.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the matrix holds no scores.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scores in build order.
    pub fn as_slice(&self) -> &[ChemistryScore] {
        &self.entries
    }

    /// Iterate the scores in build order.
    pub fn iter(&self) -> core::slice::Iter<'_, ChemistryScore> {
        self.entries.iter()
    }

    /// Score of the unordered pair `{a, b}`; `None` for a self-pair or an
    /// absent type.
    pub fn get(&self, a: PersonalityType, b: PersonalityType) -> Option<&ChemistryScore> {
        let key = PairKey::new(a, b);
        self.entries
            .iter()
            .find(|s| PairKey::new(s.type_a, s.type_b) == key)
    }

    /// Every score involving `t`.
    pub fn for_type(&self, t: PersonalityType) -> impl Iterator<Item = &ChemistryScore> + '_ {
        self.entries
            .iter()
            .filter(move |s| s.type_a == t || s.type_b == t)
    }
}

impl<'a> IntoIterator for &'a ChemistryMatrix {
    type Item = &'a ChemistryScore;
    type IntoIter = core::slice::Iter<'a, ChemistryScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ─── Builder ─────────────────────────────────────────────────────────────────

/// Build the matrix for `types` with the standard configuration.
///
/// Repeated codes in `types` are absorbed by the seen-set.
pub fn build_matrix(types: &[PersonalityType]) -> ChemistryMatrix {
    build_matrix_with(&Chemistry::new(), types)
}

/// Build the matrix for `types` with `engine`.
pub fn build_matrix_with(engine: &Chemistry, types: &[PersonalityType]) -> ChemistryMatrix {
    let mut seen: HashSet<PairKey> = HashSet::with_capacity(MAX_PAIRS);
    let mut entries = heapless::Vec::new();

    for &a in types {
        for &b in types {
            if a == b {
                continue;
            }
            if !seen.insert(PairKey::new(a, b)) {
                continue;
            }
            // at most C(16, 2) distinct keys exist, so the push cannot overflow
            let pushed = entries.push(engine.compute(a, b));
            debug_assert!(pushed.is_ok());
        }
    }

    tracing::debug!(types = types.len(), pairs = entries.len(), "built chemistry matrix");
    ChemistryMatrix { entries }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use PersonalityType::*;

    #[test]
    fn test_matrix_has_120_unique_pairs() {
        let m = ChemistryMatrix::build();
        assert_eq!(m.len(), 120);
        assert_eq!(MAX_PAIRS, 120);

        let mut keys: heapless::Vec<PairKey, MAX_PAIRS> = m
            .iter()
            .map(|s| PairKey::new(s.type_a, s.type_b))
            .collect();
        keys.sort_unstable();
        for w in keys.windows(2) {
            assert_ne!(w[0], w[1], "duplicate pair {}", w[0]);
        }
    }

    #[test]
    fn test_matrix_has_no_self_pairs() {
        for s in &ChemistryMatrix::build() {
            assert_ne!(s.type_a, s.type_b);
            assert!(!s.mirror);
        }
    }

    #[test]
    fn test_each_type_appears_in_fifteen_pairs() {
        let m = ChemistryMatrix::build();
        for t in PersonalityType::ALL {
            assert_eq!(m.for_type(t).count(), 15, "{}", t);
        }
    }

    #[test]
    fn test_iteration_order_does_not_change_content() {
        let forward = ChemistryMatrix::build();
        let mut reversed = PersonalityType::ALL;
        reversed.reverse();
        let backward = build_matrix(&reversed);
        assert_eq!(backward.len(), 120);
        for s in &forward {
            let other = backward.get(s.type_a, s.type_b).unwrap();
            assert_eq!(other.total, s.total);
            assert_eq!(other.level, s.level);
        }
    }

    #[test]
    fn test_duplicate_input_codes_are_absorbed() {
        let m = build_matrix(&[LAEF, SAEF, LAEF, SRMC, SAEF]);
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn test_get_is_order_insensitive() {
        let m = ChemistryMatrix::build();
        let ab = m.get(LAEF, SRMC).unwrap();
        let ba = m.get(SRMC, LAEF).unwrap();
        assert_eq!(ab, ba);
        assert!(m.get(LAEF, LAEF).is_none());
    }

    #[test]
    fn test_pair_key_is_sorted() {
        let k = PairKey::new(LAEF, LAEC);
        assert_eq!(k.lo, LAEC);
        assert_eq!(k.hi, LAEF);
        assert_eq!(k, PairKey::new(LAEC, LAEF));
        assert!(k.contains(LAEF));
        assert!(!k.contains(SRMC));
    }

    #[test]
    fn test_pair_key_display() {
        let mut buf = heapless::String::<16>::new();
        core::fmt::write(&mut buf, format_args!("{}", PairKey::new(SAEF, LAEF))).unwrap();
        assert_eq!(buf.as_str(), "LAEF-SAEF");
    }

    #[test]
    fn test_repeated_builds_are_identical() {
        assert_eq!(ChemistryMatrix::build(), ChemistryMatrix::build());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_shared_matrix_is_built_once() {
        let a = ChemistryMatrix::shared() as *const ChemistryMatrix;
        let b = ChemistryMatrix::shared() as *const ChemistryMatrix;
        assert_eq!(a, b);
        assert_eq!(ChemistryMatrix::shared().len(), 120);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_concurrent_first_callers_share_one_matrix() {
        let barrier = std::sync::Arc::new(std::sync::Barrier::new(8));
        let handles: std::vec::Vec<_> = (0..8)
            .map(|_| {
                let barrier = std::sync::Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    ChemistryMatrix::shared() as *const ChemistryMatrix as usize
                })
            })
            .collect();
        let addrs: std::vec::Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let first = ChemistryMatrix::shared() as *const ChemistryMatrix as usize;
        assert!(addrs.iter().all(|a| *a == first), "{:?}", addrs);
        assert_eq!(ChemistryMatrix::shared(), &ChemistryMatrix::build());
    }
}
