//! Ranked and filtered match lists for one type.
//!
//! | Query | Selection | Order |
//! |-------|-----------|-------|
//! | [`MatchQuery::best_matches`] | all partners | total descending |
//! | [`MatchQuery::worst_matches`] | all partners | total ascending |
//! | [`MatchQuery::challenging_matches`] | percentage in [50, 70] | total ascending |
//! | [`MatchQuery::all_chemistries_for`] | all partners | canonical partner order |
//!
//! Ties on total are broken by the partner's code, lexicographically, so every
//! list is fully deterministic. Requests for more than the 15 partners return
//! all 15.
//!
//! Queries only run over a complete matrix: [`MatchQuery::new`] refuses a
//! matrix built from a subset of the types with
//! [`ChemistryError::IncompleteMatrix`], so no ranking is ever short.
//!
//! The challenging band is a "growth zone" of middling chemistry, deliberately
//! distinct from the globally worst matches.

use core::cmp::Ordering;
use core::ops::RangeInclusive;

use heapless::FnvIndexMap;

use crate::chemistry::ChemistryScore;
use crate::error::{ChemistryError, Result};
use crate::matrix::{ChemistryMatrix, MAX_PAIRS};
use crate::types::PersonalityType;

/// Partners of one type: every other type.
pub const MAX_PARTNERS: usize = PersonalityType::COUNT - 1;

/// Default length of best / worst lists.
pub const DEFAULT_MATCHES: usize = 5;

/// Default length of the challenging list.
pub const DEFAULT_CHALLENGING: usize = 3;

/// Percentage band of the challenging list, inclusive.
pub const CHALLENGING_BAND: RangeInclusive<u8> = 50..=70;

/// A ranked partner.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    /// The other type.
    pub partner: PersonalityType,
    /// Chemistry of the queried type with `partner`.
    pub score: ChemistryScore,
}

/// Up to [`MAX_PARTNERS`] matches.
pub type MatchList = heapless::Vec<Match, MAX_PARTNERS>;

/// Partner → score for one type. Capacity 16 (power of two for the index map).
pub type ChemistryMap = FnvIndexMap<PersonalityType, ChemistryScore, 16>;

/// Queries over a built [`ChemistryMatrix`].
#[derive(Clone, Copy, Debug)]
pub struct MatchQuery<'m> {
    matrix: &'m ChemistryMatrix,
}

impl<'m> MatchQuery<'m> {
    /// Query `matrix`, which must hold all [`MAX_PAIRS`] pairs.
    pub fn new(matrix: &'m ChemistryMatrix) -> Result<Self> {
        if matrix.len() != MAX_PAIRS {
            return Err(ChemistryError::IncompleteMatrix {
                pairs: matrix.len(),
                expected: MAX_PAIRS,
            });
        }
        Ok(Self { matrix })
    }

    /// The `n` highest-total partners of `t`.
    pub fn best_matches(&self, t: PersonalityType, n: usize) -> MatchList {
        let mut list = self.partners(t);
        list.sort_unstable_by(|x, y| descending(x, y));
        list.truncate(n);
        list
    }

    /// The `n` lowest-total partners of `t`.
    pub fn worst_matches(&self, t: PersonalityType, n: usize) -> MatchList {
        let mut list = self.partners(t);
        list.sort_unstable_by(|x, y| ascending(x, y));
        list.truncate(n);
        list
    }

    /// The `n` lowest-total partners whose percentage lies in [`CHALLENGING_BAND`].
    pub fn challenging_matches(&self, t: PersonalityType, n: usize) -> MatchList {
        let mut list = self.partners(t);
        list.retain(|m| CHALLENGING_BAND.contains(&m.score.percentage));
        list.sort_unstable_by(|x, y| ascending(x, y));
        list.truncate(n);
        list
    }

    /// Every partner of `t` with its score, in canonical partner order.
    pub fn all_chemistries_for(&self, t: PersonalityType) -> ChemistryMap {
        let mut map = ChemistryMap::new();
        for m in self.partners(t) {
            // 15 partners into capacity 16
            let inserted = map.insert(m.partner, m.score);
            debug_assert!(inserted.is_ok());
        }
        map
    }

    fn partners(&self, t: PersonalityType) -> MatchList {
        let mut list = MatchList::new();
        for partner in PersonalityType::ALL {
            if partner == t {
                continue;
            }
            // a complete matrix holds every distinct pair
            if let Some(score) = self.matrix.get(t, partner) {
                let pushed = list.push(Match { partner, score: *score });
                debug_assert!(pushed.is_ok());
            }
        }
        list
    }
}

fn ascending(x: &Match, y: &Match) -> Ordering {
    x.score
        .total
        .total_cmp(&y.score.total)
        .then_with(|| x.partner.cmp(&y.partner))
}

fn descending(x: &Match, y: &Match) -> Ordering {
    y.score
        .total
        .total_cmp(&x.score.total)
        .then_with(|| x.partner.cmp(&y.partner))
}

// ─── Shared-matrix shortcuts ─────────────────────────────────────────────────

/// The shared matrix is built from all 16 types, so it is always complete.
#[cfg(feature = "std")]
fn shared_query() -> MatchQuery<'static> {
    MatchQuery {
        matrix: ChemistryMatrix::shared(),
    }
}

/// [`MatchQuery::best_matches`] against [`ChemistryMatrix::shared`].
#[cfg(feature = "std")]
pub fn best_matches(t: PersonalityType, n: usize) -> MatchList {
    shared_query().best_matches(t, n)
}

/// [`MatchQuery::worst_matches`] against [`ChemistryMatrix::shared`].
#[cfg(feature = "std")]
pub fn worst_matches(t: PersonalityType, n: usize) -> MatchList {
    shared_query().worst_matches(t, n)
}

/// [`MatchQuery::challenging_matches`] against [`ChemistryMatrix::shared`].
#[cfg(feature = "std")]
pub fn challenging_matches(t: PersonalityType, n: usize) -> MatchList {
    shared_query().challenging_matches(t, n)
}

/// [`MatchQuery::all_chemistries_for`] against [`ChemistryMatrix::shared`].
#[cfg(feature = "std")]
pub fn all_chemistries_for(t: PersonalityType) -> ChemistryMap {
    shared_query().all_chemistries_for(t)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
