//! Seam for narrative content providers.
//!
//! The engine knows nothing about titles, conversation examples or activity
//! tips. It only fixes the *shape* of the key such content is filed under:
//! the tier plus the set of axes on which the two types differ.
//!
//! # Implementing a provider
//!
//! ```rust
//! use sayu_chemistry::narrative::{NarrativeKey, NarrativeSource};
//! use sayu_chemistry::tier::ChemistryLevel;
//! use sayu_chemistry::types::Axis;
//!
//! struct Titles;
//!
//! impl NarrativeSource for Titles {
//!     type Content = &'static str;
//!
//!     fn lookup(&self, key: &NarrativeKey) -> Option<&'static str> {
//!         match (key.level, key.differing.len()) {
//!             (ChemistryLevel::Platinum, 4) => Some("Complete opposites"),
//!             (_, 1) if key.differing.contains(Axis::Viewing) => Some("Together yet apart"),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use crate::chemistry::ChemistryScore;
use crate::tier::ChemistryLevel;
use crate::types::AxisSet;

/// Lookup key for narrative content: `(tier, which axes differ)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NarrativeKey {
    /// Tier of the score.
    pub level: ChemistryLevel,
    /// Axes on which the two types differ.
    pub differing: AxisSet,
}

impl NarrativeKey {
    /// Number of distinct keys: 4 tiers × 16 axis subsets.
    pub const SPACE: usize = 4 * 16;

    /// Dense index in `0..SPACE`, for table-backed providers.
    pub const fn index(&self) -> usize {
        (self.level as usize) * 16 + self.differing.bits() as usize
    }
}

/// A provider of narrative content keyed by [`NarrativeKey`].
///
/// Implemented outside this crate by content banks; the engine only calls it
/// through [`NarrativeSource::for_score`].
pub trait NarrativeSource {
    /// Whatever the provider hands back (a title, a template, a record).
    type Content;

    /// Content for `key`, if the provider has any.
    fn lookup(&self, key: &NarrativeKey) -> Option<Self::Content>;

    /// Content for a computed score.
    fn for_score(&self, score: &ChemistryScore) -> Option<Self::Content> {
        self.lookup(&score.narrative_key())
    }
}
