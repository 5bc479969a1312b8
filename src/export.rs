//! Serialisable export of the chemistry matrix for content-generation tooling.
//!
//! Batch tooling attaches narrative templates per pair; it needs each pair's
//! key, tier, percentage and which axes differ, flat and self-describing. The
//! export is derived from a built [`ChemistryMatrix`] and is never fed back
//! into scoring.
//!
//! # Example
//!
//! ```rust,ignore
//! use sayu_chemistry::export::MatrixExport;
//! use sayu_chemistry::matrix::ChemistryMatrix;
//!
//! let export = MatrixExport::from_matrix(&ChemistryMatrix::build());
//! let json = serde_json::to_string_pretty(&export).unwrap();
//! ```
//!
//! Requires the `serde` feature.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::chemistry::{ChemistryScore, SlotBreakdown};
use crate::matrix::{ChemistryMatrix, PairKey};
use crate::synergy::synergy_score;
use crate::tier::ChemistryLevel;
use crate::types::{Axis, PersonalityType};

/// Current export format version.
pub const EXPORT_VERSION: u16 = 1;

/// All pairs of a matrix, flattened.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct MatrixExport {
    /// Format version, [`EXPORT_VERSION`] for new exports.
    pub version: u16,
    /// One record per unordered pair, sorted by key.
    pub pairs: Vec<PairRecord>,
}

/// One pair of the export.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct PairRecord {
    /// Canonical key, e.g. `"LAEC-LAEF"`.
    pub key: String,
    /// Lexicographically smaller type.
    pub type_a: PersonalityType,
    /// Lexicographically larger type.
    pub type_b: PersonalityType,
    /// Chemistry total.
    pub total: f32,
    /// The five contributions.
    pub breakdown: SlotBreakdown,
    /// Tier.
    pub level: ChemistryLevel,
    /// Normalised chemistry in [0, 100].
    pub percentage: u8,
    /// Axes on which the pair differs, in code-position order.
    pub differing_axes: Vec<Axis>,
    /// Legacy axis-synergy percentage of the same pair.
    pub synergy: u8,
}

impl From<&ChemistryScore> for PairRecord {
    fn from(s: &ChemistryScore) -> Self {
        let key = PairKey::new(s.type_a, s.type_b);
        Self {
            key: key.to_string(),
            type_a: key.lo,
            type_b: key.hi,
            total: s.total,
            breakdown: s.breakdown,
            level: s.level,
            percentage: s.percentage,
            differing_axes: s.differing.iter().collect(),
            synergy: synergy_score(s.type_a, s.type_b),
        }
    }
}

impl MatrixExport {
    /// Flatten `matrix`.
    pub fn from_matrix(matrix: &ChemistryMatrix) -> Self {
        let mut pairs: Vec<PairRecord> = matrix.iter().map(PairRecord::from).collect();
        pairs.sort_by(|a, b| a.key.cmp(&b.key));
        Self {
            version: EXPORT_VERSION,
            pairs,
        }
    }

    /// Number of pair records.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Record for `{a, b}`, if exported.
    pub fn find(&self, a: PersonalityType, b: PersonalityType) -> Option<&PairRecord> {
        let key = PairKey::new(a, b);
        self.pairs
            .iter()
            .find(|r| r.type_a == key.lo && r.type_b == key.hi)
    }

    /// Records at `level`.
    pub fn at_level(&self, level: ChemistryLevel) -> impl Iterator<Item = &PairRecord> + '_ {
        self.pairs.iter().filter(move |r| r.level == level)
    }
}
