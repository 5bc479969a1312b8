/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Single-pair chemistry: the four slot interactions plus the axis bonus,
//! classified into a tier.
//!
//! ```text
//! total = primary + auxiliary + tertiary + inferior + bonus
//! ```
//!
//! There are no hidden terms; [`SlotBreakdown::sum`] is the total.
//!
//! # Self-pairs
//!
//! A type scored against itself is governed by [`SelfPairPolicy`]:
//!
//! - [`SelfPairPolicy::Mirror`] (default): the breakdown and total are the true
//!   sums (bonus −2), but the score is flagged `mirror` and reported as
//!   Platinum at 100%.
//! - [`SelfPairPolicy::Reject`]: scoring fails with
//!   [`ChemistryError::InvalidPair`].
//!
//! The matrix never contains self-pairs under either policy.

use crate::bonus::{differing_axes, AxisBonusTable};
use crate::error::{ChemistryError, Result};
use crate::interaction::{slot_interactions, SlotWeights};
use crate::narrative::NarrativeKey;
use crate::tier::{ChemistryLevel, TierThresholds};
use crate::types::{AxisSet, PersonalityType};

// ─── Config ──────────────────────────────────────────────────────────────────

/// How a type scored against itself is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelfPairPolicy {
    /// Report the pair as a Platinum, 100% mirror match.
    #[default]
    Mirror,
    /// Refuse with [`ChemistryError::InvalidPair`].
    Reject,
}

/// Read-only scoring configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChemistryConfig {
    /// Per-slot weights, applied to both sides.
    pub slot_weights: SlotWeights,
    /// Tier lower bounds and percentage scale.
    pub thresholds: TierThresholds,
    /// Bonus per count of differing axes.
    pub bonus: AxisBonusTable,
    /// Self-pair handling.
    pub self_pair: SelfPairPolicy,
}

impl ChemistryConfig {
    /// The standard configuration every historical score was produced with.
    pub const fn standard() -> Self {
        Self {
            slot_weights: SlotWeights::standard(),
            thresholds: TierThresholds::standard(),
            bonus: AxisBonusTable::standard(),
            self_pair: SelfPairPolicy::Mirror,
        }
    }
}

impl Default for ChemistryConfig {
    fn default() -> Self {
        Self::standard()
    }
}

// ─── Score ───────────────────────────────────────────────────────────────────

/// The five contributions to a chemistry total.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotBreakdown {
    /// Primary-vs-primary interaction.
    pub primary: f32,
    /// Auxiliary-vs-auxiliary interaction.
    pub auxiliary: f32,
    /// Tertiary-vs-tertiary interaction.
    pub tertiary: f32,
    /// Inferior-vs-inferior interaction.
    pub inferior: f32,
    /// Axis-opposition bonus.
    pub bonus: f32,
}

impl SlotBreakdown {
    /// `primary + auxiliary + tertiary + inferior + bonus`.
    pub fn sum(&self) -> f32 {
        self.primary + self.auxiliary + self.tertiary + self.inferior + self.bonus
    }
}

/// Chemistry between two types.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChemistryScore {
    /// First type, as requested.
    pub type_a: PersonalityType,
    /// Second type, as requested.
    pub type_b: PersonalityType,
    /// Sum of the breakdown.
    ///
    /// For a mirror score this is the honest sum (bonus −2) and sits far below
    /// the reported `level` and `percentage`. Do not rank or classify mirror
    /// scores by `total`; use `level` / `percentage`, or skip mirrors.
    pub total: f32,
    /// The individual contributions.
    pub breakdown: SlotBreakdown,
    /// Tier of `total` (Platinum for a mirror score).
    pub level: ChemistryLevel,
    /// Normalised score in [0, 100] (100 for a mirror score).
    pub percentage: u8,
    /// Axes on which the two types differ.
    pub differing: AxisSet,
    /// Whether this is a type scored against itself.
    pub mirror: bool,
}

impl ChemistryScore {
    /// The type paired with `t`, or `None` if `t` is not part of this score.
    pub fn partner_of(&self, t: PersonalityType) -> Option<PersonalityType> {
        if t == self.type_a {
            Some(self.type_b)
        } else if t == self.type_b {
            Some(self.type_a)
        } else {
            None
        }
    }

    /// Key under which narrative collaborators file content for this score.
    pub fn narrative_key(&self) -> NarrativeKey {
        NarrativeKey {
            level: self.level,
            differing: self.differing,
        }
    }
}

// ─── Chemistry ───────────────────────────────────────────────────────────────

/// Scoring engine bound to one [`ChemistryConfig`].
///
/// Cheap to copy and free of interior state; every call is pure.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Chemistry {
    config: ChemistryConfig,
}

impl Chemistry {
    /// Engine using [`ChemistryConfig::standard`].
    pub const fn new() -> Self {
        Self::with_config(ChemistryConfig::standard())
    }

    /// Engine using `config`.
    pub const fn with_config(config: ChemistryConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub const fn config(&self) -> &ChemistryConfig {
        &self.config
    }

    /// Score `a` against `b`.
    ///
    /// Fails only for a self-pair under [`SelfPairPolicy::Reject`].
    pub fn score(&self, a: PersonalityType, b: PersonalityType) -> Result<ChemistryScore> {
        let mirror = a == b;
        if mirror && self.config.self_pair == SelfPairPolicy::Reject {
            return Err(ChemistryError::InvalidPair { code: a.as_str() });
        }
        Ok(self.compute(a, b))
    }

    /// Score two raw codes; unknown codes fail with [`ChemistryError::UnknownType`].
    pub fn score_codes(&self, a: &str, b: &str) -> Result<ChemistryScore> {
        let a = PersonalityType::from_code(a)?;
        let b = PersonalityType::from_code(b)?;
        self.score(a, b)
    }

    /// Score without the self-pair policy check; identical types come back as
    /// a mirror score.
    pub(crate) fn compute(&self, a: PersonalityType, b: PersonalityType) -> ChemistryScore {
        let mirror = a == b;
        let [primary, auxiliary, tertiary, inferior] = slot_interactions(
            &a.function_stack(),
            &b.function_stack(),
            &self.config.slot_weights,
        );
        let differing = differing_axes(a, b);
        let breakdown = SlotBreakdown {
            primary,
            auxiliary,
            tertiary,
            inferior,
            bonus: self.config.bonus.for_count(differing.len()),
        };
        let total = breakdown.sum();

        let (level, percentage) = if mirror {
            (ChemistryLevel::Platinum, 100)
        } else {
            let c = self.config.thresholds.classify(total);
            (c.level, c.percentage)
        };

        tracing::trace!(a = a.as_str(), b = b.as_str(), total, "scored pair");

        ChemistryScore {
            type_a: a,
            type_b: b,
            total,
            breakdown,
            level,
            percentage,
            differing,
            mirror,
        }
    }
}

/// Score `a` against `b` with the standard configuration.
pub fn score_pair(a: PersonalityType, b: PersonalityType) -> Result<ChemistryScore> {
    Chemistry::new().score(a, b)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
