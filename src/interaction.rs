//! Slot-by-slot interaction scoring.
//!
//! Two stacks are compared **slot against same slot** only: primary with
//! primary, auxiliary with auxiliary, and so on. There is no 4×4 cross product.
//! Each comparison contributes
//!
//! ```text
//! weight_a × weight_b × multiplier(func_a, func_b)
//! ```
//!
//! where the weights come from [`SlotWeights`] (the same weight on both sides)
//! and the multiplier from [`MULTIPLIER_TABLE`], keyed by the ordered pair
//! `"{func_a}-{func_b}"`. Pairs missing from the table resolve to
//! [`Multiplier::Default`] rather than being silently substituted.
//!
//! Every multiplier and weight is an exact binary fraction, so contributions
//! sum exactly and equal totals compare equal whatever the summation order.

use core::fmt;

use crate::types::{CognitiveFunction, FunctionStack, Slot};

/// Multiplier applied to pairs absent from [`MULTIPLIER_TABLE`].
pub const DEFAULT_MULTIPLIER: f32 = 1.0;

// ─── FunctionPair ────────────────────────────────────────────────────────────

/// Ordered pair of functions; the lookup key of the multiplier table.
///
/// Displays as `"{a}-{b}"`, e.g. `Le-Se`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionPair {
    /// Function on the first type's side.
    pub a: CognitiveFunction,
    /// Function on the second type's side.
    pub b: CognitiveFunction,
}

impl FunctionPair {
    /// Build the key for `a` against `b`.
    pub const fn new(a: CognitiveFunction, b: CognitiveFunction) -> Self {
        Self { a, b }
    }
}

impl fmt::Display for FunctionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

// ─── Multiplier table ────────────────────────────────────────────────────────

/// Listed function-pair multipliers.
///
/// Opposite poles of one axis energise each other (`Le-Se`, `Ai-Ri`, …); equal
/// poles score lower, the lone-viewing and exploration slots lowest. `Se-Se`
/// and every cross-axis pair are unlisted.
pub const MULTIPLIER_TABLE: [(FunctionPair, f32); 15] = {
    use CognitiveFunction::*;
    [
        (FunctionPair::new(Le, Le), 0.75),
        (FunctionPair::new(Le, Se), 1.5),
        (FunctionPair::new(Se, Le), 1.5),
        (FunctionPair::new(Ai, Ai), 1.25),
        (FunctionPair::new(Ri, Ri), 1.25),
        (FunctionPair::new(Ai, Ri), 2.0),
        (FunctionPair::new(Ri, Ai), 2.0),
        (FunctionPair::new(Ee, Ee), 1.25),
        (FunctionPair::new(Me, Me), 1.25),
        (FunctionPair::new(Ee, Me), 2.0),
        (FunctionPair::new(Me, Ee), 2.0),
        (FunctionPair::new(Ci, Ci), 0.5),
        (FunctionPair::new(Fi, Fi), 0.5),
        (FunctionPair::new(Ci, Fi), 1.5),
        (FunctionPair::new(Fi, Ci), 1.5),
    ]
};

/// Result of a multiplier lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Multiplier {
    /// The pair is listed in [`MULTIPLIER_TABLE`].
    Known(f32),
    /// The pair is unlisted; [`DEFAULT_MULTIPLIER`] applies.
    Default,
}

impl Multiplier {
    /// Look up the multiplier for `a` against `b`.
    pub fn lookup(a: CognitiveFunction, b: CognitiveFunction) -> Self {
        let key = FunctionPair::new(a, b);
        MULTIPLIER_TABLE
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(Multiplier::Default, |&(_, m)| Multiplier::Known(m))
    }

    /// Numeric value, resolving [`Multiplier::Default`].
    pub const fn value(self) -> f32 {
        match self {
            Multiplier::Known(m) => m,
            Multiplier::Default => DEFAULT_MULTIPLIER,
        }
    }

    /// Whether the fallback path was taken.
    pub const fn is_default(self) -> bool {
        matches!(self, Multiplier::Default)
    }
}

// ─── SlotWeights ─────────────────────────────────────────────────────────────

/// Per-slot weights, applied identically to both sides of a comparison.
///
/// Default: primary 2, auxiliary 1, tertiary −1, inferior −2.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotWeights {
    /// Weight of the dominant slot.
    pub primary: f32,
    /// Weight of the supporting slot.
    pub auxiliary: f32,
    /// Weight of the developing slot.
    pub tertiary: f32,
    /// Weight of the least conscious slot.
    pub inferior: f32,
}

impl SlotWeights {
    /// The standard weights.
    pub const fn standard() -> Self {
        Self {
            primary: 2.0,
            auxiliary: 1.0,
            tertiary: -1.0,
            inferior: -2.0,
        }
    }

    /// Weight for `slot`.
    pub const fn get(&self, slot: Slot) -> f32 {
        match slot {
            Slot::Primary => self.primary,
            Slot::Auxiliary => self.auxiliary,
            Slot::Tertiary => self.tertiary,
            Slot::Inferior => self.inferior,
        }
    }
}

impl Default for SlotWeights {
    fn default() -> Self {
        Self::standard()
    }
}

// ─── Scoring ─────────────────────────────────────────────────────────────────

/// Score one interaction: `weight_a × weight_b × multiplier(func_a, func_b)`.
pub fn interaction(
    func_a: CognitiveFunction,
    weight_a: f32,
    func_b: CognitiveFunction,
    weight_b: f32,
) -> f32 {
    weight_a * weight_b * Multiplier::lookup(func_a, func_b).value()
}

/// Same-slot contributions of `a` against `b`, in stack order.
pub fn slot_interactions(a: &FunctionStack, b: &FunctionStack, weights: &SlotWeights) -> [f32; 4] {
    Slot::ALL.map(|slot| {
        let w = weights.get(slot);
        interaction(a.get(slot), w, b.get(slot), w)
    })
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{function_stack_of, PersonalityType};
    use CognitiveFunction::*;

    #[test]
    fn test_pair_key_format() {
        let mut buf = heapless::String::<8>::new();
        core::fmt::write(&mut buf, format_args!("{}", FunctionPair::new(Le, Se))).unwrap();
        assert_eq!(buf.as_str(), "Le-Se");
    }

    #[test]
    fn test_table_keys_are_unique() {
        for (i, (a, _)) in MULTIPLIER_TABLE.iter().enumerate() {
            for (b, _) in &MULTIPLIER_TABLE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_known_lookup() {
        assert_eq!(Multiplier::lookup(Le, Se), Multiplier::Known(1.5));
        assert_eq!(Multiplier::lookup(Ci, Ci), Multiplier::Known(0.5));
        assert!(!Multiplier::lookup(Ai, Ri).is_default());
    }

    #[test]
    fn test_unlisted_pair_falls_back_to_default() {
        let m = Multiplier::lookup(Se, Se);
        assert!(m.is_default());
        assert!((m.value() - DEFAULT_MULTIPLIER).abs() < f32::EPSILON);
        assert!(Multiplier::lookup(Li, Ae).is_default());
    }

    #[test]
    fn test_interaction_formula() {
        // 2 × 2 × 1.5
        assert!((interaction(Le, 2.0, Se, 2.0) - 6.0).abs() < f32::EPSILON);
        // negative weights square to positive: (−1)(−1) × 1.25
        assert!((interaction(Ee, -1.0, Ee, -1.0) - 1.25).abs() < f32::EPSILON);
        // default path: 2 × 2 × 1.0
        assert!((interaction(Se, 2.0, Se, 2.0) - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_slot_interactions_compare_same_slots_only() {
        let a = function_stack_of(PersonalityType::LAEF);
        let b = function_stack_of(PersonalityType::SAEF);
        let got = slot_interactions(&a, &b, &SlotWeights::standard());
        // Le-Se 4×1.5, Ai-Ai 1×1.25, Ee-Ee 1×1.25, Ci-Ci 4×0.5
        assert_eq!(got, [6.0, 1.25, 1.25, 2.0]);
    }

    #[test]
    fn test_default_weights() {
        let w = SlotWeights::default();
        assert_eq!(
            Slot::ALL.map(|s| w.get(s)),
            [2.0, 1.0, -1.0, -2.0]
        );
    }
}
