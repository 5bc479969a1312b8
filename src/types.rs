//! The 16 personality types, their trait axes, and the cognitive-function stack
//! each type derives.
//!
//! A type code is four letters, one pole per axis:
//!
//! ```text
//! position  axis         poles
//!    0      Viewing      L (lone)      / S (shared)
//!    1      Perception   A (abstract)  / R (representational)
//!    2      Reflection   E (emotional) / M (meaning)
//!    3      Exploration  F (flow)      / C (constructive)
//! ```
//!
//! Every code resolves to a [`FunctionStack`] of four conscious functions. The
//! first three slots carry the extraverted or introverted form of the type's own
//! pole; the inferior slot carries the *opposite* exploration pole (an `F` type
//! has `Ci` as its inferior, a `C` type has `Fi`).
//!
//! # Invariants
//!
//! - Exactly 16 codes parse; everything else is [`ChemistryError::UnknownType`].
//! - `function_stack_of` is total over [`PersonalityType`] and needs no validation.
//! - The four slots of a stack are pairwise distinct.
//! - Ordering of [`PersonalityType`] is lexicographic by code, not declaration order.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::{ChemistryError, Result};

// ─── Axis ────────────────────────────────────────────────────────────────────

/// One of the four independent binary trait axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Alone vs. together (`L` / `S`).
    Viewing,
    /// Abstract vs. representational (`A` / `R`).
    Perception,
    /// Emotional vs. meaning-oriented (`E` / `M`).
    Reflection,
    /// Free flow vs. constructive (`F` / `C`).
    Exploration,
}

impl Axis {
    /// All four axes in code-position order.
    pub const ALL: [Axis; 4] = [
        Axis::Viewing,
        Axis::Perception,
        Axis::Reflection,
        Axis::Exploration,
    ];

    /// Character position of this axis inside a type code.
    pub const fn position(self) -> usize {
        match self {
            Axis::Viewing => 0,
            Axis::Perception => 1,
            Axis::Reflection => 2,
            Axis::Exploration => 3,
        }
    }

    /// The two letters this axis admits, first pole first.
    pub const fn poles(self) -> (char, char) {
        match self {
            Axis::Viewing => ('L', 'S'),
            Axis::Perception => ('A', 'R'),
            Axis::Reflection => ('E', 'M'),
            Axis::Exploration => ('F', 'C'),
        }
    }

    /// Lowercase axis name, e.g. `"viewing"`.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::Viewing => "viewing",
            Axis::Perception => "perception",
            Axis::Reflection => "reflection",
            Axis::Exploration => "exploration",
        }
    }

    const fn bit(self) -> u8 {
        1 << self.position()
    }
}

// ─── AxisSet ─────────────────────────────────────────────────────────────────

/// A set of axes stored as a 4-bit mask.
///
/// Used to report which axes differ between two codes; narrative collaborators
/// key their content on it together with the tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSet(u8);

impl AxisSet {
    /// The empty set.
    pub const EMPTY: AxisSet = AxisSet(0);

    /// All four axes.
    pub const FULL: AxisSet = AxisSet(0b1111);

    /// Add `axis` to the set.
    pub fn insert(&mut self, axis: Axis) {
        self.0 |= axis.bit();
    }

    /// Whether `axis` is in the set.
    pub const fn contains(self, axis: Axis) -> bool {
        self.0 & axis.bit() != 0
    }

    /// Number of axes in the set (0–4).
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw 4-bit mask; bit `i` is the axis at code position `i`.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Iterate the contained axes in code-position order.
    pub fn iter(self) -> impl Iterator<Item = Axis> {
        Axis::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

impl FromIterator<Axis> for AxisSet {
    fn from_iter<I: IntoIterator<Item = Axis>>(iter: I) -> Self {
        let mut set = AxisSet::EMPTY;
        for axis in iter {
            set.insert(axis);
        }
        set
    }
}

// ─── CognitiveFunction ───────────────────────────────────────────────────────

/// The 16 cognitive-function symbols: each axis pole in an extraverted (`e`)
/// and an introverted (`i`) form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum CognitiveFunction {
    Le,
    Li,
    Se,
    Si,
    Ae,
    Ai,
    Re,
    Ri,
    Ee,
    Ei,
    Me,
    Mi,
    Fe,
    Fi,
    Ce,
    Ci,
}

impl CognitiveFunction {
    /// Two-character symbol, e.g. `"Le"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            CognitiveFunction::Le => "Le",
            CognitiveFunction::Li => "Li",
            CognitiveFunction::Se => "Se",
            CognitiveFunction::Si => "Si",
            CognitiveFunction::Ae => "Ae",
            CognitiveFunction::Ai => "Ai",
            CognitiveFunction::Re => "Re",
            CognitiveFunction::Ri => "Ri",
            CognitiveFunction::Ee => "Ee",
            CognitiveFunction::Ei => "Ei",
            CognitiveFunction::Me => "Me",
            CognitiveFunction::Mi => "Mi",
            CognitiveFunction::Fe => "Fe",
            CognitiveFunction::Fi => "Fi",
            CognitiveFunction::Ce => "Ce",
            CognitiveFunction::Ci => "Ci",
        }
    }

    /// The axis whose pole this function expresses.
    pub const fn axis(self) -> Axis {
        use CognitiveFunction::*;
        match self {
            Le | Li | Se | Si => Axis::Viewing,
            Ae | Ai | Re | Ri => Axis::Perception,
            Ee | Ei | Me | Mi => Axis::Reflection,
            Fe | Fi | Ce | Ci => Axis::Exploration,
        }
    }

    /// `true` for the extraverted (`e`) form.
    pub const fn is_extraverted(self) -> bool {
        use CognitiveFunction::*;
        matches!(self, Le | Se | Ae | Re | Ee | Me | Fe | Ce)
    }
}

impl fmt::Display for CognitiveFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Slot / FunctionStack ────────────────────────────────────────────────────

/// A position in a function stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    /// Dominant function.
    Primary,
    /// Supporting function.
    Auxiliary,
    /// Developing function.
    Tertiary,
    /// Least conscious function.
    Inferior,
}

impl Slot {
    /// All four slots in stack order.
    pub const ALL: [Slot; 4] = [Slot::Primary, Slot::Auxiliary, Slot::Tertiary, Slot::Inferior];
}

/// Ordered four-slot cognitive-function assignment of one type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionStack {
    /// Dominant function.
    pub primary: CognitiveFunction,
    /// Supporting function.
    pub auxiliary: CognitiveFunction,
    /// Developing function.
    pub tertiary: CognitiveFunction,
    /// Least conscious function.
    pub inferior: CognitiveFunction,
}

impl FunctionStack {
    /// The function held in `slot`.
    pub const fn get(&self, slot: Slot) -> CognitiveFunction {
        match slot {
            Slot::Primary => self.primary,
            Slot::Auxiliary => self.auxiliary,
            Slot::Tertiary => self.tertiary,
            Slot::Inferior => self.inferior,
        }
    }

    /// The four functions in stack order.
    pub const fn slots(&self) -> [CognitiveFunction; 4] {
        [self.primary, self.auxiliary, self.tertiary, self.inferior]
    }
}

// ─── PersonalityType ─────────────────────────────────────────────────────────

/// One of the 16 personality type codes.
///
/// Construct from text with [`str::parse`] or [`PersonalityType::from_code`];
/// an unknown code is rejected there, so every downstream function can take a
/// `PersonalityType` without re-validating.
///
/// ```rust
/// use sayu_chemistry::types::{Axis, PersonalityType};
///
/// let t: PersonalityType = "LAEF".parse().unwrap();
/// assert_eq!(t.letter(Axis::Reflection), 'E');
/// assert!("XXXX".parse::<PersonalityType>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum PersonalityType {
    LAEF,
    LAEC,
    LAMF,
    LAMC,
    LREF,
    LREC,
    LRMF,
    LRMC,
    SAEF,
    SAEC,
    SAMF,
    SAMC,
    SREF,
    SREC,
    SRMF,
    SRMC,
}

impl PersonalityType {
    /// The canonical code set, in the product's canonical order.
    pub const ALL: [PersonalityType; 16] = {
        use PersonalityType::*;
        [
            LAEF, LAEC, LAMF, LAMC, LREF, LREC, LRMF, LRMC,
            SAEF, SAEC, SAMF, SAMC, SREF, SREC, SRMF, SRMC,
        ]
    };

    /// Number of personality types.
    pub const COUNT: usize = 16;

    /// The four-letter code.
    pub const fn as_str(self) -> &'static str {
        use PersonalityType::*;
        match self {
            LAEF => "LAEF",
            LAEC => "LAEC",
            LAMF => "LAMF",
            LAMC => "LAMC",
            LREF => "LREF",
            LREC => "LREC",
            LRMF => "LRMF",
            LRMC => "LRMC",
            SAEF => "SAEF",
            SAEC => "SAEC",
            SAMF => "SAMF",
            SAMC => "SAMC",
            SREF => "SREF",
            SREC => "SREC",
            SRMF => "SRMF",
            SRMC => "SRMC",
        }
    }

    /// Parse a code, failing with [`ChemistryError::UnknownType`].
    pub fn from_code(code: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == code)
            .ok_or_else(|| {
                tracing::debug!(code, "rejected unknown personality type code");
                ChemistryError::unknown_type(code)
            })
    }

    /// The letter this type holds on `axis`.
    pub const fn letter(self, axis: Axis) -> char {
        self.as_str().as_bytes()[axis.position()] as char
    }

    /// Whether this type holds the first pole (`L`, `A`, `E`, `F`) on `axis`.
    pub const fn is_first_pole(self, axis: Axis) -> bool {
        self.letter(axis) == axis.poles().0
    }

    /// This type's conscious function stack.
    pub const fn function_stack(self) -> FunctionStack {
        use CognitiveFunction::*;
        FunctionStack {
            primary: if self.is_first_pole(Axis::Viewing) { Le } else { Se },
            auxiliary: if self.is_first_pole(Axis::Perception) { Ai } else { Ri },
            tertiary: if self.is_first_pole(Axis::Reflection) { Ee } else { Me },
            inferior: if self.is_first_pole(Axis::Exploration) { Ci } else { Fi },
        }
    }

    /// The four unconscious (shadow) functions, one per slot.
    ///
    /// Display-only; scoring never reads the shadow.
    pub const fn shadow_stack(self) -> FunctionStack {
        use CognitiveFunction::*;
        FunctionStack {
            primary: if self.is_first_pole(Axis::Viewing) { Li } else { Si },
            auxiliary: if self.is_first_pole(Axis::Perception) { Ae } else { Re },
            tertiary: if self.is_first_pole(Axis::Reflection) { Ei } else { Mi },
            inferior: if self.is_first_pole(Axis::Exploration) { Fe } else { Ce },
        }
    }
}

impl PartialOrd for PersonalityType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PersonalityType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonalityType {
    type Err = ChemistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl TryFrom<&str> for PersonalityType {
    type Error = ChemistryError;

    fn try_from(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

/// Function stack of a validated type.
pub const fn function_stack_of(t: PersonalityType) -> FunctionStack {
    t.function_stack()
}

/// Function stack of a raw code; unknown codes fail with [`ChemistryError::UnknownType`].
pub fn function_stack_of_code(code: &str) -> Result<FunctionStack> {
    PersonalityType::from_code(code).map(function_stack_of)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
