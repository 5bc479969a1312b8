//! # sayu-chemistry
//!
//! Deterministic compatibility chemistry between the 16 SAYU art-personality types.
//!
//! ---
//!
//! ## Four letters, four functions, one number
//!
//! A SAYU type is a four-letter code, one pole per axis:
//!
//! | Axis | Poles |
//! |------|-------|
//! | Viewing | **L**one / **S**hared |
//! | Perception | **A**bstract / **R**epresentational |
//! | Reflection | **E**motional / **M**eaning |
//! | Exploration | **F**low / **C**onstructive |
//!
//! Each code fixes an ordered stack of four cognitive functions. Two types are
//! compared slot by slot: primary against primary, auxiliary against auxiliary,
//! and so on. Every slot contributes
//!
//! ```text
//! weight_a × weight_b × multiplier(function_a, function_b)
//! ```
//!
//! and a bonus rewards pairs that differ on many axes. The sum is the chemistry
//! total, which is classified into a tier and normalised to a percentage.
//!
//! > Opposites complete each other; mirrors only reflect.
//!
//! Everything is pure. The same two codes always produce the same score, in
//! either order.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! code → PersonalityType → FunctionStack ─┐
//!                                          ├→ slot interactions ─┐
//! code → PersonalityType → FunctionStack ─┘                      ├→ total → ChemistryLevel
//!                      └──── differing axes → axis bonus ────────┘      ↓
//!                                                                    percentage
//!
//! all 120 pairs → ChemistryMatrix → MatchQuery (best / worst / challenging)
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`types`] | [`PersonalityType`], [`FunctionStack`], [`Axis`] | The 16 codes, their axes and function stacks |
//! | [`interaction`] | [`Multiplier`], [`SlotWeights`] | Function-pair multipliers and weighted slot interactions |
//! | [`bonus`] | [`AxisBonusTable`] | Reward for differing axes |
//! | [`tier`] | [`ChemistryLevel`], [`TierThresholds`] | Total → tier and percentage |
//! | [`chemistry`] | [`Chemistry`], [`ChemistryScore`], [`ChemistryConfig`] | Single-pair scoring |
//! | [`matrix`] | [`ChemistryMatrix`], [`PairKey`] | All 120 unique pairs |
//! | [`query`] | [`MatchQuery`], [`Match`] | Ranked match lists per type |
//! | [`narrative`] | [`NarrativeKey`], [`NarrativeSource`] | Hook for narrative content keyed by tier and axes |
//! | [`synergy`] | [`synergy_score`] | Legacy axis-synergy percentage |
//! | [`error`] | [`ChemistryError`] | Unknown codes and refused self-pairs |
//! | `export` | `MatrixExport` | Serialisable matrix for content tooling (requires `serde` feature) |
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default and allocates only while building a
//! matrix. Enable the `std` feature for the process-wide
//! [`ChemistryMatrix::shared`] table and the shortcut queries in [`query`].
//! Enable `serde` for serialisation of every public type and the `export`
//! module. Enable `python-ffi` for PyO3 bindings.
//!
//! ## License
//!
//! Business Source License 1.1.

#![cfg_attr(not(any(feature = "std", feature = "python-ffi", test)), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

pub mod types;
pub mod error;
pub mod interaction;
pub mod bonus;
pub mod tier;
pub mod chemistry;
pub mod narrative;
pub mod matrix;
pub mod query;
pub mod synergy;
#[cfg(feature = "serde")]
pub mod export;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use bonus::{axis_bonus, differing_axes, AxisBonusTable};
pub use chemistry::{
    score_pair, Chemistry, ChemistryConfig, ChemistryScore, SelfPairPolicy, SlotBreakdown,
};
pub use error::{ChemistryError, Result};
pub use interaction::{interaction, slot_interactions, Multiplier, SlotWeights};
pub use matrix::{build_matrix, build_matrix_with, ChemistryMatrix, PairKey};
pub use narrative::{NarrativeKey, NarrativeSource};
pub use query::{Match, MatchList, MatchQuery};
pub use synergy::synergy_score;
pub use tier::{classify, ChemistryLevel, TierThresholds};
pub use types::{
    function_stack_of, function_stack_of_code, Axis, AxisSet, CognitiveFunction, FunctionStack,
    PersonalityType, Slot,
};
