//! Error taxonomy.
//!
//! Errors are raised at the point of invalid input and never replaced by a
//! fallback score: a defaulted chemistry would render as a plausible but wrong
//! percentage downstream.

extern crate alloc;

use alloc::string::{String, ToString};

/// Comma-separated canonical codes, quoted in [`ChemistryError::UnknownType`].
pub const VALID_CODES: &str =
    "LAEF, LAEC, LAMF, LAMC, LREF, LREC, LRMF, LRMC, SAEF, SAEC, SAMF, SAMC, SREF, SREC, SRMF, SRMC";

/// Everything that can go wrong when scoring chemistry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChemistryError {
    /// The supplied code is not one of the 16 canonical personality types.
    #[error("invalid personality type code: {code:?}. Valid codes are: {}", VALID_CODES)]
    UnknownType {
        /// The rejected input, verbatim.
        code: String,
    },

    /// A type was scored against itself under [`SelfPairPolicy::Reject`].
    ///
    /// [`SelfPairPolicy::Reject`]: crate::chemistry::SelfPairPolicy::Reject
    #[error("cannot score {code} against itself")]
    InvalidPair {
        /// The repeated code.
        code: &'static str,
    },

    /// A match query was asked to rank over a matrix missing some pairs.
    #[error("chemistry matrix holds {pairs} of {expected} pairs; match queries need all of them")]
    IncompleteMatrix {
        /// Pairs the matrix holds.
        pairs: usize,
        /// Pairs a complete matrix holds.
        expected: usize,
    },
}

impl ChemistryError {
    pub(crate) fn unknown_type(code: &str) -> Self {
        ChemistryError::UnknownType {
            code: code.to_string(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, ChemistryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PersonalityType;

    #[test]
    fn test_valid_codes_lists_canonical_order() {
        let listed: heapless::Vec<&str, 16> = VALID_CODES.split(", ").collect();
        assert_eq!(listed.len(), 16);
        for (code, t) in listed.iter().zip(PersonalityType::ALL) {
            assert_eq!(*code, t.as_str());
        }
    }

    #[test]
    fn test_unknown_type_message_names_input() {
        let msg = ChemistryError::unknown_type("ABCD").to_string();
        assert!(msg.contains("\"ABCD\""), "{}", msg);
        assert!(msg.contains("SRMC"), "{}", msg);
    }
}
