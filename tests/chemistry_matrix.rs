//! Integration tests for single-pair scoring and the 120-pair matrix.
//!
//! Fixture totals are for LAEF (`Le Ai Ee Ci`) against every other type with
//! the standard configuration. All multipliers and weights are exact binary
//! fractions, so totals compare exactly.

use sayu_chemistry::{
    build_matrix, score_pair, Chemistry, ChemistryConfig, ChemistryError, ChemistryLevel,
    ChemistryMatrix, PairKey, PersonalityType, SelfPairPolicy,
};
use PersonalityType::*;

// ── Fixtures ─────────────────────────────────────────────────────────────────

const LAEF_TOTALS: [(PersonalityType, f32); 15] = [
    (LAEC, 11.5),
    (LAMF, 8.25),
    (LAMC, 12.25),
    (LREF, 8.25),
    (LREC, 12.25),
    (LRMF, 9.0),
    (LRMC, 15.0),
    (SAEF, 10.5),
    (SAEC, 14.5),
    (SAMF, 11.25),
    (SAMC, 17.25),
    (SREF, 11.25),
    (SREC, 17.25),
    (SRMF, 14.0),
    (SRMC, 19.0),
];

fn expected_level(total: f32) -> ChemistryLevel {
    if total >= 18.0 {
        ChemistryLevel::Platinum
    } else if total >= 14.0 {
        ChemistryLevel::Gold
    } else if total >= 10.0 {
        ChemistryLevel::Silver
    } else {
        ChemistryLevel::Bronze
    }
}

// ── Single pairs ─────────────────────────────────────────────────────────────

#[test]
fn test_laef_fixture_totals() {
    for (partner, total) in LAEF_TOTALS {
        let s = score_pair(LAEF, partner).unwrap();
        assert_eq!(s.total, total, "LAEF-{}", partner);
        assert_eq!(s.level, expected_level(total), "LAEF-{}", partner);
    }
}

#[test]
fn test_laef_saec_breakdown() {
    let s = score_pair(LAEF, SAEC).unwrap();
    // Le-Se ×4, Ai-Ai ×1, Ee-Ee ×1, Ci-Fi ×4, two axes differ
    assert_eq!(s.breakdown.primary, 6.0);
    assert_eq!(s.breakdown.auxiliary, 1.25);
    assert_eq!(s.breakdown.tertiary, 1.25);
    assert_eq!(s.breakdown.inferior, 6.0);
    assert_eq!(s.breakdown.bonus, 0.0);
    assert_eq!(s.percentage, 73);
}

#[test]
fn test_percentage_tracks_total() {
    let s = score_pair(LAEF, LAMF).unwrap();
    // 8.25 / 20 = 41.25%
    assert_eq!(s.percentage, 41);
    assert_eq!(s.level, ChemistryLevel::Bronze);
    let s = score_pair(LAEF, SRMC).unwrap();
    assert_eq!(s.percentage, 95);
}

#[test]
fn test_self_pair_policies() {
    let mirror = score_pair(SAMF, SAMF).unwrap();
    assert!(mirror.mirror);
    assert_eq!(mirror.level, ChemistryLevel::Platinum);
    assert_eq!(mirror.percentage, 100);
    assert_eq!(mirror.total, mirror.breakdown.sum());

    let strict = Chemistry::with_config(ChemistryConfig {
        self_pair: SelfPairPolicy::Reject,
        ..ChemistryConfig::default()
    });
    let err = strict.score(SAMF, SAMF).unwrap_err();
    assert_eq!(err, ChemistryError::InvalidPair { code: "SAMF" });
}

#[test]
fn test_unknown_code_lists_valid_codes() {
    let err = Chemistry::new().score_codes("XXXX", "LAEF").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("XXXX"));
    for t in PersonalityType::ALL {
        assert!(msg.contains(t.as_str()), "message lacks {}", t);
    }
}

// ── Matrix ───────────────────────────────────────────────────────────────────

#[test]
fn test_matrix_matches_direct_scoring() {
    let m = ChemistryMatrix::build();
    assert_eq!(m.len(), 120);
    for s in &m {
        let direct = score_pair(s.type_a, s.type_b).unwrap();
        assert_eq!(s, &direct);
    }
}

#[test]
fn test_matrix_keys_cover_all_unordered_pairs() {
    let m = ChemistryMatrix::build();
    let mut keys: Vec<PairKey> = m.iter().map(|s| PairKey::new(s.type_a, s.type_b)).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 120);
    for a in PersonalityType::ALL {
        for b in PersonalityType::ALL {
            assert_eq!(m.get(a, b).is_some(), a != b, "{}-{}", a, b);
        }
    }
}

#[test]
fn test_matrix_levels_agree_with_thresholds() {
    for s in &ChemistryMatrix::build() {
        assert_eq!(s.level, expected_level(s.total), "{}-{}", s.type_a, s.type_b);
        assert!(s.percentage <= 100);
    }
}

#[test]
fn test_complete_opposites_score_highest_for_each_type() {
    let m = ChemistryMatrix::build();
    for t in PersonalityType::ALL {
        let best = m
            .for_type(t)
            .map(|s| s.total)
            .fold(f32::MIN, f32::max);
        let opposite = m
            .for_type(t)
            .find(|s| s.differing.len() == 4)
            .map(|s| s.total)
            .unwrap();
        assert!(opposite >= 18.0, "{} opposite scores {}", t, opposite);
        assert!(opposite <= best);
    }
}

#[test]
fn test_subset_matrix() {
    let m = build_matrix(&[LAEF, SAEF, SRMC]);
    assert_eq!(m.len(), 3);
    assert_eq!(m.get(LAEF, SRMC).unwrap().total, 19.0);
    assert!(m.get(LAEF, LAEC).is_none());
}

#[cfg(feature = "std")]
#[test]
fn test_shared_matrix_matches_fresh_build() {
    assert_eq!(ChemistryMatrix::shared(), &ChemistryMatrix::build());
}
