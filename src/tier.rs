//! Tier classification of a chemistry total.
//!
//! ```text
//! total ≥ 18  → Platinum
//! total ≥ 14  → Gold
//! total ≥ 10  → Silver
//! otherwise   → Bronze
//!
//! percentage = clamp(round(total / 20 × 100), 0, 100)
//! ```
//!
//! Thresholds are inclusive lower bounds checked top-down, so the mapping is
//! monotonic: a larger total never yields a lower tier. Rounding is half away
//! from zero. A `NaN` total classifies as Bronze at 0%.

use core::fmt;

// ─── ChemistryLevel ──────────────────────────────────────────────────────────

/// Qualitative tier. Ordered `Bronze < Silver < Gold < Platinum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChemistryLevel {
    /// Below the silver threshold.
    Bronze,
    /// At least the silver threshold.
    Silver,
    /// At least the gold threshold.
    Gold,
    /// At least the platinum threshold.
    Platinum,
}

impl ChemistryLevel {
    /// All tiers, lowest first.
    pub const ALL: [ChemistryLevel; 4] = [
        ChemistryLevel::Bronze,
        ChemistryLevel::Silver,
        ChemistryLevel::Gold,
        ChemistryLevel::Platinum,
    ];

    /// Lowercase label used by content keys.
    pub const fn as_str(self) -> &'static str {
        match self {
            ChemistryLevel::Bronze => "bronze",
            ChemistryLevel::Silver => "silver",
            ChemistryLevel::Gold => "gold",
            ChemistryLevel::Platinum => "platinum",
        }
    }
}

impl fmt::Display for ChemistryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── TierThresholds ──────────────────────────────────────────────────────────

/// Tier lower bounds and the total that maps to 100%.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierThresholds {
    /// Minimum total for [`ChemistryLevel::Platinum`].
    pub platinum: f32,
    /// Minimum total for [`ChemistryLevel::Gold`].
    pub gold: f32,
    /// Minimum total for [`ChemistryLevel::Silver`].
    pub silver: f32,
    /// Total that corresponds to 100%.
    pub full_scale: f32,
}

impl TierThresholds {
    /// Standard thresholds: 18 / 14 / 10, full scale 20.
    pub const fn standard() -> Self {
        Self {
            platinum: 18.0,
            gold: 14.0,
            silver: 10.0,
            full_scale: 20.0,
        }
    }

    /// Tier for `total`.
    pub fn level(&self, total: f32) -> ChemistryLevel {
        if total >= self.platinum {
            ChemistryLevel::Platinum
        } else if total >= self.gold {
            ChemistryLevel::Gold
        } else if total >= self.silver {
            ChemistryLevel::Silver
        } else {
            ChemistryLevel::Bronze
        }
    }

    /// Normalised percentage for `total`, always in [0, 100].
    pub fn percentage(&self, total: f32) -> u8 {
        let pct = (total * 100.0 / self.full_scale).clamp(0.0, 100.0);
        // non-negative after the clamp, so truncating `pct + 0.5` rounds half up;
        // NaN saturates to 0
        (pct + 0.5) as u8
    }

    /// Tier and percentage for `total`.
    pub fn classify(&self, total: f32) -> Classification {
        Classification {
            level: self.level(total),
            percentage: self.percentage(total),
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self::standard()
    }
}

/// Tier plus percentage of one total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    /// Qualitative tier.
    pub level: ChemistryLevel,
    /// Normalised score in [0, 100].
    pub percentage: u8,
}

/// Classify `total` with the standard thresholds.
pub fn classify(total: f32) -> Classification {
    TierThresholds::standard().classify(total)
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_tier_boundaries() {
        assert_eq!(classify(18.0).level, ChemistryLevel::Platinum);
        assert_eq!(classify(17.999).level, ChemistryLevel::Gold);
        assert_eq!(classify(14.0).level, ChemistryLevel::Gold);
        assert_eq!(classify(13.999).level, ChemistryLevel::Silver);
        assert_eq!(classify(10.0).level, ChemistryLevel::Silver);
        assert_eq!(classify(9.999).level, ChemistryLevel::Bronze);
    }

    #[test]
    fn test_percentage_clamps_extremes() {
        assert_eq!(classify(-100.0).percentage, 0);
        assert_eq!(classify(100.0).percentage, 100);
        assert_eq!(classify(20.0).percentage, 100);
        assert_eq!(classify(0.0).percentage, 0);
        assert_eq!(classify(f32::INFINITY).percentage, 100);
        assert_eq!(classify(f32::NEG_INFINITY).percentage, 0);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(classify(10.5).percentage, 53); // 52.5
        assert_eq!(classify(14.5).percentage, 73); // 72.5
        assert_eq!(classify(8.25).percentage, 41); // 41.25
        assert_eq!(classify(19.0).percentage, 95);
    }

    #[test]
    fn test_nan_is_bronze_zero() {
        let c = classify(f32::NAN);
        assert_eq!(c.level, ChemistryLevel::Bronze);
        assert_eq!(c.percentage, 0);
    }

    #[test]
    fn test_percentages_always_in_range() {
        let mut x = -100.0_f32;
        while x <= 100.0 {
            assert!(classify(x).percentage <= 100, "x={}", x);
            x += 0.25;
        }
    }

    #[test]
    fn test_tier_is_monotonic_in_total() {
        let mut prev = classify(-50.0);
        let mut x = -50.0_f32;
        while x <= 50.0 {
            let c = classify(x);
            assert!(c.level >= prev.level, "tier inversion at {}", x);
            assert!(c.percentage >= prev.percentage, "percentage inversion at {}", x);
            prev = c;
            x += 0.125;
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let t = TierThresholds { platinum: 5.0, gold: 3.0, silver: 1.0, full_scale: 10.0 };
        assert_eq!(t.level(5.0), ChemistryLevel::Platinum);
        assert_eq!(t.level(2.0), ChemistryLevel::Silver);
        assert_eq!(t.percentage(5.0), 50);
    }

    #[test]
    fn test_level_labels() {
        let labels = ChemistryLevel::ALL.map(ChemistryLevel::as_str);
        assert_eq!(labels, ["bronze", "silver", "gold", "platinum"]);
    }
}
