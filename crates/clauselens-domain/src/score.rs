//! Category score set and weighted combination

use crate::RiskCategory;
use serde::Serialize;

/// Fixed weight of each bucket in the overall score (sums to 1.0)
pub const CATEGORY_WEIGHTS: [(RiskCategory, f64); 5] = [
    (RiskCategory::Confidentiality, 0.20),
    (RiskCategory::Liability, 0.25),
    (RiskCategory::Compliance, 0.25),
    (RiskCategory::Financial, 0.15),
    (RiskCategory::Operational, 0.15),
];

/// Neutral baseline each bucket starts from before indicator deltas apply
pub const NEUTRAL_BASELINE: i64 = 50;

/// Normalize an accumulated signed delta into a bucket score
///
/// The score is `50 + delta`, clamped to [0, 100]. A document with no
/// indicators in a bucket therefore reads the neutral 50.
pub fn normalize_delta(delta: i64) -> u8 {
    (NEUTRAL_BASELINE + delta).clamp(0, 100) as u8
}

/// Per-bucket risk scores, each in [0, 100]
///
/// All five buckets are always present; unscored buckets hold the neutral
/// baseline of 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    /// Confidentiality bucket score
    pub confidentiality: u8,
    /// Liability bucket score
    pub liability: u8,
    /// Compliance bucket score
    pub compliance: u8,
    /// Financial bucket score
    pub financial: u8,
    /// Operational bucket score
    pub operational: u8,
}

impl CategoryScores {
    /// Score set with every bucket at the neutral baseline
    pub fn neutral() -> Self {
        CategoryScores {
            confidentiality: 50,
            liability: 50,
            compliance: 50,
            financial: 50,
            operational: 50,
        }
    }

    /// Read one bucket's score
    pub fn get(&self, category: RiskCategory) -> u8 {
        match category {
            RiskCategory::Confidentiality => self.confidentiality,
            RiskCategory::Liability => self.liability,
            RiskCategory::Compliance => self.compliance,
            RiskCategory::Financial => self.financial,
            RiskCategory::Operational => self.operational,
        }
    }

    /// Combine the five buckets into a single 0–100 score
    ///
    /// Weighted sum with the fixed [`CATEGORY_WEIGHTS`], rounded to the
    /// nearest integer.
    pub fn weighted_overall(&self) -> u8 {
        let weighted: f64 = CATEGORY_WEIGHTS
            .iter()
            .map(|(category, weight)| f64::from(self.get(*category)) * weight)
            .sum();
        weighted.round() as u8
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: normalized scores stay within [0, 100]
        #[test]
        fn test_normalize_bounds(delta in -500i64..=500) {
            let score = normalize_delta(delta);
            prop_assert!(score <= 100);
        }

        /// Property: the weighted overall of in-range buckets is in range
        #[test]
        fn test_weighted_overall_bounds(
            confidentiality in 0u8..=100,
            liability in 0u8..=100,
            compliance in 0u8..=100,
            financial in 0u8..=100,
            operational in 0u8..=100,
        ) {
            let scores = CategoryScores {
                confidentiality,
                liability,
                compliance,
                financial,
                operational,
            };
            prop_assert!(scores.weighted_overall() <= 100);
        }

        /// Property: raising any bucket never lowers the overall score
        #[test]
        fn test_weighted_overall_monotonic(
            base in 0u8..=90,
            bump in 0u8..=10,
        ) {
            let lower = CategoryScores {
                confidentiality: base,
                liability: 50,
                compliance: 50,
                financial: 50,
                operational: 50,
            };
            let higher = CategoryScores {
                confidentiality: base + bump,
                ..lower
            };
            prop_assert!(higher.weighted_overall() >= lower.weighted_overall());
        }
    }
}
