//! Risk level module - four-band label derived from a 0–100 score

use serde::Serialize;

/// Overall risk band for a score in [0, 100]
///
/// Bands are inclusive-low/exclusive-high except the top band, which is
/// unbounded above:
/// - `< 25` → Safe
/// - `< 50` → Low
/// - `< 75` → Medium
/// - else → High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score below 25
    Safe,
    /// Score in [25, 50)
    Low,
    /// Score in [50, 75)
    Medium,
    /// Score 75 or above
    High,
}

impl RiskLevel {
    /// Map a 0–100 score to its risk band
    pub fn from_score(score: u8) -> Self {
        if score < 25 {
            RiskLevel::Safe
        } else if score < 50 {
            RiskLevel::Low
        } else if score < 75 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_score(24), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_score(25), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(49), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(50), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(74), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(75), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(RiskLevel::Safe.as_str(), "safe");
        assert_eq!(RiskLevel::High.as_str(), "high");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: level is non-decreasing in score
        #[test]
        fn test_level_monotonic(a in 0u8..=100, b in 0u8..=100) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(RiskLevel::from_score(lo) <= RiskLevel::from_score(hi));
        }

        /// Property: every score maps to exactly one of the four bands
        #[test]
        fn test_level_total(score in 0u8..=100) {
            let level = RiskLevel::from_score(score);
            let expected = match score {
                0..=24 => RiskLevel::Safe,
                25..=49 => RiskLevel::Low,
                50..=74 => RiskLevel::Medium,
                _ => RiskLevel::High,
            };
            prop_assert_eq!(level, expected);
        }
    }
}
