//! Risk matrix
//!
//! Pure scoring functions: (probability, impact) → numeric score → category.
//! The thresholds are the calibrated values the whole ISMS reports against;
//! they are evaluated in descending order with inclusive lower bounds.

use serde::{Deserialize, Serialize};
use types::levels::{RiskCategory, RiskLevel};

/// Category thresholds (inclusive lower bounds)
const THRESHOLD_CRITICAL: u8 = 15;
const THRESHOLD_HIGH: u8 = 10;
const THRESHOLD_MEDIUM: u8 = 5;

/// Score and derived category for one probability/impact pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRating {
    pub score: u8,
    pub category: RiskCategory,
}

/// Compute the risk score: `weight(probability) * weight(impact)`.
///
/// Total over all level pairs; the result is always in [1, 25].
pub fn score(probability: RiskLevel, impact: RiskLevel) -> u8 {
    probability.weight() * impact.weight()
}

/// Classify a score into its category.
///
/// | Score range     | Category |
/// |-----------------|----------|
/// | score >= 15     | Critical |
/// | 10 <= score < 15| High     |
/// | 5 <= score < 10 | Medium   |
/// | score < 5       | Low      |
pub fn category_of(score: u8) -> RiskCategory {
    if score >= THRESHOLD_CRITICAL {
        RiskCategory::Critical
    } else if score >= THRESHOLD_HIGH {
        RiskCategory::High
    } else if score >= THRESHOLD_MEDIUM {
        RiskCategory::Medium
    } else {
        RiskCategory::Low
    }
}

/// Score and classify in one step.
pub fn rate(probability: RiskLevel, impact: RiskLevel) -> RiskRating {
    let score = score(probability, impact);
    RiskRating {
        score,
        category: category_of(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── score tests ──

    #[test]
    fn test_score_is_weight_product() {
        for p in RiskLevel::all() {
            for i in RiskLevel::all() {
                assert_eq!(score(p, i), p.weight() * i.weight());
            }
        }
    }

    #[test]
    fn test_score_range() {
        for p in RiskLevel::all() {
            for i in RiskLevel::all() {
                let s = score(p, i);
                assert!((1..=25).contains(&s), "score {} out of range", s);
            }
        }
    }

    #[test]
    fn test_score_symmetric() {
        for p in RiskLevel::all() {
            for i in RiskLevel::all() {
                assert_eq!(score(p, i), score(i, p));
            }
        }
    }

    // ── category boundary tests ──

    #[test]
    fn test_category_boundaries() {
        assert_eq!(category_of(4), RiskCategory::Low);
        assert_eq!(category_of(5), RiskCategory::Medium);
        assert_eq!(category_of(9), RiskCategory::Medium);
        assert_eq!(category_of(10), RiskCategory::High);
        assert_eq!(category_of(14), RiskCategory::High);
        assert_eq!(category_of(15), RiskCategory::Critical);
        assert_eq!(category_of(25), RiskCategory::Critical);
    }

    #[test]
    fn test_category_lowest_scores() {
        assert_eq!(category_of(1), RiskCategory::Low);
        assert_eq!(category_of(2), RiskCategory::Low);
    }

    #[test]
    fn test_every_score_has_exactly_one_category() {
        // Partition check: contiguous, no gaps over [1, 25]
        for s in 1..=25u8 {
            let _ = category_of(s);
        }
        assert_eq!(category_of(4), RiskCategory::Low);
        assert_ne!(category_of(4), category_of(5));
        assert_ne!(category_of(9), category_of(10));
        assert_ne!(category_of(14), category_of(15));
    }

    // ── rate tests ──

    #[test]
    fn test_rate_high_critical() {
        let rating = rate(RiskLevel::High, RiskLevel::Critical);
        assert_eq!(rating.score, 20);
        assert_eq!(rating.category, RiskCategory::Critical);
    }

    #[test]
    fn test_rate_low_medium() {
        let rating = rate(RiskLevel::Low, RiskLevel::Medium);
        assert_eq!(rating.score, 6);
        assert_eq!(rating.category, RiskCategory::Medium);
    }

    #[test]
    fn test_rate_minimum() {
        let rating = rate(RiskLevel::VeryLow, RiskLevel::VeryLow);
        assert_eq!(rating.score, 1);
        assert_eq!(rating.category, RiskCategory::Low);
    }

    // ── property tests ──

    proptest! {
        #[test]
        fn prop_category_monotonic(a in 1..=25u8, b in 1..=25u8) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(category_of(lo) <= category_of(hi));
        }

        #[test]
        fn prop_score_monotonic_in_probability(
            p1 in 0..5usize, p2 in 0..5usize, i in 0..5usize,
        ) {
            let levels = RiskLevel::all();
            if levels[p1] <= levels[p2] {
                prop_assert!(score(levels[p1], levels[i]) <= score(levels[p2], levels[i]));
            }
        }
    }
}
