//! Ordinal risk levels and derived categories
//!
//! `RiskLevel` is the shared qualitative scale for both probability and
//! impact; `RiskCategory` is the four-tier classification derived from a
//! numeric score by the risk matrix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative level for probability or impact
///
/// Invariant: weights are strictly increasing with severity and the same
/// 1–5 scale applies to both probability and impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Weight 1
    VeryLow,
    /// Weight 2
    Low,
    /// Weight 3
    Medium,
    /// Weight 4
    High,
    /// Weight 5
    Critical,
}

impl RiskLevel {
    /// Integer weight on the shared 1–5 ordinal scale
    pub fn weight(&self) -> u8 {
        match self {
            RiskLevel::VeryLow => 1,
            RiskLevel::Low => 2,
            RiskLevel::Medium => 3,
            RiskLevel::High => 4,
            RiskLevel::Critical => 5,
        }
    }

    /// All levels in ascending severity order
    pub fn all() -> [RiskLevel; 5] {
        [
            RiskLevel::VeryLow,
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Critical,
        ]
    }

    /// Level for a given weight, if within the 1–5 scale
    pub fn from_weight(weight: u8) -> Option<RiskLevel> {
        match weight {
            1 => Some(RiskLevel::VeryLow),
            2 => Some(RiskLevel::Low),
            3 => Some(RiskLevel::Medium),
            4 => Some(RiskLevel::High),
            5 => Some(RiskLevel::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::VeryLow => "Very Low",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        };
        write!(f, "{}", label)
    }
}

/// Four-tier risk classification derived from a matrix score
///
/// Invariant: the categories partition the score range [1, 25] completely
/// and contiguously; every score maps to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    /// score < 5
    Low,
    /// 5 <= score < 10
    Medium,
    /// 10 <= score < 15
    High,
    /// score >= 15
    Critical,
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskCategory::Low => "Low",
            RiskCategory::Medium => "Medium",
            RiskCategory::High => "High",
            RiskCategory::Critical => "Critical",
        };
        write!(f, "{}", label)
    }
}
