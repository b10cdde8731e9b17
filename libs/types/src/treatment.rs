//! Treatment strategies and plans
//!
//! The treatment strategy is the organizational response to an identified
//! risk; only `Mitigate` opens the residual evaluation branch of the
//! assessment workflow.

use crate::ids::ControlId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk treatment strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreatmentStrategy {
    /// Eliminate the activity that gives rise to the risk
    Avoid,
    /// Reduce likelihood or impact through controls
    Mitigate,
    /// Shift the risk to a third party (insurance, outsourcing)
    Transfer,
    /// Accept the risk as-is within appetite
    Accept,
}

impl TreatmentStrategy {
    /// All strategies in presentation order
    pub fn all() -> [TreatmentStrategy; 4] {
        [
            TreatmentStrategy::Avoid,
            TreatmentStrategy::Mitigate,
            TreatmentStrategy::Transfer,
            TreatmentStrategy::Accept,
        ]
    }

    /// Whether this strategy requires a residual risk evaluation
    pub fn requires_residual(&self) -> bool {
        matches!(self, TreatmentStrategy::Mitigate)
    }
}

impl fmt::Display for TreatmentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TreatmentStrategy::Avoid => "Avoid",
            TreatmentStrategy::Mitigate => "Mitigate",
            TreatmentStrategy::Transfer => "Transfer",
            TreatmentStrategy::Accept => "Accept",
        };
        write!(f, "{}", label)
    }
}

/// Treatment plan details collected alongside the strategy choice
///
/// All fields are optional at the workflow level; the plan exists even for
/// `Accept` decisions where it typically only carries a justification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreatmentPlan {
    /// Free-text description of the planned treatment
    pub description: Option<String>,
    /// Estimated cost of implementing the treatment
    pub cost: Option<Decimal>,
    /// Target completion date
    pub deadline: Option<NaiveDate>,
    /// Person or role accountable for the treatment
    pub responsible: Option<String>,
    /// Controls selected to implement the treatment
    pub related_controls: Vec<ControlId>,
}

impl TreatmentPlan {
    /// Plan with no details filled in
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_serialization() {
        let json = serde_json::to_string(&TreatmentStrategy::Mitigate).unwrap();
        assert_eq!(json, "\"mitigate\"");

        let deserialized: TreatmentStrategy = serde_json::from_str("\"accept\"").unwrap();
        assert_eq!(deserialized, TreatmentStrategy::Accept);
    }

    #[test]
    fn test_only_mitigate_requires_residual() {
        assert!(TreatmentStrategy::Mitigate.requires_residual());
        assert!(!TreatmentStrategy::Avoid.requires_residual());
        assert!(!TreatmentStrategy::Transfer.requires_residual());
        assert!(!TreatmentStrategy::Accept.requires_residual());
    }

    #[test]
    fn test_empty_plan() {
        let plan = TreatmentPlan::empty();
        assert!(plan.description.is_none());
        assert!(plan.cost.is_none());
        assert!(plan.deadline.is_none());
        assert!(plan.related_controls.is_empty());
    }

    #[test]
    fn test_plan_with_cost() {
        let plan = TreatmentPlan {
            description: Some("Deploy MFA across VPN access".to_string()),
            cost: Some(Decimal::from(12_000)),
            deadline: NaiveDate::from_ymd_opt(2026, 6, 30),
            responsible: Some("CISO".to_string()),
            related_controls: vec![ControlId::new()],
        };
        let json = serde_json::to_string(&plan).unwrap();
        let back: TreatmentPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, back);
    }
}
