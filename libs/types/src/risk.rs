//! Persisted risk record and lifecycle status
//!
//! `RiskRecord` is the entity the wizard writes on final submit. Scores are
//! snapshots taken at save time from the live probability/impact pair; they
//! are not re-derived later unless the record is re-opened and edited.

use crate::ids::{AssetId, ControlId, RecordId, RiskCode};
use crate::levels::{RiskCategory, RiskLevel};
use crate::threat::ThreatCategory;
use crate::treatment::TreatmentStrategy;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Risk lifecycle status
///
/// Wire literals are the legacy Italian labels the relational store was
/// built around; renaming them would orphan every existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskStatus {
    /// Freshly created by the assessment workflow
    #[serde(rename = "Identificato")]
    Identified,
    /// Treatment plan in execution
    #[serde(rename = "In Trattamento")]
    InTreatment,
    /// Formally accepted within risk appetite
    #[serde(rename = "Accettato")]
    Accepted,
    /// Treated and verified, no longer tracked
    #[serde(rename = "Chiuso")]
    Closed,
}

/// Persisted risk entity
///
/// Field names match the relational store's columns; the inherent block is
/// always present, the residual block only when the treatment strategy is
/// `Mitigate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRecord {
    pub record_id: RecordId,
    /// User-facing code, e.g. "RISK-001"
    pub risk_id: RiskCode,
    pub name: String,
    pub description: Option<String>,
    pub asset_id: AssetId,
    pub threat_category: ThreatCategory,
    pub inherent_probability: RiskLevel,
    pub inherent_impact: RiskLevel,
    pub inherent_risk_score: u8,
    pub inherent_risk_level: RiskCategory,
    pub treatment_strategy: TreatmentStrategy,
    pub treatment_description: Option<String>,
    pub treatment_cost: Option<Decimal>,
    pub treatment_deadline: Option<NaiveDate>,
    pub treatment_responsible: Option<String>,
    pub related_controls: Vec<ControlId>,
    pub residual_probability: Option<RiskLevel>,
    pub residual_impact: Option<RiskLevel>,
    pub residual_risk_score: Option<u8>,
    pub residual_risk_level: Option<RiskCategory>,
    pub status: RiskStatus,
    pub created_at: DateTime<Utc>,
}

impl RiskRecord {
    /// Whether the record carries a complete residual evaluation
    pub fn has_residual(&self) -> bool {
        self.residual_probability.is_some()
            && self.residual_impact.is_some()
            && self.residual_risk_score.is_some()
            && self.residual_risk_level.is_some()
    }
}
