//! Risk assessment workflow
//!
//! A step state machine collecting identification data, the inherent
//! evaluation, the treatment decision, and — only for `Mitigate` — the
//! residual evaluation, then persisting the finished record. The step count
//! is computed from the current treatment strategy on every call, never
//! stored, so the 3↔4 step branch cannot drift out of sync with the draft.

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};
use types::errors::{StoreError, ValidationError};
use types::ids::{AssetId, RecordId, RiskCode};
use types::levels::RiskLevel;
use types::risk::{RiskRecord, RiskStatus};
use types::threat::ThreatCategory;
use types::treatment::{TreatmentPlan, TreatmentStrategy};

use crate::matrix::{self, RiskRating};
use crate::store::RiskStore;

/// Residual scores at or below this are presented as acceptable.
///
/// A fixed UX heuristic, deliberately distinct from the four-tier category
/// thresholds.
const ACCEPTABLE_RESIDUAL_SCORE: u8 = 6;

/// Steps of the assessment workflow, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Identification,
    InherentEvaluation,
    TreatmentSelection,
    /// Only reachable when the treatment strategy is `Mitigate`
    ResidualEvaluation,
}

impl WizardStep {
    /// Step at a 1-based index
    pub fn at(index: u8) -> Option<WizardStep> {
        match index {
            1 => Some(WizardStep::Identification),
            2 => Some(WizardStep::InherentEvaluation),
            3 => Some(WizardStep::TreatmentSelection),
            4 => Some(WizardStep::ResidualEvaluation),
            _ => None,
        }
    }
}

/// Qualitative verdict shown next to the inherent/residual comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidualVerdict {
    /// Residual score within the acceptance heuristic
    Acceptable,
    /// Residual risk remains elevated, further controls should be considered
    StillElevated,
}

/// Side-by-side inherent vs residual comparison for the final step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidualComparison {
    pub inherent: RiskRating,
    pub residual: RiskRating,
    pub verdict: ResidualVerdict,
}

/// Submit failure: either the draft is incomplete or persistence failed.
///
/// On a store failure the draft is left untouched so the user can retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("Persistence failed: {0}")]
    Store(#[from] StoreError),
}

/// The in-progress assessment draft
///
/// Text inputs are plain strings (empty = not provided); selections are
/// `Option` so the matrix is never invoked with unset levels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskDraft {
    pub risk_code: String,
    pub name: String,
    pub description: String,
    pub asset: Option<AssetId>,
    pub threat_category: Option<ThreatCategory>,
    pub inherent_probability: Option<RiskLevel>,
    pub inherent_impact: Option<RiskLevel>,
    pub treatment_strategy: Option<TreatmentStrategy>,
    pub treatment_plan: TreatmentPlan,
    pub residual_probability: Option<RiskLevel>,
    pub residual_impact: Option<RiskLevel>,
}

/// The assessment workflow state machine
///
/// Each wizard instance owns its own draft; there is no shared state
/// between sessions.
#[derive(Debug, Clone)]
pub struct RiskWizard {
    draft: RiskDraft,
    step: u8,
}

impl Default for RiskWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskWizard {
    /// Fresh wizard at step 1 with an empty draft
    pub fn new() -> Self {
        Self {
            draft: RiskDraft::default(),
            step: 1,
        }
    }

    pub fn draft(&self) -> &RiskDraft {
        &self.draft
    }

    /// Current 1-based step index
    pub fn current_step(&self) -> u8 {
        self.step
    }

    /// Step count for the current draft: 4 when the strategy is `Mitigate`,
    /// otherwise 3. Computed, never stored.
    pub fn max_steps(&self) -> u8 {
        match self.draft.treatment_strategy {
            Some(strategy) if strategy.requires_residual() => 4,
            _ => 3,
        }
    }

    /// Whether the wizard sits on the last applicable step
    pub fn on_final_step(&self) -> bool {
        self.step == self.max_steps()
    }

    // ── draft mutators ───────────────────────────────────────────────────

    pub fn set_risk_code(&mut self, code: impl Into<String>) {
        self.draft.risk_code = code.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_asset(&mut self, asset: AssetId) {
        self.draft.asset = Some(asset);
    }

    pub fn set_threat_category(&mut self, category: ThreatCategory) {
        self.draft.threat_category = Some(category);
    }

    pub fn set_inherent_probability(&mut self, level: RiskLevel) {
        self.draft.inherent_probability = Some(level);
    }

    pub fn set_inherent_impact(&mut self, level: RiskLevel) {
        self.draft.inherent_impact = Some(level);
    }

    /// Choose the treatment strategy.
    ///
    /// Changing away from `Mitigate` can shrink the step count; if the user
    /// sits on step 4 at that moment the current step is clamped to the new
    /// maximum so the progress indicator re-renders without crashing.
    pub fn set_treatment_strategy(&mut self, strategy: TreatmentStrategy) {
        self.draft.treatment_strategy = Some(strategy);
        let max = self.max_steps();
        if self.step > max {
            self.step = max;
        }
    }

    pub fn set_treatment_plan(&mut self, plan: TreatmentPlan) {
        self.draft.treatment_plan = plan;
    }

    pub fn treatment_plan_mut(&mut self) -> &mut TreatmentPlan {
        &mut self.draft.treatment_plan
    }

    pub fn set_residual_probability(&mut self, level: RiskLevel) {
        self.draft.residual_probability = Some(level);
    }

    pub fn set_residual_impact(&mut self, level: RiskLevel) {
        self.draft.residual_impact = Some(level);
    }

    // ── live previews ────────────────────────────────────────────────────

    /// Inherent score/category from the current in-memory pair.
    ///
    /// Recomputed on every call; presentation-only until submit.
    pub fn inherent_preview(&self) -> Option<RiskRating> {
        match (self.draft.inherent_probability, self.draft.inherent_impact) {
            (Some(p), Some(i)) => Some(matrix::rate(p, i)),
            _ => None,
        }
    }

    /// Residual score/category from the current in-memory pair
    pub fn residual_preview(&self) -> Option<RiskRating> {
        match (self.draft.residual_probability, self.draft.residual_impact) {
            (Some(p), Some(i)) => Some(matrix::rate(p, i)),
            _ => None,
        }
    }

    /// Side-by-side comparison with the acceptance verdict, available once
    /// both evaluations are complete
    pub fn residual_comparison(&self) -> Option<ResidualComparison> {
        let inherent = self.inherent_preview()?;
        let residual = self.residual_preview()?;
        let verdict = if residual.score <= ACCEPTABLE_RESIDUAL_SCORE {
            ResidualVerdict::Acceptable
        } else {
            ResidualVerdict::StillElevated
        };
        Some(ResidualComparison {
            inherent,
            residual,
            verdict,
        })
    }

    // ── navigation ───────────────────────────────────────────────────────

    /// Validate only the given step's required fields.
    ///
    /// Returns every failing field so the UI can mark them all at once.
    pub fn validate_step(&self, index: u8) -> Result<(), Vec<ValidationError>> {
        let max = self.max_steps();
        let Some(step) = WizardStep::at(index).filter(|_| index <= max) else {
            return Err(vec![ValidationError::StepOutOfRange {
                requested: index,
                max,
            }]);
        };

        let mut errors = Vec::new();
        match step {
            WizardStep::Identification => {
                if self.draft.risk_code.trim().is_empty() {
                    errors.push(ValidationError::MissingField { field: "risk_id" });
                } else if RiskCode::try_new(self.draft.risk_code.clone()).is_none() {
                    errors.push(ValidationError::InvalidValue {
                        field: "risk_id",
                        reason: "must not have surrounding whitespace".to_string(),
                    });
                }
                if self.draft.name.trim().is_empty() {
                    errors.push(ValidationError::MissingField { field: "name" });
                }
                if self.draft.asset.is_none() {
                    errors.push(ValidationError::MissingField { field: "asset_id" });
                }
                if self.draft.threat_category.is_none() {
                    errors.push(ValidationError::MissingField {
                        field: "threat_category",
                    });
                }
            }
            WizardStep::InherentEvaluation => {
                if self.draft.inherent_probability.is_none() {
                    errors.push(ValidationError::MissingField {
                        field: "inherent_probability",
                    });
                }
                if self.draft.inherent_impact.is_none() {
                    errors.push(ValidationError::MissingField {
                        field: "inherent_impact",
                    });
                }
            }
            WizardStep::TreatmentSelection => {
                if self.draft.treatment_strategy.is_none() {
                    errors.push(ValidationError::MissingField {
                        field: "treatment_strategy",
                    });
                }
            }
            WizardStep::ResidualEvaluation => {
                if self.draft.residual_probability.is_none() {
                    errors.push(ValidationError::MissingField {
                        field: "residual_probability",
                    });
                }
                if self.draft.residual_impact.is_none() {
                    errors.push(ValidationError::MissingField {
                        field: "residual_impact",
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Move to the next step after validating the current one.
    ///
    /// Returns the new step index. Validation failures block advancement
    /// and carry the field-level messages.
    pub fn advance(&mut self) -> Result<u8, Vec<ValidationError>> {
        if self.on_final_step() {
            return Err(vec![ValidationError::StepOutOfRange {
                requested: self.step + 1,
                max: self.max_steps(),
            }]);
        }
        self.validate_step(self.step)?;
        self.step += 1;
        Ok(self.step)
    }

    /// Move back one step. Never validates, never goes below step 1.
    pub fn back(&mut self) -> u8 {
        if self.step > 1 {
            self.step -= 1;
        }
        self.step
    }

    // ── submit ───────────────────────────────────────────────────────────

    /// Persist the finished assessment.
    ///
    /// Only callable from the last applicable step. Both snapshot scores
    /// are recomputed from the live probability/impact pairs at this
    /// moment, never taken from earlier previews. On success the wizard
    /// resets to a fresh step-1 state; on failure the draft stays intact
    /// for retry.
    pub async fn submit(&mut self, store: &dyn RiskStore) -> Result<RiskRecord, SubmitError> {
        if !self.on_final_step() {
            return Err(SubmitError::Validation(vec![
                ValidationError::StepOutOfRange {
                    requested: self.step,
                    max: self.max_steps(),
                },
            ]));
        }

        // Re-validate every applicable step; collect all failures
        let mut errors = Vec::new();
        for index in 1..=self.max_steps() {
            if let Err(step_errors) = self.validate_step(index) {
                errors.extend(step_errors);
            }
        }
        if !errors.is_empty() {
            return Err(SubmitError::Validation(errors));
        }

        let record = self.build_record();
        match store.create_risk(record).await {
            Ok(stored) => {
                info!(risk_id = %stored.risk_id, score = stored.inherent_risk_score, "risk record created");
                *self = RiskWizard::new();
                Ok(stored)
            }
            Err(error) => {
                warn!(error = %error, "risk record creation failed, draft preserved");
                Err(SubmitError::Store(error))
            }
        }
    }

    /// Assemble the record from a fully validated draft
    fn build_record(&self) -> RiskRecord {
        let draft = &self.draft;
        let probability = draft.inherent_probability.unwrap();
        let impact = draft.inherent_impact.unwrap();
        let inherent = matrix::rate(probability, impact);
        let strategy = draft.treatment_strategy.unwrap();

        let residual = if strategy.requires_residual() {
            let p = draft.residual_probability.unwrap();
            let i = draft.residual_impact.unwrap();
            Some((p, i, matrix::rate(p, i)))
        } else {
            None
        };

        let optional_text = |s: &str| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        RiskRecord {
            record_id: RecordId::new(),
            risk_id: RiskCode::new(draft.risk_code.clone()),
            name: draft.name.trim().to_string(),
            description: optional_text(&draft.description),
            asset_id: draft.asset.unwrap(),
            threat_category: draft.threat_category.unwrap(),
            inherent_probability: probability,
            inherent_impact: impact,
            inherent_risk_score: inherent.score,
            inherent_risk_level: inherent.category,
            treatment_strategy: strategy,
            treatment_description: draft.treatment_plan.description.clone(),
            treatment_cost: draft.treatment_plan.cost,
            treatment_deadline: draft.treatment_plan.deadline,
            treatment_responsible: draft.treatment_plan.responsible.clone(),
            related_controls: draft.treatment_plan.related_controls.clone(),
            residual_probability: residual.map(|(p, _, _)| p),
            residual_impact: residual.map(|(_, i, _)| i),
            residual_risk_score: residual.map(|(_, _, r)| r.score),
            residual_risk_level: residual.map(|(_, _, r)| r.category),
            status: RiskStatus::Identified,
            created_at: Utc::now(),
        }
    }
}
