//! Error types for the risk assessment core
//!
//! Comprehensive error taxonomy using thiserror. The matrix and evaluator
//! are total and never raise; every variant here belongs to the wizard or
//! persistence boundary and is recoverable — worst case the user loses an
//! unsaved draft.

use thiserror::Error;

/// Top-level core error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Wizard step validation errors
///
/// Each variant names the offending field so the UI can attach the message
/// to the right input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Step {requested} is not reachable (max {max})")]
    StepOutOfRange { requested: u8, max: u8 },
}

impl ValidationError {
    /// Field the error should be attached to, when there is one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingField { field } => Some(field),
            ValidationError::InvalidValue { field, .. } => Some(field),
            ValidationError::StepOutOfRange { .. } => None,
        }
    }
}

/// Scenario catalog errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("Scenario not found: {scenario_id}")]
    NotFound { scenario_id: String },
}

/// Persistence boundary errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to create risk record: {reason}")]
    CreateFailed { reason: String },

    #[error("Store unavailable: {reason}")]
    Unavailable { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::MissingField { field: "name" };
        assert_eq!(err.to_string(), "Required field missing: name");
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn test_scenario_not_found_display() {
        let err = ScenarioError::NotFound {
            scenario_id: "fire".to_string(),
        };
        assert!(err.to_string().contains("fire"));
    }

    #[test]
    fn test_core_error_from_store_error() {
        let store_err = StoreError::CreateFailed {
            reason: "connection reset".to_string(),
        };
        let core_err: CoreError = store_err.into();
        assert!(matches!(core_err, CoreError::Store(_)));
    }

    #[test]
    fn test_step_out_of_range_has_no_field() {
        let err = ValidationError::StepOutOfRange {
            requested: 4,
            max: 3,
        };
        assert_eq!(err.field(), None);
    }
}
