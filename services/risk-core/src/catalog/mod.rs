//! Scenario catalog
//!
//! A read-only, versioned library of predefined threat scenarios, grouped
//! by threat category. Each scenario is self-contained: its questionnaire
//! is scoped to that scenario only. The catalog is immutable at runtime;
//! content editing is a separate concern outside this core.

mod data;

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use types::errors::ScenarioError;
use types::levels::RiskLevel;
use types::threat::ThreatCategory;

/// One selectable answer to a scenario question
///
/// The protection score is in [1, 5]: 1 = strong protection (low residual
/// risk contribution), 5 = weak or missing protection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOption {
    pub label: String,
    pub protection_score: u8,
}

/// One multiple-choice question about the protection posture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<ScenarioOption>,
}

/// A predefined threat scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub category: ThreatCategory,
    /// Typical likelihood of the threat, before looking at this
    /// organization's posture
    pub typical_probability: RiskLevel,
    /// Typical impact if the threat materializes
    pub typical_impact: RiskLevel,
    /// Suggested control measures (informational, passed through to the
    /// evaluation result)
    pub controls: Vec<String>,
    pub questions: Vec<ScenarioQuestion>,
}

/// Scenarios for a single threat category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioGroup {
    pub category: ThreatCategory,
    pub scenarios: Vec<Scenario>,
}

/// The versioned scenario dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: String,
    pub groups: Vec<ScenarioGroup>,
}

impl Catalog {
    /// The builtin dataset shipped with this release
    pub fn builtin() -> Self {
        Self {
            version: data::CATALOG_VERSION.to_string(),
            groups: data::groups(),
        }
    }

    /// All scenarios flattened, stable order = catalog declaration order
    pub fn all_scenarios(&self) -> Vec<&Scenario> {
        self.groups
            .iter()
            .flat_map(|g| g.scenarios.iter())
            .collect()
    }

    /// Look up a scenario by id.
    ///
    /// Fails with `NotFound` when absent — callers must treat this as
    /// recoverable (a scenario can disappear between catalog versions).
    pub fn scenario_by_id(&self, id: &str) -> Result<&Scenario, ScenarioError> {
        self.all_scenarios()
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| ScenarioError::NotFound {
                scenario_id: id.to_string(),
            })
    }
}

/// Shared builtin catalog, loaded once per process
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::builtin)
}
