//! Threat category classification
//!
//! Shared by the scenario catalog (group headings) and the wizard's
//! identification step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// High-level threat category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatCategory {
    /// Natural and environmental events (fire, flood, earthquake)
    Natural,
    /// People-related threats (social engineering, insider abuse, key-person loss)
    Personnel,
    /// Organizational and process threats (vendor failure, missing procedures)
    Organizational,
    /// Technological threats (malware, outages, unauthorized access)
    Technological,
}

impl ThreatCategory {
    /// All categories in catalog declaration order
    pub fn all() -> [ThreatCategory; 4] {
        [
            ThreatCategory::Natural,
            ThreatCategory::Personnel,
            ThreatCategory::Organizational,
            ThreatCategory::Technological,
        ]
    }
}

impl fmt::Display for ThreatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ThreatCategory::Natural => "Natural / Environmental",
            ThreatCategory::Personnel => "Personnel",
            ThreatCategory::Organizational => "Organizational",
            ThreatCategory::Technological => "Technological",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ThreatCategory::Technological).unwrap();
        assert_eq!(json, "\"technological\"");

        let deserialized: ThreatCategory = serde_json::from_str("\"natural\"").unwrap();
        assert_eq!(deserialized, ThreatCategory::Natural);
    }

    #[test]
    fn test_all_has_four_categories() {
        assert_eq!(ThreatCategory::all().len(), 4);
    }
}
