//! Opaque reference data rows
//!
//! The core only needs id + display label to populate selection inputs;
//! asset inventory and control management live in other ISMS modules.

use crate::ids::{AssetId, ControlId};
use serde::{Deserialize, Serialize};

/// Asset reference row (selector entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub label: String,
}

impl Asset {
    pub fn new(id: AssetId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Security control reference row (selector entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub id: ControlId,
    pub label: String,
}

impl Control {
    pub fn new(id: ControlId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}
