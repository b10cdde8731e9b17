//! Types library for the ISMS risk assessment core
//!
//! This library provides all core type definitions shared between the risk
//! engine and the enclosing ISMS application, ensuring type safety and a
//! stable wire format for persisted risk records.
//!
//! # Modules
//! - `ids`: Unique identifiers (RecordId, AssetId, ControlId, RiskCode)
//! - `levels`: Ordinal risk levels and derived categories
//! - `threat`: Threat category classification
//! - `treatment`: Treatment strategies and plans
//! - `risk`: Persisted risk record and lifecycle status
//! - `reference`: Opaque asset/control reference rows
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod levels;
pub mod threat;
pub mod treatment;
pub mod risk;
pub mod reference;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::levels::*;
    pub use crate::threat::*;
    pub use crate::treatment::*;
    pub use crate::risk::*;
    pub use crate::reference::*;
    pub use crate::errors::*;
}
