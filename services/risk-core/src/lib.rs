//! Risk Assessment & Scoring Core
//!
//! The reusable engine inside the ISMS:
//! - probability × impact scoring with fixed category thresholds
//! - a read-only catalog of threat scenarios with weighted questionnaires
//! - the evaluator that turns questionnaire answers into inherent and
//!   residual risk ratings
//! - the multi-step assessment workflow that collects identification data,
//!   evaluations, and a treatment decision, then persists the record
//!
//! Persistence and reference data stay behind the traits in [`store`]; the
//! computation layers are synchronous and side-effect-free.

pub mod matrix;
pub mod catalog;
pub mod evaluator;
pub mod wizard;
pub mod store;
