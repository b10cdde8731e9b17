//! Collaborator interfaces
//!
//! The core never talks to a database directly: persistence and reference
//! data sit behind these async traits, implemented by the enclosing
//! application. `InMemoryRiskStore` is a complete in-process implementation
//! used by the integration tests and by embedders without a backend yet.

use async_trait::async_trait;
use std::sync::Mutex;
use types::errors::StoreError;
use types::reference::{Asset, Control};
use types::risk::RiskRecord;

/// Reference data used to populate selection inputs
///
/// The core treats these as opaque lists (id + display label).
#[async_trait]
pub trait ReferenceData: Send + Sync {
    async fn list_assets(&self) -> Result<Vec<Asset>, StoreError>;
    async fn list_controls(&self) -> Result<Vec<Control>, StoreError>;
}

/// Persistence collaborator for finished risk records
#[async_trait]
pub trait RiskStore: Send + Sync {
    /// Persist a new risk record, returning the stored copy
    async fn create_risk(&self, record: RiskRecord) -> Result<RiskRecord, StoreError>;
}

/// In-process store backed by a Vec
#[derive(Debug, Default)]
pub struct InMemoryRiskStore {
    records: Mutex<Vec<RiskRecord>>,
    fail_next: Mutex<Option<StoreError>>,
}

impl InMemoryRiskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all stored records
    pub fn records(&self) -> Vec<RiskRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Make the next `create_risk` call fail with the given error
    pub fn fail_next(&self, error: StoreError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }
}

#[async_trait]
impl RiskStore for InMemoryRiskStore {
    async fn create_risk(&self, record: RiskRecord) -> Result<RiskRecord, StoreError> {
        if let Some(error) = self.fail_next.lock().unwrap().take() {
            return Err(error);
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }
}

/// Fixed reference lists for tests and demos
#[derive(Debug, Default)]
pub struct StaticReferenceData {
    pub assets: Vec<Asset>,
    pub controls: Vec<Control>,
}

impl StaticReferenceData {
    pub fn new(assets: Vec<Asset>, controls: Vec<Control>) -> Self {
        Self { assets, controls }
    }
}

#[async_trait]
impl ReferenceData for StaticReferenceData {
    async fn list_assets(&self) -> Result<Vec<Asset>, StoreError> {
        Ok(self.assets.clone())
    }

    async fn list_controls(&self) -> Result<Vec<Control>, StoreError> {
        Ok(self.controls.clone())
    }
}
