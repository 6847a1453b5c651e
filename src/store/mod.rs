//! In-memory dashboard store
//!
//! The store is constructed explicitly and passed to whoever needs it. It
//! holds one repository per record type plus the current risk summary.

pub mod repository;
pub mod seed;

use std::sync::RwLock;

use crate::error::{DeskError, DeskResult};
use crate::models::{Creator, LegalIssue, Project, RiskSummary};

pub use repository::{Entity, MemoryRepository, Repository};

/// Coordinator for every dashboard collection
pub struct DashboardStore {
    pub projects: MemoryRepository<Project>,
    pub issues: MemoryRepository<LegalIssue>,
    pub creators: MemoryRepository<Creator>,
    risk: RwLock<RiskSummary>,
}

impl DashboardStore {
    /// Create a store with no records and an empty risk summary
    pub fn empty() -> Self {
        Self {
            projects: MemoryRepository::new(),
            issues: MemoryRepository::new(),
            creators: MemoryRepository::new(),
            risk: RwLock::new(RiskSummary::default()),
        }
    }

    /// Create a store holding the mock dashboard data
    pub fn seeded() -> Self {
        Self {
            projects: MemoryRepository::with_records(seed::projects()),
            issues: MemoryRepository::with_records(seed::legal_issues()),
            creators: MemoryRepository::with_records(seed::creators()),
            risk: RwLock::new(seed::risk_summary()),
        }
    }

    /// Discard all changes and restore the seed data
    pub fn reset(&self) -> DeskResult<()> {
        self.projects.replace_all(seed::projects())?;
        self.issues.replace_all(seed::legal_issues())?;
        self.creators.replace_all(seed::creators())?;
        self.set_risk_summary(seed::risk_summary())?;

        log::info!("Dashboard store reset to seed data");
        Ok(())
    }

    /// Current risk summary
    pub fn risk_summary(&self) -> DeskResult<RiskSummary> {
        let risk = self.risk.read().map_err(|e| {
            DeskError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(risk.clone())
    }

    /// Replace the risk summary
    pub fn set_risk_summary(&self, summary: RiskSummary) -> DeskResult<()> {
        let mut risk = self.risk.write().map_err(|e| {
            DeskError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *risk = summary;
        Ok(())
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;
    use futures::executor::block_on;

    #[test]
    fn test_seeded_store_has_data() {
        let store = DashboardStore::seeded();
        assert_eq!(store.projects.count().unwrap(), 4);
        assert_eq!(store.issues.count().unwrap(), 4);
        assert_eq!(store.creators.count().unwrap(), 3);
        assert_eq!(store.risk_summary().unwrap().risk_index.as_deref(), Some("A"));
    }

    #[test]
    fn test_empty_store() {
        let store = DashboardStore::empty();
        assert!(block_on(store.projects.list()).unwrap().is_empty());
        assert_eq!(store.risk_summary().unwrap(), RiskSummary::default());
    }

    #[test]
    fn test_reset_restores_seed() {
        let store = DashboardStore::seeded();
        block_on(store.projects.remove(&RecordId::from("1"))).unwrap();
        block_on(store.issues.insert(LegalIssue::new("x.png", "Other", "Low"))).unwrap();
        store.creators.clear().unwrap();
        store
            .set_risk_summary(RiskSummary::new("D", 40.0, 10, 20.0))
            .unwrap();

        store.reset().unwrap();

        assert_eq!(block_on(store.projects.list()).unwrap(), seed::projects());
        assert_eq!(block_on(store.issues.list()).unwrap(), seed::legal_issues());
        assert_eq!(store.creators.count().unwrap(), 3);
        assert_eq!(store.risk_summary().unwrap(), seed::risk_summary());
    }

    #[test]
    fn test_stores_are_independent() {
        let a = DashboardStore::seeded();
        let b = DashboardStore::seeded();
        a.projects.clear().unwrap();
        assert_eq!(b.projects.count().unwrap(), 4);
    }
}
