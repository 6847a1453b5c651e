//! Asynchronous record repositories
//!
//! [`Repository`] is the boundary a real backend would sit behind. The
//! in-memory implementation completes immediately; callers still await it,
//! so swapping in a networked repository changes no call sites.

use std::sync::RwLock;

use crate::error::{DeskError, DeskResult};
use crate::models::{Creator, LegalIssue, Project, RecordId};

/// A record that lives in a repository
pub trait Entity: Clone + Send + Sync {
    /// Singular entity name used in error messages
    const ENTITY_TYPE: &'static str;

    fn id(&self) -> Option<&RecordId>;

    fn set_id(&mut self, id: RecordId);
}

impl Entity for Project {
    const ENTITY_TYPE: &'static str = "Project";

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

impl Entity for LegalIssue {
    const ENTITY_TYPE: &'static str = "Legal issue";

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

impl Entity for Creator {
    const ENTITY_TYPE: &'static str = "Creator";

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

/// CRUD access to one collection of records
#[allow(async_fn_in_trait)]
pub trait Repository<T: Entity> {
    /// All records in insertion order
    async fn list(&self) -> DeskResult<Vec<T>>;

    /// A record by id
    async fn get(&self, id: &RecordId) -> DeskResult<Option<T>>;

    /// Add a record, assigning an id if it has none
    async fn insert(&self, record: T) -> DeskResult<T>;

    /// Replace the record with the same id
    async fn update(&self, record: T) -> DeskResult<T>;

    /// Remove a record by id, returning it
    async fn remove(&self, id: &RecordId) -> DeskResult<T>;
}

/// Repository backed by an in-memory vector
pub struct MemoryRepository<T> {
    data: RwLock<Vec<T>>,
}

impl<T: Entity> MemoryRepository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a repository holding `records`
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            data: RwLock::new(records),
        }
    }

    /// Replace every record
    pub fn replace_all(&self, records: Vec<T>) -> DeskResult<()> {
        let mut data = self.data.write().map_err(|e| {
            DeskError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = records;
        Ok(())
    }

    /// Remove every record
    pub fn clear(&self) -> DeskResult<()> {
        self.replace_all(Vec::new())
    }

    /// Number of records
    pub fn count(&self) -> DeskResult<usize> {
        let data = self.data.read().map_err(|e| {
            DeskError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn list(&self) -> DeskResult<Vec<T>> {
        let data = self.data.read().map_err(|e| {
            DeskError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    async fn get(&self, id: &RecordId) -> DeskResult<Option<T>> {
        let data = self.data.read().map_err(|e| {
            DeskError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.iter().find(|r| r.id() == Some(id)).cloned())
    }

    async fn insert(&self, mut record: T) -> DeskResult<T> {
        let mut data = self.data.write().map_err(|e| {
            DeskError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if record.id().is_none() {
            record.set_id(RecordId::new());
        } else if data.iter().any(|r| r.id() == record.id()) {
            return Err(DeskError::Duplicate {
                entity_type: T::ENTITY_TYPE,
                identifier: record.id().map(ToString::to_string).unwrap_or_default(),
            });
        }

        log::debug!("Inserted {} {:?}", T::ENTITY_TYPE, record.id());
        data.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record: T) -> DeskResult<T> {
        let id = record
            .id()
            .cloned()
            .ok_or_else(|| DeskError::Validation(format!("{} has no id", T::ENTITY_TYPE)))?;

        let mut data = self.data.write().map_err(|e| {
            DeskError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let slot = data
            .iter_mut()
            .find(|r| r.id() == Some(&id))
            .ok_or_else(|| DeskError::not_found(T::ENTITY_TYPE, id.to_string()))?;
        *slot = record.clone();

        log::debug!("Updated {} {}", T::ENTITY_TYPE, id);
        Ok(record)
    }

    async fn remove(&self, id: &RecordId) -> DeskResult<T> {
        let mut data = self.data.write().map_err(|e| {
            DeskError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let index = data
            .iter()
            .position(|r| r.id() == Some(id))
            .ok_or_else(|| DeskError::not_found(T::ENTITY_TYPE, id.to_string()))?;

        log::debug!("Removed {} {}", T::ENTITY_TYPE, id);
        Ok(data.remove(index))
    }
}
