//! Mock implementation of RefreshStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshRecord;
use crate::errors::StorageError;

use super::refresh_store::RefreshStore;

/// In-memory refresh store for unit tests.
///
/// `fail_inserts` simulates an unreachable store so tests can observe the
/// issue-despite-insert-failure path.
pub struct MockRefreshStore {
    records: Arc<RwLock<HashMap<Uuid, RefreshRecord>>>,
    fail_inserts: AtomicBool,
}

impl MockRefreshStore {
    /// Create a new mock store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            fail_inserts: AtomicBool::new(false),
        }
    }

    /// Make every subsequent insert fail
    pub fn fail_inserts(&self) {
        self.fail_inserts.store(true, Ordering::SeqCst);
    }

    /// Number of live records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Overwrite a record in place, bypassing uniqueness checks (used to
    /// simulate tampered or inconsistent store state).
    pub async fn put(&self, record: RefreshRecord) {
        self.records.write().await.insert(record.rotation_id, record);
    }
}

impl Default for MockRefreshStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshStore for MockRefreshStore {
    async fn insert(&self, record: RefreshRecord) -> Result<(), StorageError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(StorageError::Database {
                message: "store unavailable".to_string(),
            });
        }

        let mut records = self.records.write().await;
        if records.contains_key(&record.rotation_id) {
            return Err(StorageError::Duplicate);
        }
        records.insert(record.rotation_id, record);
        Ok(())
    }

    async fn lookup(&self, rotation_id: Uuid) -> Result<Option<RefreshRecord>, StorageError> {
        let records = self.records.read().await;
        Ok(records.get(&rotation_id).cloned())
    }

    async fn consume(&self, rotation_id: Uuid) -> Result<bool, StorageError> {
        // Single remove under the write lock: the atomic conditional delete.
        let mut records = self.records.write().await;
        Ok(records.remove(&rotation_id).is_some())
    }

    async fn delete_expired(&self) -> Result<usize, StorageError> {
        let mut records = self.records.write().await;
        let initial_count = records.len();
        records.retain(|_, record| !record.is_expired());
        Ok(initial_count - records.len())
    }
}
