//! In-memory implementation of the RefreshStore trait.
//!
//! Used by integration tests and by development setups without a database.
//! All operations take the single map lock, so `consume` (a `remove` under
//! that lock) is the required atomic conditional delete.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use sesame_core::domain::entities::token::RefreshRecord;
use sesame_core::errors::StorageError;
use sesame_core::repositories::RefreshStore;

/// In-memory refresh store
#[derive(Default)]
pub struct MemoryRefreshStore {
    records: Mutex<HashMap<Uuid, RefreshRecord>>,
}

impl MemoryRefreshStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    /// Overwrite a record unconditionally (test hook for simulating
    /// inconsistent store state).
    pub async fn put(&self, record: RefreshRecord) {
        self.records.lock().await.insert(record.rotation_id, record);
    }
}

#[async_trait]
impl RefreshStore for MemoryRefreshStore {
    async fn insert(&self, record: RefreshRecord) -> Result<(), StorageError> {
        let mut records = self.records.lock().await;
        if records.contains_key(&record.rotation_id) {
            return Err(StorageError::Duplicate);
        }
        records.insert(record.rotation_id, record);
        Ok(())
    }

    async fn lookup(&self, rotation_id: Uuid) -> Result<Option<RefreshRecord>, StorageError> {
        Ok(self.records.lock().await.get(&rotation_id).cloned())
    }

    async fn consume(&self, rotation_id: Uuid) -> Result<bool, StorageError> {
        Ok(self.records.lock().await.remove(&rotation_id).is_some())
    }

    async fn delete_expired(&self) -> Result<usize, StorageError> {
        let mut records = self.records.lock().await;
        let initial_count = records.len();
        records.retain(|_, record| !record.is_expired());
        Ok(initial_count - records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_consume_reports_existence_exactly_once() {
        let store = MemoryRefreshStore::new();
        let rotation_id = Uuid::new_v4();
        store
            .insert(RefreshRecord::new(rotation_id, "user-1", 7))
            .await
            .unwrap();

        assert!(store.consume(rotation_id).await.unwrap());
        assert!(!store.consume(rotation_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_consume_has_single_winner() {
        let store = Arc::new(MemoryRefreshStore::new());
        let rotation_id = Uuid::new_v4();
        store
            .insert(RefreshRecord::new(rotation_id, "user-1", 7))
            .await
            .unwrap();

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.consume(rotation_id).await.unwrap() }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
    }
}
