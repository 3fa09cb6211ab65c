//! Refresh-record store trait defining the interface for refresh-token
//! revocation state.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshRecord;
use crate::errors::StorageError;

/// Keyed store of active refresh records.
///
/// The store is the single cross-request shared mutable resource of the
/// rotation protocol: a refresh token is live exactly as long as its record
/// exists here.
///
/// # Concurrency
/// `consume` MUST be a single atomic conditional delete. Implementing it as
/// a lookup followed by a delete reopens the duplicate-refresh race: two
/// requests bearing the same cookie could both pass the lookup before
/// either deletes, and both would rotate successfully.
#[async_trait]
pub trait RefreshStore: Send + Sync {
    /// Insert a new refresh record.
    ///
    /// # Returns
    /// * `Ok(())` - Record persisted
    /// * `Err(StorageError::Duplicate)` - Rotation id already present
    /// * `Err(StorageError::Database)` - I/O failure
    async fn insert(&self, record: RefreshRecord) -> Result<(), StorageError>;

    /// Find a record by rotation id.
    async fn lookup(&self, rotation_id: Uuid) -> Result<Option<RefreshRecord>, StorageError>;

    /// Atomically delete the record and report whether it existed.
    ///
    /// At most one caller observes `true` for a given rotation id; all
    /// concurrent callers observe `false`.
    async fn consume(&self, rotation_id: Uuid) -> Result<bool, StorageError>;

    /// Delete records whose `expires_at` has passed.
    ///
    /// Unconsumed expired records otherwise accumulate; the sweeper calls
    /// this periodically.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted
    async fn delete_expired(&self) -> Result<usize, StorageError>;
}
