//! Periodic sweep of expired refresh records.
//!
//! Nothing in the rotation protocol deletes a record that expired without
//! ever being consumed, so they accumulate. The sweeper deletes them in the
//! background. Disabling it changes nothing observable for clients.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::errors::StorageError;
use crate::repositories::RefreshStore;

/// Configuration for the expired-record sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to run the sweep (in seconds)
    pub interval_seconds: u64,
    /// Whether to run the sweep at all
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600,
            enabled: true,
        }
    }
}

/// Background service deleting refresh records past their expiry.
pub struct ExpiredRecordSweeper<S: RefreshStore + 'static> {
    store: Arc<S>,
    config: SweeperConfig,
}

impl<S: RefreshStore + 'static> ExpiredRecordSweeper<S> {
    /// Create a new sweeper
    pub fn new(store: Arc<S>, config: SweeperConfig) -> Self {
        Self { store, config }
    }

    /// Run a single sweep cycle.
    pub async fn run_sweep(&self) -> Result<usize, StorageError> {
        let deleted = self.store.delete_expired().await?;
        if deleted > 0 {
            info!(deleted, "swept expired refresh records");
        }
        Ok(deleted)
    }

    /// Start the sweeper as a background task running at the configured
    /// interval.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("expired-record sweeper is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                interval_seconds = self.config.interval_seconds,
                "expired-record sweeper started"
            );

            let mut timer = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so startup does not
            // race schema creation.
            timer.tick().await;

            loop {
                timer.tick().await;
                if let Err(err) = self.run_sweep().await {
                    error!(error = %err, "expired-record sweep failed");
                }
            }
        });
    }
}
