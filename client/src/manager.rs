//! Access-token manager with proactive renewal.

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::timer::RenewalTimer;
use crate::transport::{RefreshGrant, RefreshTransport};

/// Scheduler tuning for proactive renewal.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// How many seconds before expiry to renew
    pub margin_seconds: i64,

    /// Floor for the renewal delay, guarding against pathologically short
    /// token lifetimes
    pub min_delay: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            margin_seconds: 60,
            min_delay: Duration::from_millis(5000),
        }
    }
}

/// Delay until the next proactive renewal:
/// `max(expires_in - margin, min_delay)`.
pub fn renewal_delay(expires_in: i64, config: &SchedulerConfig) -> Duration {
    let ahead_of_expiry = expires_in.saturating_sub(config.margin_seconds).max(0);
    Duration::from_secs(ahead_of_expiry as u64).max(config.min_delay)
}

/// UI activity that should trigger an immediate renewal - a backgrounded
/// tab's timer may have been delayed arbitrarily long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivitySignal {
    /// Tab became visible again
    Visible,
    /// Window regained focus
    Focused,
}

/// Client-side holder of the access token.
///
/// The token lives only in memory here; nothing is persisted. One renewal
/// timer exists per manager, and each successful refresh re-arms it from
/// the reported `expires_in`. A failed refresh clears all local state and
/// does not retry: a revoked session must not generate a retry storm, and
/// the next activity signal or explicit login restarts the cycle.
pub struct TokenManager<T: RefreshTransport> {
    transport: T,
    config: SchedulerConfig,
    access_token: Mutex<Option<String>>,
    timer: RenewalTimer,
    /// Handle back to the owning Arc, for the spawned renewal tasks.
    /// Tasks hold only this weak reference, so dropping the last external
    /// Arc ends the renewal chain instead of keeping the manager alive.
    self_handle: Weak<Self>,
}

impl<T: RefreshTransport> TokenManager<T> {
    /// Create a manager with default scheduling.
    pub fn new(transport: T) -> Arc<Self> {
        Self::with_config(transport, SchedulerConfig::default())
    }

    /// Create a manager with explicit scheduling parameters.
    pub fn with_config(transport: T, config: SchedulerConfig) -> Arc<Self> {
        Arc::new_cyclic(|self_handle| Self {
            transport,
            config,
            access_token: Mutex::new(None),
            timer: RenewalTimer::new(),
            self_handle: self_handle.clone(),
        })
    }

    /// Current access token, if the session is live.
    pub fn access_token(&self) -> Option<String> {
        self.lock_token().clone()
    }

    /// Whether a renewal is currently scheduled.
    pub fn is_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// Call the refresh endpoint once.
    ///
    /// On success the new token is stored, the renewal timer re-armed from
    /// `expires_in`, and the token returned. On any failure local state is
    /// cleared and `None` returned - the session is treated as logged out
    /// until a new login or activity signal.
    pub async fn refresh_now(&self) -> Option<String> {
        match self.transport.refresh().await {
            Some(grant) => {
                *self.lock_token() = Some(grant.access_token.clone());
                self.arm_renewal(&grant);
                Some(grant.access_token)
            }
            None => {
                debug!("refresh failed, treating session as logged out");
                self.clear();
                None
            }
        }
    }

    /// Drop the token and cancel any pending renewal.
    pub fn clear(&self) {
        *self.lock_token() = None;
        self.timer.disarm();
    }

    /// Forward visibility/focus signals into immediate renewals.
    ///
    /// The embedding UI pushes an [`ActivitySignal`] whenever the tab
    /// becomes visible or the window regains focus. The returned guard
    /// removes the listener when detached or dropped.
    pub fn attach_activity_signals(
        &self,
        mut signals: mpsc::UnboundedReceiver<ActivitySignal>,
    ) -> DetachGuard {
        let weak = self.self_handle.clone();
        let handle = tokio::spawn(async move {
            while let Some(signal) = signals.recv().await {
                let Some(manager) = weak.upgrade() else {
                    break;
                };
                debug!(?signal, "activity signal, refreshing");
                let _ = manager.refresh_now().await;
            }
        });

        DetachGuard {
            handle: Some(handle),
        }
    }

    fn arm_renewal(&self, grant: &RefreshGrant) {
        let delay = renewal_delay(grant.expires_in, &self.config);
        debug!(delay_secs = delay.as_secs(), "scheduling next renewal");

        let weak = self.self_handle.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(manager) = weak.upgrade() {
                // refresh_now re-arms (or clears) the timer, aborting this
                // task's own handle. No await may follow it here: the abort
                // would land on the next suspension point.
                let _ = manager.refresh_now().await;
            }
        });

        // Swapping in the new handle cancels the previous arming.
        self.timer.arm(handle);
    }

    fn lock_token(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.access_token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Removes the activity listener when detached or dropped.
pub struct DetachGuard {
    handle: Option<JoinHandle<()>>,
}

impl DetachGuard {
    /// Stop listening for activity signals.
    pub fn detach(mut self) {
        self.abort_listener();
    }

    fn abort_listener(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for DetachGuard {
    fn drop(&mut self) {
        self.abort_listener();
    }
}
