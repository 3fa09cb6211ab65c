//! Owned, swappable renewal timer.

use std::sync::Mutex;
use tokio::task::JoinHandle;

/// Holder for the single pending renewal task.
///
/// Arming stores the new task handle and aborts whatever was pending, so
/// overlapping timers cannot coexist: cancel-by-rearming is the only
/// cancellation path besides [`disarm`](Self::disarm).
#[derive(Default)]
pub struct RenewalTimer {
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl RenewalTimer {
    /// Create an unarmed timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `handle` as the pending renewal, cancelling any previous
    /// arming.
    pub fn arm(&self, handle: JoinHandle<()>) {
        let previous = self.lock().replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// Cancel the pending renewal, if any.
    pub fn disarm(&self) {
        if let Some(handle) = self.lock().take() {
            handle.abort();
        }
    }

    /// Whether a renewal is currently pending.
    pub fn is_armed(&self) -> bool {
        self.lock()
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        // The lock only guards a handle swap; a poisoned value is still a
        // valid handle.
        self.handle.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for RenewalTimer {
    fn drop(&mut self) {
        if let Some(handle) = self
            .handle
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
        {
            handle.abort();
        }
    }
}
