//! Client-side session keeper for the Sesame auth service.
//!
//! Holds the access token in volatile memory only and proactively renews
//! it before expiry via the refresh endpoint. The refresh token itself
//! never passes through this crate: it lives in the HttpOnly cookie that
//! the HTTP transport's cookie store sends automatically.

pub mod manager;
pub mod timer;
pub mod transport;

pub use manager::{renewal_delay, ActivitySignal, DetachGuard, SchedulerConfig, TokenManager};
pub use timer::RenewalTimer;
pub use transport::{HttpRefreshTransport, RefreshGrant, RefreshTransport};
