//! # Sesame Core
//!
//! Core business logic and domain layer for the Sesame auth service.
//! This crate contains the token entities, the refresh-record store
//! interface, the token issuance/rotation services and the error taxonomy
//! that the HTTP layer maps onto responses.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
