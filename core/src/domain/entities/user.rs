//! User identity as supplied by the credential verifier.

use serde::{Deserialize, Serialize};

/// Opaque user identity.
///
/// Ownership of user records lives with the credential verifier; this core
/// only ever sees the resolved `{id, username}` pair. The configured admin
/// account uses the fixed id `"admin"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Stable user id, used as the token subject
    pub id: String,

    /// Display username, embedded in access-token claims
    pub username: String,
}

impl UserIdentity {
    /// Creates a new identity
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}
