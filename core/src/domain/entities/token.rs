//! Token entities for JWT-based session management.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserIdentity;

/// Claims carried by an access token.
///
/// Access tokens are stateless: they are never persisted server-side and
/// are verified by signature and expiry only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user id)
    pub sub: String,

    /// Display username
    pub username: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl AccessClaims {
    /// Creates access-token claims for an identity with the given TTL.
    pub fn new(identity: &UserIdentity, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(ttl_minutes);

        Self {
            sub: identity.id.clone(),
            username: identity.username.clone(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Claims carried by a refresh token.
///
/// The rotation id (`rid`) correlates the token with a server-side
/// [`RefreshRecord`]; the signature alone is not enough to refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (user id)
    pub sub: String,

    /// Rotation id, unique per issued refresh token
    pub rid: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl RefreshClaims {
    /// Creates refresh-token claims for a user with the given TTL.
    pub fn new(user_id: &str, rotation_id: Uuid, ttl_days: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::days(ttl_days);

        Self {
            sub: user_id.to_string(),
            rid: rotation_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Parses the rotation id claim.
    pub fn rotation_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.rid)
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Persisted refresh record.
///
/// A record exists if and only if its refresh token is still considered
/// valid by the server. Records are never mutated: rotation deletes the old
/// record and inserts a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRecord {
    /// Rotation id, unique per issued refresh token
    pub rotation_id: Uuid,

    /// User id this record belongs to
    pub user_id: String,

    /// Timestamp when the corresponding refresh token expires
    pub expires_at: DateTime<Utc>,
}

impl RefreshRecord {
    /// Creates a new refresh record expiring after the given TTL.
    pub fn new(rotation_id: Uuid, user_id: impl Into<String>, ttl_days: i64) -> Self {
        Self {
            rotation_id,
            user_id: user_id.into(),
            expires_at: Utc::now() + Duration::days(ttl_days),
        }
    }

    /// Checks if the record has outlived its refresh token
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Token pair returned to the client on login and on each rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Signed refresh token
    pub refresh_token: String,

    /// Access token expiry in seconds, for client-side renewal scheduling
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> UserIdentity {
        UserIdentity::new("user-1", "alice")
    }

    #[test]
    fn test_access_claims() {
        let claims = AccessClaims::new(&identity(), 10);

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.username, "alice");
        assert!(!claims.is_expired());

        let now = Utc::now().timestamp();
        assert!(claims.exp > now);
        assert!(claims.exp <= now + 10 * 60 + 1);
    }

    #[test]
    fn test_access_claims_expiration() {
        let mut claims = AccessClaims::new(&identity(), 10);
        claims.exp = Utc::now().timestamp() - 1;
        assert!(claims.is_expired());
    }

    #[test]
    fn test_refresh_claims_rotation_id_roundtrip() {
        let rotation_id = Uuid::new_v4();
        let claims = RefreshClaims::new("user-1", rotation_id, 7);

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.rotation_id().unwrap(), rotation_id);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_refresh_claims_bad_rotation_id() {
        let mut claims = RefreshClaims::new("user-1", Uuid::new_v4(), 7);
        claims.rid = "not-a-uuid".to_string();
        assert!(claims.rotation_id().is_err());
    }

    #[test]
    fn test_refresh_record_expiration() {
        let record = RefreshRecord::new(Uuid::new_v4(), "user-1", 7);
        assert!(!record.is_expired());

        let stale = RefreshRecord {
            expires_at: Utc::now() - Duration::days(1),
            ..record
        };
        assert!(stale.is_expired());
    }

    #[test]
    fn test_token_pair_serialization() {
        let pair = TokenPair {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in: 600,
        };

        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: TokenPair = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
