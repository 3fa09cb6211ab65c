//! Main authentication service implementation

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::UserIdentity;
use crate::errors::{CredentialError, DomainError, DomainResult, RevocationError, TokenError};
use crate::repositories::RefreshStore;
use crate::services::credentials::CredentialVerifier;
use crate::services::token::TokenService;

/// Authentication service driving the session lifecycle.
///
/// All state is per-request; the refresh store is the only shared mutable
/// resource across requests.
pub struct AuthService<S, V>
where
    S: RefreshStore,
    V: CredentialVerifier,
{
    /// Refresh-record store, shared with the token service
    store: Arc<S>,
    /// External credential verifier
    verifier: Arc<V>,
    /// Token service for issuing pairs
    tokens: Arc<TokenService<S>>,
}

impl<S, V> AuthService<S, V>
where
    S: RefreshStore,
    V: CredentialVerifier,
{
    /// Create a new authentication service
    pub fn new(store: Arc<S>, verifier: Arc<V>, tokens: Arc<TokenService<S>>) -> Self {
        Self {
            store,
            verifier,
            tokens,
        }
    }

    /// The token service backing this auth service
    pub fn tokens(&self) -> &TokenService<S> {
        &self.tokens
    }

    /// Authenticate credentials and issue the first token pair of a
    /// session.
    ///
    /// Every verifier rejection surfaces as `InvalidCredentials`,
    /// regardless of which check failed; storage failures keep their own
    /// class so the HTTP layer can answer 500 instead of 401.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<TokenPair> {
        if username.is_empty() || password.is_empty() {
            return Err(CredentialError::MissingCredentials.into());
        }

        let identity = match self.verifier.verify(username, password).await {
            Ok(identity) => identity,
            Err(DomainError::Storage(err)) => return Err(DomainError::Storage(err)),
            Err(err) => {
                debug!(error = %err, "credential verification rejected");
                return Err(CredentialError::InvalidCredentials.into());
            }
        };

        self.tokens.issue(&identity).await
    }

    /// Rotate a refresh token: consume its record and issue a fresh pair.
    ///
    /// Ordering is load-bearing: signature, then lookup, then owner check,
    /// then the atomic consume. A `false` consume means a concurrent
    /// request with the same cookie won the rotation; this caller must see
    /// a revocation failure, never a second pair.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let claims = self.tokens.decode_refresh(refresh_token)?;
        let rotation_id = claims
            .rotation_id()
            .map_err(|_| DomainError::Token(TokenError::Malformed))?;

        let record = self
            .store
            .lookup(rotation_id)
            .await?
            .ok_or(DomainError::Revocation(RevocationError::NoRecord))?;

        if record.user_id != claims.sub {
            // The record cannot belong to this token; drop it so it cannot
            // be presented again.
            if let Err(err) = self.store.consume(rotation_id).await {
                warn!(%rotation_id, error = %err, "cleanup of mismatched refresh record failed");
            }
            return Err(RevocationError::OwnerMismatch.into());
        }

        if !self.store.consume(rotation_id).await? {
            return Err(RevocationError::RacedAway.into());
        }

        // The refresh claims carry no username; the rotated access token
        // falls back to the subject id.
        let identity = UserIdentity::new(claims.sub.clone(), claims.sub);
        self.tokens.issue(&identity).await
    }

    /// End a session: best-effort consume of the presented token's record.
    ///
    /// Never fails for the caller. An unverifiable or absent cookie and an
    /// unreachable store all still count as a successful logout.
    pub async fn logout(&self, refresh_token: Option<&str>) {
        let Some(token) = refresh_token else {
            return;
        };

        let Ok(claims) = self.tokens.decode_refresh(token) else {
            return;
        };
        let Ok(rotation_id) = claims.rotation_id() else {
            return;
        };

        if let Err(err) = self.store.consume(rotation_id).await {
            warn!(%rotation_id, error = %err, "failed to consume refresh record on logout");
        }
    }
}
