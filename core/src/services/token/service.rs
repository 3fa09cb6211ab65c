//! Main token service implementation

use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{AccessClaims, RefreshClaims, RefreshRecord, TokenPair};
use crate::domain::entities::user::UserIdentity;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::RefreshStore;

use super::config::TokenServiceConfig;

/// Service issuing signed access/refresh token pairs.
///
/// Pure with respect to its secrets; the only side effect is the refresh
/// record insert on each issue.
pub struct TokenService<S: RefreshStore> {
    store: Arc<S>,
    config: TokenServiceConfig,
    access_encoding: EncodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    refresh_validation: Validation,
    access_verifier: AccessTokenVerifier,
}

impl<S: RefreshStore> TokenService<S> {
    /// Creates a new token service.
    ///
    /// Fails if the refresh secret equals the access secret: a shared
    /// secret would let an access token be replayed as a refresh token.
    pub fn new(store: Arc<S>, config: TokenServiceConfig) -> DomainResult<Self> {
        if config.access_secret == config.refresh_secret {
            return Err(DomainError::Internal {
                message: "refresh secret must differ from access secret".to_string(),
            });
        }

        let access_encoding = EncodingKey::from_secret(config.access_secret.as_bytes());
        let refresh_encoding = EncodingKey::from_secret(config.refresh_secret.as_bytes());
        let refresh_decoding = DecodingKey::from_secret(config.refresh_secret.as_bytes());

        let mut refresh_validation = Validation::new(Algorithm::HS256);
        refresh_validation.validate_exp = true;
        refresh_validation.leeway = 0;

        let access_verifier =
            AccessTokenVerifier::new(DecodingKey::from_secret(config.access_secret.as_bytes()));

        Ok(Self {
            store,
            config,
            access_encoding,
            refresh_encoding,
            refresh_decoding,
            refresh_validation,
            access_verifier,
        })
    }

    /// Returns a cloneable verifier for access tokens, used by the bearer
    /// extractor without reaching through the generic service type.
    pub fn access_verifier(&self) -> AccessTokenVerifier {
        self.access_verifier.clone()
    }

    /// Access token expiry in seconds, as reported in `expiresIn`
    pub fn expires_in(&self) -> i64 {
        self.config.access_expiry_seconds()
    }

    /// Issues a new token pair for an identity.
    ///
    /// Generates a fresh rotation id, signs both tokens with their
    /// respective secrets and records the rotation id in the store. A
    /// failed insert is logged but does not fail issuance: the resulting
    /// record-less refresh token simply fails to validate at rotation time
    /// (fail-closed).
    pub async fn issue(&self, identity: &UserIdentity) -> DomainResult<TokenPair> {
        let rotation_id = Uuid::new_v4();

        let access_claims = AccessClaims::new(identity, self.config.access_expiry_minutes);
        let access_token = self.encode(&access_claims, &self.access_encoding)?;

        let refresh_claims =
            RefreshClaims::new(&identity.id, rotation_id, self.config.refresh_expiry_days);
        let refresh_token = self.encode(&refresh_claims, &self.refresh_encoding)?;

        let record = RefreshRecord::new(rotation_id, identity.id.clone(), self.config.refresh_expiry_days);
        if let Err(err) = self.store.insert(record).await {
            tracing::error!(%rotation_id, error = %err, "failed to persist refresh record");
        }

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.config.access_expiry_seconds(),
        })
    }

    /// Decodes and validates a refresh token with the refresh secret.
    pub fn decode_refresh(&self, token: &str) -> DomainResult<RefreshClaims> {
        decode::<RefreshClaims>(token, &self.refresh_decoding, &self.refresh_validation)
            .map(|data| data.claims)
            .map_err(map_jwt_error)
    }

    /// Verifies an access token and returns its claims.
    pub fn verify_access(&self, token: &str) -> DomainResult<AccessClaims> {
        self.access_verifier.verify(token)
    }

    fn encode<C: serde::Serialize>(&self, claims: &C, key: &EncodingKey) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }
}

/// Stateless access-token verifier.
///
/// Cloneable so the HTTP layer can hold one in app data without knowing
/// the store type parameter of [`TokenService`].
#[derive(Clone)]
pub struct AccessTokenVerifier {
    decoding: DecodingKey,
    validation: Validation,
}

impl AccessTokenVerifier {
    fn new(decoding: DecodingKey) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        Self { decoding, validation }
    }

    /// Verifies signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> DomainResult<AccessClaims> {
        decode::<AccessClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(map_jwt_error)
    }
}

fn map_jwt_error(err: jsonwebtoken::errors::Error) -> DomainError {
    use jsonwebtoken::errors::ErrorKind;

    let kind = match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    };
    DomainError::Token(kind)
}
