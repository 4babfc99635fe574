//! HS256 bearer token issuance and verification.

use crate::auth::domain::{IssuedToken, TokenClaims, UserIdentity};
use crate::config::JwtSettings;
use chrono::{SubsecRound, TimeDelta};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

/// Errors returned by token issuance and verification.
#[derive(Debug, Error)]
pub enum TokenServiceError {
    /// The signing settings cannot produce tokens.
    #[error("token configuration error: {0}")]
    Configuration(String),

    /// Encoding or signing the token failed.
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// The token is malformed, expired, or carries a bad signature.
    #[error("token verification failed: {0}")]
    Verification(#[source] jsonwebtoken::errors::Error),
}

/// Stateless bearer token service.
#[derive(Clone)]
pub struct TokenService<C>
where
    C: Clock + Send + Sync,
{
    settings: JwtSettings,
    clock: Arc<C>,
}

impl<C> TokenService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a token service with the given signing settings.
    ///
    /// Settings are checked on every call so a misconfigured service refuses
    /// to issue rather than failing at construction.
    #[must_use]
    pub const fn new(settings: JwtSettings, clock: Arc<C>) -> Self {
        Self { settings, clock }
    }

    /// Issues a signed token for `identity` carrying one role claim per entry
    /// in `roles`.
    ///
    /// The issue instant is the clock's current time truncated to whole
    /// seconds; expiry is that instant plus the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`TokenServiceError::Configuration`] when the secret is empty
    /// or the lifetime is not positive, and [`TokenServiceError::Signing`]
    /// when encoding fails.
    #[tracing::instrument(skip_all, fields(subject = identity.id()))]
    pub fn issue_token(
        &self,
        identity: &UserIdentity,
        roles: &[String],
    ) -> Result<IssuedToken, TokenServiceError> {
        let lifetime = self.lifetime()?;
        let issued_at = self.clock.utc().trunc_subsecs(0);
        let expires_at = issued_at.checked_add_signed(lifetime).ok_or_else(|| {
            TokenServiceError::Configuration("token expiry is out of range".to_owned())
        })?;

        let claims = TokenClaims::new(identity, roles, issued_at, expires_at);
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.settings.key_bytes()),
        )
        .map_err(TokenServiceError::Signing)?;

        debug!(roles = roles.len(), %expires_at, "token issued");
        Ok(IssuedToken::new(token, issued_at, expires_at))
    }

    /// Verifies a token's signature and expiry and returns its claims.
    ///
    /// Expiry is checked against wall-clock time with no leeway.
    ///
    /// # Errors
    ///
    /// Returns [`TokenServiceError::Configuration`] when the secret is empty,
    /// or [`TokenServiceError::Verification`] when the token is rejected.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenServiceError> {
        self.lifetime()?;
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = jsonwebtoken::decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.settings.key_bytes()),
            &validation,
        )
        .map_err(TokenServiceError::Verification)?;
        Ok(data.claims)
    }

    fn lifetime(&self) -> Result<TimeDelta, TokenServiceError> {
        if let Err(err) = self.settings.validate() {
            error!(error = %err, "token settings are unusable");
            return Err(TokenServiceError::Configuration(err.to_string()));
        }
        TimeDelta::try_minutes(self.settings.lifetime_minutes()).ok_or_else(|| {
            TokenServiceError::Configuration("token lifetime is out of range".to_owned())
        })
    }
}
