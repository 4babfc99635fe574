//! Login flow: identity lookup, role resolution, token issuance.

use super::{TokenService, TokenServiceError};
use crate::auth::{
    domain::IssuedToken,
    ports::{IdentityProvider, IdentityProviderError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors returned by the login flow.
#[derive(Debug, Error)]
pub enum LoginError {
    /// No identity is registered for the principal.
    #[error("unknown principal: {0}")]
    UnknownPrincipal(String),
    /// Identity or role lookup failed.
    #[error(transparent)]
    Provider(#[from] IdentityProviderError),
    /// Token issuance failed.
    #[error(transparent)]
    Token(#[from] TokenServiceError),
}

/// Issues tokens for already-authenticated principals.
#[derive(Clone)]
pub struct LoginService<P, C>
where
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    provider: Arc<P>,
    tokens: TokenService<C>,
}

impl<P, C> LoginService<P, C>
where
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    /// Creates a login service.
    #[must_use]
    pub const fn new(provider: Arc<P>, tokens: TokenService<C>) -> Self {
        Self { provider, tokens }
    }

    /// Resolves `principal` and issues a token carrying its roles.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::UnknownPrincipal`] when the provider has no
    /// identity for `principal`, [`LoginError::Provider`] when a lookup fails,
    /// or [`LoginError::Token`] when issuance fails.
    #[tracing::instrument(skip_all)]
    pub async fn login(&self, principal: &str) -> Result<IssuedToken, LoginError> {
        let Some(identity) = self.provider.find_identity(principal).await? else {
            warn!("login rejected, principal is unknown");
            return Err(LoginError::UnknownPrincipal(principal.to_owned()));
        };

        let roles = self.provider.roles_for(&identity).await?;
        let issued = self.tokens.issue_token(&identity, &roles)?;
        info!(subject = identity.id(), "login succeeded");
        Ok(issued)
    }
}
