//! Identity and role provider port.

use crate::auth::domain::UserIdentity;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity provider operations.
pub type IdentityProviderResult<T> = Result<T, IdentityProviderError>;

/// Resolves authenticated principals to identities and role names.
///
/// Credential checks happen before this contract is consulted; a principal
/// passed here is already authenticated.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Finds the identity registered for `principal`.
    ///
    /// Returns `None` when the principal is unknown.
    async fn find_identity(&self, principal: &str)
    -> IdentityProviderResult<Option<UserIdentity>>;

    /// Returns the role names assigned to `identity`, in provider order.
    async fn roles_for(&self, identity: &UserIdentity) -> IdentityProviderResult<Vec<String>>;
}

/// Errors returned by identity provider implementations.
#[derive(Debug, Clone, Error)]
pub enum IdentityProviderError {
    /// Backing store failure.
    #[error("identity provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityProviderError {
    /// Wraps a backing store error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
