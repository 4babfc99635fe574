//! In-memory identity provider for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::{
    domain::UserIdentity,
    ports::{IdentityProvider, IdentityProviderError, IdentityProviderResult},
};

/// Thread-safe in-memory identity provider.
///
/// Principals are matched exactly; role lists keep their registration order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityProvider {
    state: Arc<RwLock<InMemoryIdentityState>>,
}

#[derive(Debug, Default)]
struct InMemoryIdentityState {
    principals: HashMap<String, UserIdentity>,
    roles: HashMap<String, Vec<String>>,
}

impl InMemoryIdentityProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `identity` under `principal` with the given roles,
    /// replacing any previous registration.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityProviderError::Provider`] if the lock is poisoned.
    pub fn register(
        &self,
        principal: impl Into<String>,
        identity: UserIdentity,
        roles: impl IntoIterator<Item = String>,
    ) -> IdentityProviderResult<()> {
        let mut state = self.state.write().map_err(|err| {
            IdentityProviderError::provider(std::io::Error::other(err.to_string()))
        })?;
        state
            .roles
            .insert(identity.id().to_owned(), roles.into_iter().collect());
        state.principals.insert(principal.into(), identity);
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn find_identity(
        &self,
        principal: &str,
    ) -> IdentityProviderResult<Option<UserIdentity>> {
        let state = self.state.read().map_err(|err| {
            IdentityProviderError::provider(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.principals.get(principal).cloned())
    }

    async fn roles_for(&self, identity: &UserIdentity) -> IdentityProviderResult<Vec<String>> {
        let state = self.state.read().map_err(|err| {
            IdentityProviderError::provider(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.roles.get(identity.id()).cloned().unwrap_or_default())
    }
}
