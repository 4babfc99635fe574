//! Port contracts for identity resolution.

pub mod identity;

pub use identity::{IdentityProvider, IdentityProviderError, IdentityProviderResult};
