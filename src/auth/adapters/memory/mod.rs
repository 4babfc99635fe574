//! In-memory identity adapters.

mod identity;

pub use identity::InMemoryIdentityProvider;
