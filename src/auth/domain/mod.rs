//! Domain model for identities and issued credentials.

mod claims;
mod error;
mod identity;

pub use claims::{IssuedToken, TokenClaims};
pub use error::IdentityError;
pub use identity::UserIdentity;
