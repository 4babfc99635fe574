//! Bearer token issuance for authenticated identities.
//!
//! An identity resolved by the identity provider, together with its role
//! names, is turned into a signed, time-bounded HS256 token. Issued tokens are
//! never stored; verification is stateless and only needs the signing
//! secret.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
