//! Error types for identity validation.

use thiserror::Error;

/// Errors returned while constructing identity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// A required identity field is empty after trimming.
    #[error("identity field '{0}' must not be empty")]
    EmptyField(&'static str),
}
