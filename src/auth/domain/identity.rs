//! Authenticated user identity.

use super::IdentityError;
use serde::{Deserialize, Serialize};

/// Stable identifier, email, and display name of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserIdentity {
    id: String,
    email: String,
    display_name: String,
}

impl UserIdentity {
    /// Creates a validated identity. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::EmptyField`] naming the first blank field.
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        Ok(Self {
            id: required("id", id.into())?,
            email: required("email", email.into())?,
            display_name: required("display_name", display_name.into())?,
        })
    }

    /// Returns the stable user identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

fn required(field: &'static str, value: String) -> Result<String, IdentityError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IdentityError::EmptyField(field));
    }
    Ok(trimmed.to_owned())
}
