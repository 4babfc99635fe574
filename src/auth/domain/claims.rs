//! Claim set and issued credential types.

use super::UserIdentity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims embedded in an issued bearer token.
///
/// Field order matches the serialized payload: subject claims first, then one
/// role entry per role, then the time claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Stable user identifier.
    #[serde(rename = "nameid")]
    pub subject: String,
    /// Email address.
    pub email: String,
    /// Display name.
    #[serde(rename = "unique_name")]
    pub name: String,
    /// Role names in provider order.
    #[serde(rename = "role", default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    /// Not-before time, seconds since the Unix epoch.
    pub nbf: i64,
    /// Issue time, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry time, seconds since the Unix epoch.
    pub exp: i64,
}

impl TokenClaims {
    /// Builds the claim set for `identity` valid from `issued_at` until
    /// `expires_at`.
    #[must_use]
    pub fn new(
        identity: &UserIdentity,
        roles: &[String],
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            subject: identity.id().to_owned(),
            email: identity.email().to_owned(),
            name: identity.display_name().to_owned(),
            roles: roles.to_vec(),
            nbf: issued_at.timestamp(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns `true` when `role` is among the role claims.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|candidate| candidate == role)
    }
}

/// Signed compact token handed back to the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct IssuedToken {
    token: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl IssuedToken {
    /// Wraps an encoded token with its validity window.
    #[must_use]
    pub const fn new(token: String, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token,
            issued_at,
            expires_at,
        }
    }

    /// Returns the compact `header.payload.signature` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Consumes the value and returns the compact token string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.token
    }

    /// Returns the issue instant.
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Returns the expiry instant.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

impl std::fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuedToken")
            .field("token", &"[REDACTED]")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
