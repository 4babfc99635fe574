//! Runtime configuration loading.
//!
//! Settings are layered with the `config` crate: an optional
//! `taskmaster.{toml,json,yaml}` file in the working directory, then
//! environment variables prefixed with `TASKMASTER_` using `__` between
//! nested keys (for example `TASKMASTER_JWT__SECRET`).

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;
use tracing::error;

/// Token lifetime applied when none is configured.
pub const DEFAULT_TOKEN_LIFETIME_MINUTES: i64 = 120;

const CONFIG_FILE_STEM: &str = "taskmaster";
const ENV_PREFIX: &str = "TASKMASTER";

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// A configuration source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Source(#[from] config::ConfigError),

    /// A loaded value is unusable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Application configuration root.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Bearer token signing settings.
    pub jwt: JwtSettings,
}

impl AppConfig {
    /// Loads configuration from the optional config file and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError`] when a source cannot be parsed, required
    /// keys are missing, or the JWT settings fail validation.
    pub fn load() -> Result<Self, ConfigLoadError> {
        let builder =
            Config::builder().add_source(File::with_name(CONFIG_FILE_STEM).required(false));
        Self::finish(builder)
    }

    /// Parses configuration from an inline TOML document, with environment
    /// overrides applied on top.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError`] under the same conditions as
    /// [`AppConfig::load`].
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigLoadError> {
        let builder = Config::builder().add_source(File::from_str(contents, FileFormat::Toml));
        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigLoadError> {
        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        let loaded: Self = settings.try_deserialize()?;
        if let Err(err) = loaded.jwt.validate() {
            error!(error = %err, "rejecting JWT configuration");
            return Err(err);
        }
        Ok(loaded)
    }
}

/// Signing secret and lifetime used for bearer token issuance.
#[derive(Clone, Deserialize)]
pub struct JwtSettings {
    secret: Secret<String>,
    #[serde(default = "default_lifetime_minutes")]
    lifetime_minutes: i64,
}

impl JwtSettings {
    /// Creates settings from a secret and a lifetime in minutes.
    ///
    /// Values are not validated here; see [`JwtSettings::validate`].
    #[must_use]
    pub fn new(secret: impl Into<String>, lifetime_minutes: i64) -> Self {
        Self {
            secret: Secret::new(secret.into()),
            lifetime_minutes,
        }
    }

    /// Returns the configured token lifetime in minutes.
    #[must_use]
    pub const fn lifetime_minutes(&self) -> i64 {
        self.lifetime_minutes
    }

    /// Returns the raw signing key bytes (UTF-8 encoding of the secret).
    #[must_use]
    pub fn key_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }

    /// Checks that the settings can sign tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError::Invalid`] when the secret is empty or the
    /// lifetime is not positive.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.secret.expose_secret().is_empty() {
            return Err(ConfigLoadError::Invalid(
                "jwt.secret must not be empty".to_owned(),
            ));
        }
        if self.lifetime_minutes <= 0 {
            return Err(ConfigLoadError::Invalid(format!(
                "jwt.lifetime_minutes must be positive, got {}",
                self.lifetime_minutes
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &self.secret)
            .field("lifetime_minutes", &self.lifetime_minutes)
            .finish()
    }
}

const fn default_lifetime_minutes() -> i64 {
    DEFAULT_TOKEN_LIFETIME_MINUTES
}
