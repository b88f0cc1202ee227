//! Completion-service credential.

use std::fmt;

use crate::domain::AppError;

/// API key for the completion service, read once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap an API key. Blank keys are treated as missing.
    pub fn new(var: &str, value: impl Into<String>) -> Result<Self, AppError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::MissingCredential { var: var.to_string() });
        }
        Ok(Self(value))
    }

    /// Read the API key from the named environment variable.
    pub fn from_env(var: &str) -> Result<Self, AppError> {
        let value = std::env::var(var)
            .map_err(|_| AppError::MissingCredential { var: var.to_string() })?;
        Self::new(var, value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}
