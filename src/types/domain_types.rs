// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use crate::error::ValidationError;
use std::fmt;

/// API key for Notion API authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key with validation
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();

        if key.is_empty() {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key cannot be empty".to_string(),
            });
        }

        if !key.starts_with("secret_") && !key.starts_with("ntn_") {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key must start with 'secret_' or 'ntn_'".to_string(),
            });
        }

        if key.len() < 20 {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key is too short".to_string(),
            });
        }

        Ok(Self(key))
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create an API key without validation (only for testing)
    #[cfg(test)]
    pub fn new_unchecked(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact API key in display
        write!(f, "{}...", &self.0[..10.min(self.0.len())])
    }
}

/// Opaque pagination cursor returned by the Notion API.
///
/// The cursor is treated as an opaque token: it is never parsed, only
/// carried back verbatim on the next query request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartCursor(String);

impl StartCursor {
    pub fn new(cursor: impl Into<String>) -> Result<Self, ValidationError> {
        let cursor = cursor.into();
        if cursor.is_empty() {
            return Err(ValidationError::EmptyField("start_cursor"));
        }
        Ok(Self(cursor))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StartCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
