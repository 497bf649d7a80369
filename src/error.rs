// src/error.rs
//! Error types with structured error handling.
//!
//! Every failure the crate can produce is named here. Query-construction
//! errors (`InvalidOperator`, `NotNumeric`, ...) are raised synchronously
//! before any network call; transport errors carry the typed Notion API
//! error vocabulary instead of magic strings.

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
///
/// Instead of matching against magic strings like `"rate_limited"`,
/// the domain vocabulary is encoded in the type system. Each variant
/// tells you exactly what the Notion API reported and enables
/// pattern-based recovery without stringly-typed dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// API rate limit exceeded — back off and retry
    RateLimited,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request body contains invalid JSON
    InvalidJson,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Conflict with current state of the resource
    Conflict,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl ApiErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "invalid_json" => Self::InvalidJson,
            "validation_error" => Self::ValidationFailed,
            "conflict_error" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether this error is transient and worth retrying.
    ///
    /// Retries themselves live with the caller — this crate never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServiceUnavailable | Self::InternalError
        )
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound)
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main crate error type.
#[derive(Error, Debug)]
pub enum Error {
    /// An operator that the given property type does not support.
    /// Caught at filter-construction time, never reaches the network.
    #[error("Operator '{operator}' is not valid for property type '{property_type}'")]
    InvalidOperator {
        operator: String,
        property_type: String,
    },

    /// A number filter received a value that is not a finite number.
    #[error("Number filter on property '{property}' requires a finite number, got {value}")]
    NotNumeric { property: String, value: f64 },

    /// A filter that cannot be serialized into a valid condition object.
    #[error("Invalid filter definition for property '{property}': {reason}")]
    InvalidFilterDefinition { property: String, reason: String },

    /// Both a single filter and a filter bag were set on the same query.
    #[error("Please provide either a filter bag or a single filter, not both")]
    ConflictingFilterSpecification,

    /// A property-type tag the operator table does not recognize.
    #[error("Unknown property type: '{0}'")]
    UnknownPropertyType(String),

    /// A verification filter received a status outside verified/expired/none.
    #[error("Invalid verification status '{0}'. Must be: verified, expired, or none")]
    InvalidVerificationStatus(String),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Notion API returned an error ({code}): {message}")]
    NotionApi {
        code: ApiErrorCode,
        message: String,
        status: u16,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}

/// Validation failures for domain value types.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
