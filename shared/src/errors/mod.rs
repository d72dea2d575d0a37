//! Error catalog shared by every layer
//!
//! The catalog is a closed set of stable, machine-readable error keys. Each key
//! is bound to a default HTTP status code and a default human-readable message.
//! Only the key and the code are part of the wire contract; messages may be
//! overridden or localized freely.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable error key sent to clients in the `error` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKey {
    AllFieldsRequired,
    BadRequest,
    FailedToParseRequest,
    Forbidden,
    InvalidUserCredentials,
    NetworkError,
    NotFound,
    Unauthenticated,
    Unauthorized,
    Unknown,
}

impl ErrorKey {
    /// Every key of the catalog, in catalog order
    pub const ALL: [ErrorKey; 10] = [
        ErrorKey::AllFieldsRequired,
        ErrorKey::BadRequest,
        ErrorKey::FailedToParseRequest,
        ErrorKey::Forbidden,
        ErrorKey::InvalidUserCredentials,
        ErrorKey::NetworkError,
        ErrorKey::NotFound,
        ErrorKey::Unauthenticated,
        ErrorKey::Unauthorized,
        ErrorKey::Unknown,
    ];

    /// Wire representation of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKey::AllFieldsRequired => "ALL_FIELDS_REQUIRED",
            ErrorKey::BadRequest => "BAD_REQUEST",
            ErrorKey::FailedToParseRequest => "FAILED_TO_PARSE_REQUEST",
            ErrorKey::Forbidden => "FORBIDDEN",
            ErrorKey::InvalidUserCredentials => "INVALID_USER_CREDENTIALS",
            ErrorKey::NetworkError => "NETWORK_ERROR",
            ErrorKey::NotFound => "NOT_FOUND",
            ErrorKey::Unauthenticated => "UNAUTHENTICATED",
            ErrorKey::Unauthorized => "UNAUTHORIZED",
            ErrorKey::Unknown => "UNKNOWN",
        }
    }

    /// HTTP status code bound to the key
    pub fn default_code(&self) -> u16 {
        match self {
            ErrorKey::AllFieldsRequired => 406,
            ErrorKey::BadRequest => 400,
            ErrorKey::FailedToParseRequest => 422,
            ErrorKey::Forbidden => 403,
            ErrorKey::InvalidUserCredentials => 400,
            ErrorKey::NetworkError => 503,
            ErrorKey::NotFound => 404,
            ErrorKey::Unauthenticated => 401,
            ErrorKey::Unauthorized => 401,
            ErrorKey::Unknown => 500,
        }
    }

    /// Default message bound to the key
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKey::AllFieldsRequired => "The required fields for this method were not provided",
            ErrorKey::BadRequest => "Something is wrong, is it me? Or you?",
            ErrorKey::FailedToParseRequest => "Failed to properly parse this request' contents",
            ErrorKey::Forbidden => "Access forbidden to this resource",
            ErrorKey::InvalidUserCredentials => "The provided user credentials are invalid",
            ErrorKey::NetworkError => "Network service unreachable",
            ErrorKey::NotFound => "Couldn't find what you were looking for",
            ErrorKey::Unauthenticated => "User unauthenticated for this request",
            ErrorKey::Unauthorized => "User unauthorized for this request",
            ErrorKey::Unknown => "An unknown error occurred",
        }
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown error key: {}", s))
    }
}

/// Look up the default code and message for a key
pub fn lookup(key: ErrorKey) -> (u16, &'static str) {
    (key.default_code(), key.description())
}

/// Capability set of a catalog-bound failure
///
/// Anything implementing this trait can populate the error branch of a
/// [`ResultEnvelope`](crate::types::ResultEnvelope).
pub trait CatalogError {
    /// HTTP status code to answer with
    fn code(&self) -> u16;

    /// Stable error key
    fn error_key(&self) -> ErrorKey;

    /// Human-readable message
    fn message(&self) -> &str;
}
