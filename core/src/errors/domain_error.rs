//! Catalog-bound domain errors
//!
//! One variant per catalog key. Code and key are fixed by the variant; only the
//! message may differ per instance.

use ar_shared::errors::{CatalogError, ErrorKey};
use thiserror::Error;

/// Domain failure raised by route operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{message}")]
    AllFieldsRequired { message: String },

    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    FailedToParseRequest { message: String },

    #[error("{message}")]
    Forbidden { message: String },

    #[error("{message}")]
    InvalidUserCredentials { message: String },

    #[error("{message}")]
    NetworkError { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Unauthenticated { message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    Unknown { message: String },
}

impl DomainError {
    /// Build the variant bound to `key`, falling back to the catalog message
    /// when `message` is missing or empty
    pub fn new(key: ErrorKey, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| key.description().to_string());

        match key {
            ErrorKey::AllFieldsRequired => DomainError::AllFieldsRequired { message },
            ErrorKey::BadRequest => DomainError::BadRequest { message },
            ErrorKey::FailedToParseRequest => DomainError::FailedToParseRequest { message },
            ErrorKey::Forbidden => DomainError::Forbidden { message },
            ErrorKey::InvalidUserCredentials => DomainError::InvalidUserCredentials { message },
            ErrorKey::NetworkError => DomainError::NetworkError { message },
            ErrorKey::NotFound => DomainError::NotFound { message },
            ErrorKey::Unauthenticated => DomainError::Unauthenticated { message },
            ErrorKey::Unauthorized => DomainError::Unauthorized { message },
            ErrorKey::Unknown => DomainError::Unknown { message },
        }
    }

    /// Variant for `key` with its catalog message
    pub fn from_key(key: ErrorKey) -> Self {
        Self::new(key, None)
    }

    /// Variant for `key` with a custom message
    pub fn with_message(key: ErrorKey, message: impl Into<String>) -> Self {
        Self::new(key, Some(message.into()))
    }

    pub fn all_fields_required() -> Self {
        Self::from_key(ErrorKey::AllFieldsRequired)
    }

    pub fn bad_request() -> Self {
        Self::from_key(ErrorKey::BadRequest)
    }

    pub fn failed_to_parse_request() -> Self {
        Self::from_key(ErrorKey::FailedToParseRequest)
    }

    pub fn forbidden() -> Self {
        Self::from_key(ErrorKey::Forbidden)
    }

    pub fn invalid_user_credentials() -> Self {
        Self::from_key(ErrorKey::InvalidUserCredentials)
    }

    pub fn network_error() -> Self {
        Self::from_key(ErrorKey::NetworkError)
    }

    pub fn not_found() -> Self {
        Self::from_key(ErrorKey::NotFound)
    }

    pub fn unauthenticated() -> Self {
        Self::from_key(ErrorKey::Unauthenticated)
    }

    pub fn unauthorized() -> Self {
        Self::from_key(ErrorKey::Unauthorized)
    }

    pub fn unknown() -> Self {
        Self::from_key(ErrorKey::Unknown)
    }

    /// Catalog key of the variant
    pub fn key(&self) -> ErrorKey {
        match self {
            DomainError::AllFieldsRequired { .. } => ErrorKey::AllFieldsRequired,
            DomainError::BadRequest { .. } => ErrorKey::BadRequest,
            DomainError::FailedToParseRequest { .. } => ErrorKey::FailedToParseRequest,
            DomainError::Forbidden { .. } => ErrorKey::Forbidden,
            DomainError::InvalidUserCredentials { .. } => ErrorKey::InvalidUserCredentials,
            DomainError::NetworkError { .. } => ErrorKey::NetworkError,
            DomainError::NotFound { .. } => ErrorKey::NotFound,
            DomainError::Unauthenticated { .. } => ErrorKey::Unauthenticated,
            DomainError::Unauthorized { .. } => ErrorKey::Unauthorized,
            DomainError::Unknown { .. } => ErrorKey::Unknown,
        }
    }

    /// HTTP status code of the variant
    pub fn code(&self) -> u16 {
        self.key().default_code()
    }

    /// Instance message
    pub fn message(&self) -> &str {
        match self {
            DomainError::AllFieldsRequired { message }
            | DomainError::BadRequest { message }
            | DomainError::FailedToParseRequest { message }
            | DomainError::Forbidden { message }
            | DomainError::InvalidUserCredentials { message }
            | DomainError::NetworkError { message }
            | DomainError::NotFound { message }
            | DomainError::Unauthenticated { message }
            | DomainError::Unauthorized { message }
            | DomainError::Unknown { message } => message,
        }
    }
}

impl CatalogError for DomainError {
    fn code(&self) -> u16 {
        DomainError::code(self)
    }

    fn error_key(&self) -> ErrorKey {
        self.key()
    }

    fn message(&self) -> &str {
        DomainError::message(self)
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
