//! Failure taxonomy seen by the response policy

use ar_shared::types::ResultEnvelope;
use thiserror::Error;

use super::DomainError;

/// Outcome of a failed operation
///
/// Either a catalog-bound [`DomainError`] or any other error, which the
/// envelope downgrades to `UNKNOWN` with code 400.
#[derive(Error, Debug)]
pub enum Failure {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Generic(anyhow::Error),
}

impl Failure {
    /// Wrap an arbitrary error
    pub fn generic<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        anyhow::Error::new(error).into()
    }

    /// Generic failure carrying only a message
    pub fn msg(message: impl Into<String>) -> Self {
        Failure::Generic(anyhow::Error::msg(message.into()))
    }

    /// The domain error, if this failure is classified
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Failure::Domain(error) => Some(error),
            Failure::Generic(_) => None,
        }
    }

    /// Record this failure in the error branch of `envelope`
    pub fn apply_to<T>(&self, envelope: &mut ResultEnvelope<T>) {
        match self {
            Failure::Domain(error) => {
                envelope.set_error(error);
            }
            Failure::Generic(error) => {
                let message = error.to_string();
                envelope.set_generic_error(Some(&message));
            }
        }
    }
}

impl From<anyhow::Error> for Failure {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<DomainError>() {
            Ok(domain) => Failure::Domain(domain),
            Err(other) => Failure::Generic(other),
        }
    }
}
