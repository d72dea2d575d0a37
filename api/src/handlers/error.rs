//! Bridge from domain failures to actix error responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use ar_core::{DomainError, Failure};
use ar_shared::config::SerializerSettings;
use ar_shared::types::ResultEnvelope;
use thiserror::Error;

use super::response::write_envelope;

/// Failure escaping a handler as an actix error
///
/// Handlers return `Result<_, ApiError>` and use `?` on domain errors; the
/// response is the same envelope the policy would have written.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] Failure);

impl ApiError {
    pub fn failure(&self) -> &Failure {
        &self.0
    }

    pub fn into_failure(self) -> Failure {
        self.0
    }

    /// Error-branch envelope describing this failure
    pub fn envelope(&self) -> ResultEnvelope {
        let mut envelope = ResultEnvelope::ok();
        self.0.apply_to(&mut envelope);
        envelope
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(Failure::Domain(error))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        Self(Failure::from(error))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.envelope().code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Written with default settings; the catch-all rewrites it with the
    /// registered ones
    fn error_response(&self) -> HttpResponse {
        write_envelope(&self.envelope(), &SerializerSettings::default())
    }
}
