//! Model-validation adapter
//!
//! Every request-model failure, whether raised by a handler after running
//! `validator` or by an extractor that could not bind the payload, is written
//! as a `FAILED_TO_PARSE_REQUEST` envelope carrying the validation state.

use std::collections::BTreeMap;
use std::fmt;

use actix_web::{
    body::BoxBody,
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, Responder, ResponseError,
};
use ar_core::invalid_model;
use ar_shared::config::SerializerSettings;
use ar_shared::errors::ErrorKey;
use ar_shared::types::ResultEnvelope;
use serde::Serialize;
use serde_json::Value;
use validator::ValidationErrors;

use super::response::{settings_for, write_envelope};

/// Field name to the messages reported for it
pub type ValidationState = BTreeMap<String, Vec<String>>;

/// Invalid request model, answered with 422
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvalidModel {
    state: Option<Value>,
}

impl InvalidModel {
    pub fn new(state: Option<Value>) -> Self {
        Self { state }
    }

    /// Carry any serializable validation state
    pub fn from_state<S: Serialize>(state: &S) -> Self {
        Self::new(serde_json::to_value(state).ok())
    }

    /// Carry the field errors collected by `validator`
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        Self::from_state(&validation_state(errors))
    }

    /// Single binding failure, keyed by where the payload came from
    pub fn from_binding(source: &str, message: impl fmt::Display) -> Self {
        let mut state = ValidationState::new();
        state.insert(source.to_string(), vec![message.to_string()]);
        Self::from_state(&state)
    }

    pub fn state(&self) -> Option<&Value> {
        self.state.as_ref()
    }

    pub fn envelope(&self) -> ResultEnvelope<Value> {
        invalid_model(self.state.clone())
    }
}

impl fmt::Display for InvalidModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ErrorKey::FailedToParseRequest.description())
    }
}

impl std::error::Error for InvalidModel {}

impl ResponseError for InvalidModel {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    /// Written with default settings; the catch-all rewrites it with the
    /// registered ones
    fn error_response(&self) -> HttpResponse {
        write_envelope(&self.envelope(), &SerializerSettings::default())
    }
}

impl Responder for InvalidModel {
    type Body = BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        write_envelope(&self.envelope(), &settings_for(req))
    }
}

/// Flatten `validator` errors into [`ValidationState`]
pub fn validation_state(errors: &ValidationErrors) -> ValidationState {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected JSON body: {}", err);
    InvalidModel::from_binding("body", err).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected query string: {}", err);
    InvalidModel::from_binding("query", err).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected path parameters: {}", err);
    InvalidModel::from_binding("path", err).into()
}
