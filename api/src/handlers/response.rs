//! Serialization adapter: the only place envelopes become HTTP responses

use actix_web::{
    body::BoxBody,
    http::{header, StatusCode},
    web, HttpRequest, HttpResponse, Responder,
};
use ar_core::{ApiResponse, DomainError};
use ar_shared::config::{SerializerSettings, JSON_CONTENT_TYPE};
use ar_shared::errors::ErrorKey;
use ar_shared::types::ResultEnvelope;
use serde::Serialize;

/// Marker stored in the extensions of every response written here
///
/// The catch-all middleware uses it to avoid writing a second envelope.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeWritten;

/// Check whether a response body is already an envelope
pub fn is_enveloped<B>(response: &HttpResponse<B>) -> bool {
    response.extensions().get::<EnvelopeWritten>().is_some()
}

/// Serializer settings registered on the app, or the defaults
pub fn settings_for(req: &HttpRequest) -> SerializerSettings {
    req.app_data::<web::Data<SerializerSettings>>()
        .map(|settings| *settings.get_ref())
        .unwrap_or_default()
}

/// Write `envelope` as the response, with `envelope.code` as the status
pub fn write_envelope<T: Serialize>(
    envelope: &ResultEnvelope<T>,
    settings: &SerializerSettings,
) -> HttpResponse {
    match settings.to_vec(envelope) {
        Ok(body) => build(envelope.code, body),
        Err(err) => {
            log::error!("Failed to serialize response envelope: {}", err);

            let mut fallback = ResultEnvelope::<()>::ok();
            fallback.set_error(&DomainError::with_message(ErrorKey::Unknown, err.to_string()));
            let body = settings.to_vec(&fallback).unwrap_or_default();
            build(fallback.code, body)
        }
    }
}

fn build(code: u16, body: Vec<u8>) -> HttpResponse {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut response = HttpResponse::build(status)
        .insert_header((header::CONTENT_TYPE, JSON_CONTENT_TYPE))
        .body(body);
    response.extensions_mut().insert(EnvelopeWritten);
    response
}

/// Envelope ready to be returned from a handler
#[derive(Debug, Clone, PartialEq)]
pub struct JsonEnvelope<T = ()>(pub ResultEnvelope<T>);

impl<T> JsonEnvelope<T> {
    pub fn into_inner(self) -> ResultEnvelope<T> {
        self.0
    }
}

impl<T> From<ResultEnvelope<T>> for JsonEnvelope<T> {
    fn from(envelope: ResultEnvelope<T>) -> Self {
        Self(envelope)
    }
}

impl<T: Serialize> Responder for JsonEnvelope<T> {
    type Body = BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        write_envelope(&self.0, &settings_for(req))
    }
}

/// Execute a response policy and hand its envelope to the adapter
pub async fn respond<'a, T: 'a>(policy: ApiResponse<'a, T>) -> JsonEnvelope<T> {
    JsonEnvelope(policy.execute().await)
}
