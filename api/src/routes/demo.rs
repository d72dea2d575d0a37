//! Demo handlers
//!
//! Private routes treat the JSON body as the session: a request without a
//! body is unauthenticated.

use std::collections::HashMap;

use actix_web::web;
use anyhow::anyhow;
use ar_core::{ApiResponse, DomainError};
use ar_shared::errors::ErrorKey;
use ar_shared::types::ResultEnvelope;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use crate::handlers::{respond, ApiError, InvalidModel, JsonEnvelope};

/// Message of the failure raised by the generic-error routes
pub const GENERIC_ERROR_MESSAGE: &str = "Operation failed without a catalog error";

pub type Payload = HashMap<String, String>;

#[derive(Debug, Deserialize)]
pub struct ErrorRequest {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    #[validate(length(min = 1, max = 64, message = "Display name must be 1 to 64 characters"))]
    pub display_name: String,

    #[validate(email(message = "Email address is malformed"))]
    pub email: String,
}

fn session(body: Option<web::Json<Payload>>) -> Option<Payload> {
    body.map(web::Json::into_inner)
}

pub async fn health() -> JsonEnvelope<Value> {
    respond(ApiResponse::data(|| {
        Ok::<_, DomainError>(json!({
            "service": "ar-api",
            "version": env!("CARGO_PKG_VERSION"),
        }))
    }))
    .await
}

pub async fn void() -> JsonEnvelope {
    respond(ApiResponse::new()).await
}

pub async fn void_action() -> JsonEnvelope {
    respond(ApiResponse::action(|| Ok::<_, DomainError>(()))).await
}

pub async fn void_action_async() -> JsonEnvelope {
    respond(ApiResponse::action_async(|| async { Ok::<_, DomainError>(()) })).await
}

pub async fn void_action_error() -> JsonEnvelope {
    respond(ApiResponse::action(|| Err(anyhow!(GENERIC_ERROR_MESSAGE)))).await
}

/// Echo the body; an empty or missing body is `ALL_FIELDS_REQUIRED`
pub async fn data(body: Option<web::Json<Payload>>) -> JsonEnvelope<Payload> {
    let data = session(body).filter(|data| !data.is_empty());

    respond(ApiResponse::data(move || data.ok_or_else(DomainError::all_fields_required))).await
}

/// Answer with the catalog error named in the body; unknown names are `UNKNOWN`
pub async fn error(body: web::Json<ErrorRequest>) -> JsonEnvelope {
    let key = body.error.parse::<ErrorKey>().unwrap_or(ErrorKey::Unknown);

    let mut envelope = ResultEnvelope::ok();
    envelope.set_error(&DomainError::from_key(key));
    JsonEnvelope(envelope)
}

pub async fn generic_error() -> JsonEnvelope<Value> {
    respond(ApiResponse::data(|| Err(anyhow!(GENERIC_ERROR_MESSAGE)))).await
}

pub async fn unknown_error() -> JsonEnvelope {
    let mut envelope = ResultEnvelope::ok();
    envelope.set_unknown_error();
    JsonEnvelope(envelope)
}

pub async fn invalid_model() -> InvalidModel {
    InvalidModel::default()
}

/// Validate the body and echo it; rule violations are reported per field
pub async fn profile(body: web::Json<ProfileRequest>) -> Result<JsonEnvelope<ProfileRequest>, InvalidModel> {
    let profile = body.into_inner();
    profile
        .validate()
        .map_err(|errors| InvalidModel::from_validation(&errors))?;

    Ok(respond(ApiResponse::data(move || Ok::<_, DomainError>(profile))).await)
}

/// Look up a demo order; id 0 does not exist
///
/// The error escapes the handler as [`ApiError`] instead of going through
/// the response policy.
pub async fn order(id: web::Path<u32>) -> Result<JsonEnvelope<Value>, ApiError> {
    let id = id.into_inner();
    if id == 0 {
        return Err(DomainError::not_found().into());
    }

    let mut envelope = ResultEnvelope::ok();
    envelope.set_data(json!({ "id": id }));
    Ok(JsonEnvelope(envelope))
}

pub async fn private_void(body: Option<web::Json<Payload>>) -> JsonEnvelope {
    respond(ApiResponse::new().private(session(body))).await
}

pub async fn private_data(body: Option<web::Json<Payload>>) -> JsonEnvelope<Payload> {
    let session = session(body);
    let data = session.clone().unwrap_or_default();

    respond(ApiResponse::data(move || Ok::<_, DomainError>(data)).private(session)).await
}

pub async fn private_data_async(body: Option<web::Json<Payload>>) -> JsonEnvelope<Payload> {
    let session = session(body);
    let data = session.clone().unwrap_or_default();

    respond(ApiResponse::data_async(move || async move { Ok::<_, DomainError>(data) }).private(session))
        .await
}

pub async fn private_void_action(body: Option<web::Json<Payload>>) -> JsonEnvelope {
    respond(ApiResponse::action(|| Ok::<_, DomainError>(())).private(session(body))).await
}

pub async fn private_void_action_async(body: Option<web::Json<Payload>>) -> JsonEnvelope {
    respond(ApiResponse::action_async(|| async { Ok::<_, DomainError>(()) }).private(session(body)))
        .await
}
