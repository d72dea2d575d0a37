//! API result envelope

use serde::{Deserialize, Serialize};

use crate::errors::{CatalogError, ErrorKey};

/// Code used when a failure carries no catalog classification
pub const GENERIC_FAILURE_CODE: u16 = 400;

/// Code of a successful envelope unless overridden
pub const DEFAULT_SUCCESS_CODE: u16 = 200;

/// Response status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

/// Uniform body written for every route response
///
/// On the wire, absent fields are omitted rather than written as `null`:
///
/// ```json
/// { "status": "error", "code": 404, "error": "NOT_FOUND", "message": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope<T = ()> {
    /// Request status: ok/error
    pub status: ResponseStatus,

    /// HTTP status written for the request
    pub code: u16,

    /// Error key in case of failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKey>,

    /// Message describing the error in case of failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Payload of a data-bearing success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Default for ResultEnvelope<T> {
    fn default() -> Self {
        Self {
            status: ResponseStatus::Ok,
            code: DEFAULT_SUCCESS_CODE,
            error: None,
            message: None,
            data: None,
        }
    }
}

impl<T> ResultEnvelope<T> {
    /// Create a successful envelope with no data
    pub fn ok() -> Self {
        Self::default()
    }

    /// Set the error branch from a catalog-bound failure
    ///
    /// Always overwrites `code`, so an error recorded after [`set_code`](Self::set_code)
    /// wins over the success code.
    pub fn set_error(&mut self, error: &impl CatalogError) -> &mut Self {
        self.apply_error(Some(error.error_key()), Some(error.message()), error.code())
    }

    /// Set the error branch from an unclassified failure
    ///
    /// The result is `UNKNOWN` with code 400, carrying the failure's own message
    /// or the `UNKNOWN` description when the failure has none.
    pub fn set_generic_error(&mut self, message: Option<&str>) -> &mut Self {
        self.apply_error(None, message, GENERIC_FAILURE_CODE)
    }

    /// Set the error branch with no failure information at all
    ///
    /// Yields `UNKNOWN` with code 400. This deliberately differs from an explicit
    /// `UNKNOWN` domain error, which answers 500.
    pub fn set_unknown_error(&mut self) -> &mut Self {
        self.apply_error(None, None, GENERIC_FAILURE_CODE)
    }

    /// Set the payload, leaving status and code untouched
    pub fn set_data(&mut self, data: T) -> &mut Self {
        self.data = Some(data);
        self
    }

    /// Override the status code without changing the status
    pub fn set_code(&mut self, code: u16) -> &mut Self {
        self.code = code;
        self
    }

    /// Check if the envelope describes a success
    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }

    /// Check if the envelope describes a failure
    pub fn is_error(&self) -> bool {
        self.status == ResponseStatus::Error
    }

    /// Extract the data, consuming the envelope
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    fn apply_error(&mut self, error: Option<ErrorKey>, message: Option<&str>, code: u16) -> &mut Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| ErrorKey::Unknown.description());

        self.code = code;
        self.status = ResponseStatus::Error;
        self.error = Some(error.unwrap_or(ErrorKey::Unknown));
        self.message = Some(message.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    struct Catalogued(ErrorKey, &'static str);

    impl CatalogError for Catalogued {
        fn code(&self) -> u16 {
            self.0.default_code()
        }

        fn error_key(&self) -> ErrorKey {
            self.0
        }

        fn message(&self) -> &str {
            self.1
        }
    }

    #[test]
    fn test_default_envelope_is_ok_200() {
        let envelope = ResultEnvelope::<()>::ok();
        assert!(envelope.is_ok());
        assert_eq!(envelope.code, 200);
        assert_eq!(serde_json::to_value(&envelope).unwrap(), json!({"status": "ok", "code": 200}));
    }

    #[test]
    fn test_set_error_from_catalog() {
        for key in ErrorKey::ALL {
            let mut envelope = ResultEnvelope::<()>::ok();
            envelope.set_error(&Catalogued(key, key.description()));

            assert!(envelope.is_error());
            assert_eq!(envelope.code, key.default_code());
            assert_eq!(envelope.error, Some(key));
            assert_eq!(envelope.message.as_deref(), Some(key.description()));
            assert!(envelope.data.is_none());
        }
    }

    #[test]
    fn test_error_overwrites_custom_code() {
        let mut envelope = ResultEnvelope::<()>::ok();
        envelope.set_code(201);
        envelope.set_error(&Catalogued(ErrorKey::Forbidden, "nope"));

        assert_eq!(envelope.code, 403);
        assert_eq!(envelope.message.as_deref(), Some("nope"));
    }

    #[test]
    fn test_set_code_keeps_status() {
        let mut envelope = ResultEnvelope::<()>::ok();
        envelope.set_code(201);
        assert!(envelope.is_ok());
        assert_eq!(envelope.code, 201);
    }

    #[test]
    fn test_generic_error_keeps_its_message() {
        let mut envelope = ResultEnvelope::<()>::ok();
        envelope.set_generic_error(Some("boom"));

        assert_eq!(envelope.code, 400);
        assert_eq!(envelope.error, Some(ErrorKey::Unknown));
        assert_eq!(envelope.message.as_deref(), Some("boom"));
    }

    #[test]
    fn test_generic_error_without_message_uses_description() {
        let mut envelope = ResultEnvelope::<()>::ok();
        envelope.set_generic_error(Some(""));
        assert_eq!(envelope.message.as_deref(), Some("An unknown error occurred"));
    }

    #[test]
    fn test_bare_error_diverges_from_unknown_domain_error() {
        let mut bare = ResultEnvelope::<()>::ok();
        bare.set_unknown_error();

        let mut classified = ResultEnvelope::<()>::ok();
        classified.set_error(&Catalogued(ErrorKey::Unknown, ErrorKey::Unknown.description()));

        // Same key and message, different code.
        assert_eq!(bare.error, classified.error);
        assert_eq!(bare.message, classified.message);
        assert_eq!(bare.code, 400);
        assert_eq!(classified.code, 500);
    }

    #[test]
    fn test_error_wire_format() {
        let mut envelope = ResultEnvelope::<()>::ok();
        envelope.set_error(&Catalogued(ErrorKey::NotFound, ErrorKey::NotFound.description()));

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "status": "error",
                "code": 404,
                "error": "NOT_FOUND",
                "message": "Couldn't find what you were looking for"
            })
        );
    }

    #[test]
    fn test_data_envelope_decodes_back() {
        let data: HashMap<String, String> =
            [("id".to_string(), "42".to_string()), ("name".to_string(), "gear".to_string())]
                .into_iter()
                .collect();

        let mut envelope = ResultEnvelope::ok();
        envelope.set_data(data.clone());

        let text = serde_json::to_string(&envelope).unwrap();
        let decoded: ResultEnvelope<HashMap<String, String>> = serde_json::from_str(&text).unwrap();

        assert_eq!(decoded, envelope);
        assert_eq!(decoded.into_data(), Some(data));
    }
}
