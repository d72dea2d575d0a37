//! Registration hook for the response contract
//!
//! Installs the extractor error handlers that answer binding failures with
//! the invalid-model envelope, and a default service answering unmatched
//! routes with `NOT_FOUND`. The catch-all [`ErrorHandlerMiddleware`] is
//! wrapped separately since `ServiceConfig` cannot carry middleware.
//!
//! [`ErrorHandlerMiddleware`]: crate::middleware::ErrorHandlerMiddleware

use actix_web::{web, HttpRequest};
use ar_core::DomainError;
use ar_shared::types::ResultEnvelope;

use crate::handlers::{
    json_error_handler, path_error_handler, query_error_handler, JsonEnvelope,
};

/// Configure standardized error handling for the application
pub fn configure_error_handling(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .default_service(web::route().to(not_found));
}

/// Fallback for requests no route matched
pub async fn not_found(req: HttpRequest) -> JsonEnvelope {
    log::debug!("No route for {} {}", req.method(), req.path());

    let mut envelope = ResultEnvelope::ok();
    envelope.set_error(&DomainError::not_found());
    JsonEnvelope(envelope)
}
