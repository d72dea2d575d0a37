//! Catch-all middleware
//!
//! Wraps the whole app so that no failure leaves the server without an
//! envelope. Successful responses pass through untouched; errors and panics
//! escaping the routes are translated here. [`ApiError`] and
//! [`InvalidModel`] bodies are written again with the registered
//! [`SerializerSettings`].
//!
//! When the downstream service itself fails or panics there is no request
//! left to answer with, so the envelope travels as the response of an
//! [`InternalError`].

use std::any::Any;
use std::future::{ready, Ready};
use std::panic::AssertUnwindSafe;
use std::rc::Rc;

use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    Error, HttpResponse,
};
use ar_shared::config::SerializerSettings;
use ar_shared::types::ResultEnvelope;
use futures_util::future::{FutureExt, LocalBoxFuture};

use crate::handlers::{is_enveloped, settings_for, write_envelope, ApiError, InvalidModel};

/// Middleware turning escaped errors into result envelopes
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorHandlerMiddleware;

impl ErrorHandlerMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorHandlerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        // The router needs sole ownership of the request, so only the
        // settings are taken before the call.
        let settings = settings_for(req.request());

        Box::pin(async move {
            let outcome = AssertUnwindSafe(async move { service.call(req).await })
                .catch_unwind()
                .await;

            match outcome {
                Ok(Ok(res)) => {
                    let rendered = res.response().error().and_then(|err| {
                        render_known(err, &settings).or_else(|| {
                            (!is_enveloped(res.response())).then(|| translate(err, &settings))
                        })
                    });

                    match rendered {
                        Some(response) => {
                            let (req, _) = res.into_parts();
                            Ok(ServiceResponse::new(req, response))
                        }
                        None => Ok(res.map_into_boxed_body()),
                    }
                }
                Ok(Err(err)) => {
                    let response = match render_known(&err, &settings) {
                        Some(response) => response,
                        None => {
                            let response = err.error_response();
                            if is_enveloped(&response) {
                                response
                            } else {
                                translate(&err, &settings)
                            }
                        }
                    };
                    Err(InternalError::from_response(err, response).into())
                }
                Err(panic) => {
                    let message = panic_message(panic.as_ref());
                    log::debug!("[Result Error]: {}", message);

                    let mut envelope = ResultEnvelope::<()>::ok();
                    envelope.set_generic_error(Some(&message));
                    let response = write_envelope(&envelope, &settings);
                    Err(InternalError::from_response(message, response).into())
                }
            }
        })
    }
}

/// Envelope of an error type that knows its own classification, written with
/// the registered settings
fn render_known(error: &Error, settings: &SerializerSettings) -> Option<HttpResponse> {
    if let Some(api_error) = error.as_error::<ApiError>() {
        log::debug!("[Result Error]: {}", api_error);
        return Some(write_envelope(&api_error.envelope(), settings));
    }

    error
        .as_error::<InvalidModel>()
        .map(|invalid| write_envelope(&invalid.envelope(), settings))
}

/// Envelope for an unclassified error that reached the middleware unwritten
fn translate(error: &Error, settings: &SerializerSettings) -> HttpResponse {
    log::debug!("[Result Error]: {}", error);

    let mut envelope = ResultEnvelope::<()>::ok();
    let message = error.to_string();
    envelope.set_generic_error(Some(&message));
    write_envelope(&envelope, settings)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Route panicked".to_string()
    }
}
