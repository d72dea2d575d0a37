//! Application factory
//!
//! Builds the actix app with the response contract installed: serializer
//! settings, the catch-all middleware, the extractor error handlers and the
//! routes.

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};
use ar_shared::config::SerializerSettings;

use crate::config::configure_error_handling;
use crate::middleware::ErrorHandlerMiddleware;
use crate::routes::configure_routes;

/// Create and configure the application
pub fn create_app(
    settings: SerializerSettings,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(settings))
        // Catch-all is registered last so it wraps everything, logging included
        .wrap(Logger::default())
        .wrap(ErrorHandlerMiddleware::new())
        .configure(configure_error_handling)
        .configure(configure_routes)
}
