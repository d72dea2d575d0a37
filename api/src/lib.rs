//! # ApiResponse HTTP layer
//!
//! actix-web adapters for the response contract: the serialization adapter,
//! the catch-all middleware, the model-validation adapter and the
//! registration hook. `routes` holds demo handlers used by the binary and
//! the integration tests.

pub mod app;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use config::configure_error_handling;
pub use handlers::{respond, ApiError, InvalidModel, JsonEnvelope};
pub use middleware::ErrorHandlerMiddleware;
