//! # ApiResponse Core
//!
//! Host-independent half of the response contract: catalog-bound domain
//! errors, the failure taxonomy, the authorization context and the response
//! policy that turns an operation's outcome into a result envelope.

pub mod access;
pub mod errors;
pub mod response;

// Re-export commonly used types for convenience
pub use access::{Access, SessionHandle};
pub use errors::{DomainError, DomainResult, Failure};
pub use response::{invalid_model, ApiResponse};
