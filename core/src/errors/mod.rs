//! Domain-specific error types and error handling.

mod domain_error;
mod failure;

pub use domain_error::{DomainError, DomainResult};
pub use failure::Failure;

#[cfg(test)]
mod tests;
