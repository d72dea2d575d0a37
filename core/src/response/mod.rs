//! Response policy and envelope builders

mod invalid_model;
mod policy;

pub use invalid_model::invalid_model;
pub use policy::{ApiResponse, LocalBoxFuture};

#[cfg(test)]
mod tests;
