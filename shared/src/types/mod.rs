//! Type definitions module
//!
//! - `response` - the result envelope written for every route response

pub mod response;

pub use response::{ResponseStatus, ResultEnvelope, DEFAULT_SUCCESS_CODE, GENERIC_FAILURE_CODE};
