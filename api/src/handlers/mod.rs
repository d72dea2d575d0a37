pub mod error;
pub mod invalid_model;
pub mod response;

pub use error::ApiError;
pub use invalid_model::{
    json_error_handler, path_error_handler, query_error_handler, validation_state, InvalidModel,
    ValidationState,
};
pub use response::{
    is_enveloped, respond, settings_for, write_envelope, EnvelopeWritten, JsonEnvelope,
};
