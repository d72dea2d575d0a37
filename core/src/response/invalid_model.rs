//! Envelope for requests whose model failed to bind or validate

use ar_shared::types::ResultEnvelope;

use crate::errors::DomainError;

/// Build the `FAILED_TO_PARSE_REQUEST` envelope (422)
///
/// The validation state is echoed back as `data` so clients can see which
/// parts of the request were rejected. This is the one error envelope that
/// carries data.
pub fn invalid_model<S>(validation_state: Option<S>) -> ResultEnvelope<S> {
    let mut envelope = ResultEnvelope::ok();
    if let Some(state) = validation_state {
        envelope.set_data(state);
    }
    envelope.set_error(&DomainError::failed_to_parse_request());
    envelope
}
