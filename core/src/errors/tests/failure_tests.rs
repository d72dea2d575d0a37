//! Unit tests for failure classification

use ar_shared::errors::ErrorKey;
use ar_shared::types::{ResponseStatus, ResultEnvelope};
use crate::errors::{DomainError, Failure};

#[test]
fn test_domain_failure_fills_envelope() {
    for key in ErrorKey::ALL {
        let failure = Failure::from(DomainError::from_key(key));
        let mut envelope = ResultEnvelope::<()>::ok();
        failure.apply_to(&mut envelope);

        assert_eq!(envelope.status, ResponseStatus::Error);
        assert_eq!(envelope.code, key.default_code());
        assert_eq!(envelope.error, Some(key));
        assert_eq!(envelope.message.as_deref(), Some(key.description()));
        assert!(envelope.data.is_none());
    }
}

#[test]
fn test_generic_failure_is_unknown_400() {
    let failure = Failure::from(anyhow::anyhow!("boom"));
    let mut envelope = ResultEnvelope::<()>::ok();
    failure.apply_to(&mut envelope);

    assert!(failure.as_domain().is_none());
    assert_eq!(envelope.code, 400);
    assert_eq!(envelope.error, Some(ErrorKey::Unknown));
    assert_eq!(envelope.message.as_deref(), Some("boom"));
}

#[test]
fn test_anyhow_wrapping_domain_error_is_classified() {
    let wrapped = anyhow::Error::new(DomainError::forbidden());
    let failure = Failure::from(wrapped);

    assert_eq!(failure.as_domain(), Some(&DomainError::forbidden()));
}

#[test]
fn test_std_error_is_generic() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    let failure = Failure::generic(io);

    let mut envelope = ResultEnvelope::<()>::ok();
    failure.apply_to(&mut envelope);
    assert_eq!(envelope.message.as_deref(), Some("disk on fire"));
    assert_eq!(failure.to_string(), "disk on fire");
}

#[test]
fn test_unknown_domain_error_is_500_not_400() {
    let mut envelope = ResultEnvelope::<()>::ok();
    Failure::from(DomainError::unknown()).apply_to(&mut envelope);
    assert_eq!(envelope.code, 500);

    let mut envelope = ResultEnvelope::<()>::ok();
    Failure::msg("").apply_to(&mut envelope);
    assert_eq!(envelope.code, 400);
    assert_eq!(envelope.message.as_deref(), Some("An unknown error occurred"));
}
