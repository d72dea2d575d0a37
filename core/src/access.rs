//! Authorization context for a route invocation

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::errors::DomainError;

/// Opaque session value supplied by the caller
///
/// The response policy only cares whether a session exists; handlers that
/// need its contents can downcast it back.
#[derive(Clone)]
pub struct SessionHandle(Arc<dyn Any + Send + Sync>);

impl SessionHandle {
    pub fn new<S: Any + Send + Sync>(session: S) -> Self {
        Self(Arc::new(session))
    }

    /// Borrow the session as its concrete type
    pub fn downcast_ref<S: Any>(&self) -> Option<&S> {
        self.0.downcast_ref::<S>()
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionHandle(..)")
    }
}

/// Who may run a route
#[derive(Debug, Clone, Default)]
pub enum Access {
    /// No session required
    #[default]
    Public,
    /// Private route with a session present
    Authenticated(SessionHandle),
    /// Private route without a session; always rejected
    Unauthenticated,
}

impl Access {
    /// Private access from an optional session value
    pub fn private<S: Any + Send + Sync>(session: Option<S>) -> Self {
        match session {
            Some(session) => Access::Authenticated(SessionHandle::new(session)),
            None => Access::Unauthenticated,
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Access::Public)
    }

    /// Session of an authenticated private route
    pub fn session(&self) -> Option<&SessionHandle> {
        match self {
            Access::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// Reject a private route that has no session
    pub fn authorize(&self) -> Result<(), DomainError> {
        match self {
            Access::Public | Access::Authenticated(_) => Ok(()),
            Access::Unauthenticated => Err(DomainError::unauthenticated()),
        }
    }
}
