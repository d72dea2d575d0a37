//! Response policy: run a route operation and describe its outcome
//!
//! An [`ApiResponse`] bundles an optional operation, an [`Access`] requirement
//! and an optional success code. [`ApiResponse::execute`] turns all of that
//! into exactly one [`ResultEnvelope`].
//!
//! ```ignore
//! let envelope = ApiResponse::data(move || find_order(id))
//!     .private(session)
//!     .with_code(200)
//!     .execute()
//!     .await;
//! ```

use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use ar_shared::types::ResultEnvelope;

use crate::access::Access;
use crate::errors::Failure;

/// Boxed future that is not required to be `Send`
pub type LocalBoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

type Run<'a, T> = Box<dyn FnOnce() -> LocalBoxFuture<'a, Result<T, Failure>> + 'a>;

enum Operation<'a, T> {
    None,
    Action(Run<'a, ()>),
    Data(Run<'a, T>),
}

/// Per-route response policy
///
/// Operations are stored unevaluated so an unauthenticated call never runs
/// them.
pub struct ApiResponse<'a, T = ()> {
    operation: Operation<'a, T>,
    access: Access,
    code: Option<u16>,
}

impl<'a> ApiResponse<'a, ()> {
    /// Public response without an operation
    pub fn new() -> Self {
        Self::with_operation(Operation::None)
    }

    /// Response running a synchronous operation without data
    pub fn action<F, E>(action: F) -> Self
    where
        F: FnOnce() -> Result<(), E> + 'a,
        E: Into<Failure> + 'a,
    {
        Self::with_operation(Operation::Action(Box::new(move || -> LocalBoxFuture<'a, Result<(), Failure>> {
            Box::pin(async move { action().map_err(Into::into) })
        })))
    }

    /// Response running an asynchronous operation without data
    pub fn action_async<F, Fut, E>(action: F) -> Self
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future<Output = Result<(), E>> + 'a,
        E: Into<Failure> + 'a,
    {
        Self::with_operation(Operation::Action(Box::new(move || -> LocalBoxFuture<'a, Result<(), Failure>> {
            Box::pin(async move { action().await.map_err(Into::into) })
        })))
    }
}

impl<'a> Default for ApiResponse<'a, ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: 'a> ApiResponse<'a, T> {
    /// Response running a synchronous operation that returns data
    pub fn data<F, E>(action: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + 'a,
        E: Into<Failure> + 'a,
    {
        Self::with_operation(Operation::Data(Box::new(move || -> LocalBoxFuture<'a, Result<T, Failure>> {
            Box::pin(async move { action().map_err(Into::into) })
        })))
    }

    /// Response running an asynchronous operation that returns data
    pub fn data_async<F, Fut, E>(action: F) -> Self
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future<Output = Result<T, E>> + 'a,
        E: Into<Failure> + 'a,
    {
        Self::with_operation(Operation::Data(Box::new(move || -> LocalBoxFuture<'a, Result<T, Failure>> {
            Box::pin(async move { action().await.map_err(Into::into) })
        })))
    }

    fn with_operation(operation: Operation<'a, T>) -> Self {
        Self {
            operation,
            access: Access::Public,
            code: None,
        }
    }

    /// Make the route private; a missing session fails with `UNAUTHENTICATED`
    pub fn private<S: Any + Send + Sync>(self, session: Option<S>) -> Self {
        self.with_access(Access::private(session))
    }

    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// Success code written instead of 200; an error code still wins
    pub fn with_code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }

    pub fn access(&self) -> &Access {
        &self.access
    }

    /// Run the policy and produce the envelope to serialize
    pub async fn execute(self) -> ResultEnvelope<T> {
        let mut envelope = ResultEnvelope::ok();

        if let Err(error) = self.access.authorize() {
            tracing::debug!(error = %error, "private route called without a session");
            envelope.set_error(&error);
            return envelope;
        }

        if let Some(code) = self.code {
            envelope.set_code(code);
        }

        let outcome = match self.operation {
            Operation::None => Ok(()),
            Operation::Action(run) => run().await,
            Operation::Data(run) => run().await.map(|data| {
                envelope.set_data(data);
            }),
        };

        if let Err(failure) = outcome {
            tracing::debug!(error = %failure, "route operation failed");
            failure.apply_to(&mut envelope);
        }

        envelope
    }
}
