//! Opt-in logging for failable chains.
//!
//! Nothing in the core logs on its own. These helpers emit a `tracing` event
//! when the caller asks for one and pass the value through unchanged. Only
//! available with the `tracing` feature.
//!
//! ```rust
//! use failable::Failable;
//! use failable::future::FailableFutureExt;
//! use failable::trace::FailableFutureTracingExt;
//!
//! # #[derive(Debug, PartialEq)]
//! # enum AppError { Storage(String) }
//! # async fn save_report(report: &str) -> Failable<u64, String> {
//! #     if report.is_empty() {
//! #         Failable::failure("empty report".to_string())
//! #     } else {
//! #         Failable::success(report.len() as u64)
//! #     }
//! # }
//! # tokio_test::block_on(async {
//! let saved = save_report("")
//!     .trace_failure("saving report")
//!     .on_failure(AppError::Storage)
//!     .await;
//! assert_eq!(saved, Failable::failure(AppError::Storage("empty report".into())));
//! # });
//! ```

use std::fmt::Debug;
use std::future::Future;

use crate::future::FailableFuture;
use crate::Failable;

impl<S, F> Failable<S, F> {
    /// Emit a WARN event with the failure's `Debug` form if this is a `Failure`.
    pub fn trace_failure(self, message: &str) -> Self
    where
        F: Debug,
    {
        self.inspect_failure(|error| tracing::warn!(failure = ?error, "{}", message))
    }

    /// Emit a DEBUG event with the success payload if this is a `Success`.
    pub fn trace_success(self, message: &str) -> Self
    where
        S: Debug,
    {
        if let Some(value) = self.success_value() {
            tracing::debug!(success = ?value, "{}", message);
        }
        self
    }
}

/// Logging helpers for futures of [`Failable`].
pub trait FailableFutureTracingExt: FailableFuture + Sized {
    /// Await, then log a failure at WARN.
    fn trace_failure(
        self,
        message: &str,
    ) -> impl Future<Output = Failable<Self::Success, Self::Failure>>
    where
        Self::Failure: Debug,
    {
        async move { self.await.trace_failure(message) }
    }

    /// Await, then log a success at DEBUG.
    fn trace_success(
        self,
        message: &str,
    ) -> impl Future<Output = Failable<Self::Success, Self::Failure>>
    where
        Self::Success: Debug,
    {
        async move { self.await.trace_success(message) }
    }
}

impl<Fut: FailableFuture> FailableFutureTracingExt for Fut {}
