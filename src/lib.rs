//! # Failable
//!
//! A value that is exactly one of `Success(S)` or `Failure(F)`, plus a small,
//! closed set of combinators for building fallible pipelines in synchronous
//! and asynchronous code without reaching for panics or early returns on
//! expected failure paths.
//!
//! ## The model
//!
//! - [`Failable`] is a two-variant enum built with [`Failable::success`] or
//!   [`Failable::failure`] and never mutated afterwards.
//! - [`Failable::reduce`] is the one way to look inside. Every combinator is
//!   written on top of it.
//! - `on_success*` steps run only on `Success`; `on_failure*` steps run only
//!   on `Failure`. A failure skips every success step until something
//!   intercepts it.
//! - [`Failable::get_result_or_fail`] is the exit back to `Result` and `?`.
//!
//! ## Quick Example
//!
//! ```rust
//! use failable::Failable;
//!
//! #[derive(Debug)]
//! enum SignupError {
//!     InvalidEmail(String),
//!     Taken(String),
//! }
//!
//! fn validate(email: &str) -> Failable<String, SignupError> {
//!     if email.contains('@') {
//!         Failable::success(email.to_lowercase())
//!     } else {
//!         Failable::failure(SignupError::InvalidEmail(email.to_string()))
//!     }
//! }
//!
//! fn reserve(email: String) -> Failable<u64, SignupError> {
//!     if email == "admin@example.com" {
//!         Failable::failure(SignupError::Taken(email))
//!     } else {
//!         Failable::success(1001)
//!     }
//! }
//!
//! let id = validate("New.User@Example.com")
//!     .on_success_then(reserve)
//!     .get_result_or_fail(|e| format!("signup rejected: {e:?}"));
//! assert_eq!(id, Ok(1001));
//!
//! let rejected = validate("admin@example.com")
//!     .on_success_then(reserve)
//!     .get_result_or_fail(|e| format!("signup rejected: {e:?}"));
//! assert!(rejected.unwrap_err().contains("Taken"));
//! ```
//!
//! ## Async
//!
//! See the [`future`] module: handlers may return futures, and any
//! `Future<Output = Failable<S, F>>` gains the same combinators through
//! [`future::FailableFutureExt`].
//!
//! ## Features
//!
//! - `tracing`: explicit logging helpers in [`trace`].
//! - `serde`: `Serialize` / `Deserialize` for [`Failable`].
//! - `proptest`: an `Arbitrary` implementation for [`Failable`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod combinators;
pub mod error;
pub mod failable;
pub mod future;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod trace;

// Re-exports
pub use error::MissingHandler;
pub use failable::Failable;
pub use future::{FailableFuture, FailableFutureExt, Resume};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::MissingHandler;
    pub use crate::failable::Failable;
    pub use crate::future::{FailableFuture, FailableFutureExt, Resume};
    #[cfg(feature = "tracing")]
    pub use crate::trace::FailableFutureTracingExt;
}
