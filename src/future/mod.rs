//! Suspendable combinators.
//!
//! Two entry points cover every combination of plain and suspendable values
//! and handlers:
//!
//! - methods on [`Failable`](crate::Failable) whose handlers return futures
//!   (`on_success_async`, `on_failure_then_async`, ...), and
//! - [`FailableFutureExt`], implemented for every
//!   `Future<Output = Failable<S, F>>`, so a chain can continue off a pending
//!   value without awaiting by hand.
//!
//! A plain value enters the async world with
//! [`Failable::ready`](crate::Failable::ready) or by awaiting it directly.
//!
//! The library never spawns, retries, times out or cancels anything. A chain
//! is one future, driven by whatever executor polls it; dropping it cancels
//! it.
//!
//! # Example
//!
//! ```rust
//! use failable::Failable;
//! use failable::future::{FailableFutureExt, Resume};
//!
//! async fn lookup(key: &str) -> Failable<u32, String> {
//!     match key {
//!         "answer" => Failable::success(42),
//!         other => Failable::failure(format!("unknown key {other}")),
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let doubled = lookup("answer")
//!     .on_success_async(|v| async move { v * 2 })
//!     .resume(Resume::Yield)
//!     .on_failure(|e| e.len())
//!     .await;
//! assert_eq!(doubled, Failable::success(84));
//!
//! let missing = lookup("question")
//!     .on_success(|v| v * 2)
//!     .get_result_or_fail(|e| e)
//!     .await;
//! assert_eq!(missing, Err("unknown key question".to_string()));
//! # });
//! ```

mod ext;
mod lift;
mod resume;

pub use ext::{FailableFuture, FailableFutureExt};
pub use resume::Resume;
