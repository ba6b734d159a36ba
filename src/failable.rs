//! The two-variant success/failure value.
//!
//! A [`Failable<S, F>`] is exactly one of `Success(S)` or `Failure(F)`. It is
//! observed through a single primitive, [`Failable::reduce`], which calls the
//! handler matching the active variant and never the other one. Every
//! combinator in this crate is written in terms of `reduce`.
//!
//! # Failable vs Result
//!
//! `Failable` carries the same information as `std::result::Result`, but its
//! combinators follow a closed, uniform algebra: `on_success` steps are skipped
//! on `Failure`, `on_failure` steps are skipped on `Success`, and the only way
//! back to `Result` and `?` is the terminal
//! [`get_result_or_fail`](Failable::get_result_or_fail).
//!
//! # Examples
//!
//! ```rust
//! use failable::Failable;
//!
//! fn parse_port(raw: &str) -> Failable<u16, String> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Failable::success(port),
//!         Err(e) => Failable::failure(format!("bad port {raw:?}: {e}")),
//!     }
//! }
//!
//! let description = parse_port("8080").reduce(
//!     |port| format!("listening on {port}"),
//!     |error| format!("refusing to start: {error}"),
//! );
//! assert_eq!(description, "listening on 8080");
//! ```

use std::future::IntoFuture;

use futures::future::{ready, Ready};

use crate::MissingHandler;

/// A value that is either `Success(S)` or `Failure(F)`.
///
/// Values are immutable once built; combinators consume them and return new
/// ones. See the [module documentation](self) for an overview.
///
/// # Example
///
/// ```rust
/// use failable::Failable;
///
/// let ok: Failable<i32, &str> = Failable::success(1);
/// let failed: Failable<i32, &str> = Failable::failure("boom");
///
/// assert_eq!(ok.reduce(|v| v * 10, |_| 0), 10);
/// assert_eq!(failed.reduce(|v| v * 10, |e| e.len() as i32), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Failable<S, F> {
    /// The success payload
    Success(S),
    /// The failure payload
    Failure(F),
}

impl<S, F> Failable<S, F> {
    // ========== Constructors ==========

    /// Create a `Success` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// let value: Failable<i32, String> = Failable::success(42);
    /// assert!(value.is_success());
    /// ```
    #[inline]
    pub fn success(value: S) -> Self {
        Failable::Success(value)
    }

    /// Create a `Failure` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// let value: Failable<i32, &str> = Failable::failure("not found");
    /// assert!(value.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: F) -> Self {
        Failable::Failure(error)
    }

    // ========== Observation ==========

    /// Reduce both variants to a single value.
    ///
    /// Exactly one handler runs: `on_success` for a `Success`, `on_failure`
    /// for a `Failure`. Both are required, so no handler can be missing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// let value: Failable<i32, String> = Failable::success(1);
    /// assert_eq!(value.reduce(|v| v + 1, |_| 0), 2);
    /// ```
    #[inline]
    pub fn reduce<T, G, H>(self, on_success: G, on_failure: H) -> T
    where
        G: FnOnce(S) -> T,
        H: FnOnce(F) -> T,
    {
        match self {
            Failable::Success(value) => on_success(value),
            Failable::Failure(error) => on_failure(error),
        }
    }

    /// Reduce with optional handlers, reporting an absent active handler.
    ///
    /// The handler for the inactive variant may be `None`. If the handler for
    /// the active variant is `None`, the call fails with [`MissingHandler`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::{Failable, MissingHandler};
    ///
    /// let value: Failable<i32, i32> = Failable::failure(3);
    /// assert_eq!(value.try_handle(None::<fn(i32) -> i32>, Some(|e| e + 2)), Ok(5));
    ///
    /// let value: Failable<i32, i32> = Failable::failure(3);
    /// assert_eq!(
    ///     value.try_handle(Some(|v| v), None::<fn(i32) -> i32>),
    ///     Err(MissingHandler::OnFailure)
    /// );
    /// ```
    pub fn try_handle<T, G, H>(
        self,
        on_success: Option<G>,
        on_failure: Option<H>,
    ) -> Result<T, MissingHandler>
    where
        G: FnOnce(S) -> T,
        H: FnOnce(F) -> T,
    {
        self.reduce(
            |value| on_success.map(|f| f(value)).ok_or(MissingHandler::OnSuccess),
            |error| on_failure.map(|f| f(error)).ok_or(MissingHandler::OnFailure),
        )
    }

    /// Reduce with optional handlers, panicking on an absent active handler.
    ///
    /// # Panics
    ///
    /// Panics with the [`MissingHandler`] message if the handler for the
    /// active variant is `None`. This is a caller bug; it is never turned into
    /// a `Failure`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// let value: Failable<i32, i32> = Failable::success(1);
    /// assert_eq!(value.handle(Some(|v| v + 1), None::<fn(i32) -> i32>), 2);
    /// ```
    #[track_caller]
    pub fn handle<T, G, H>(self, on_success: Option<G>, on_failure: Option<H>) -> T
    where
        G: FnOnce(S) -> T,
        H: FnOnce(F) -> T,
    {
        match self.try_handle(on_success, on_failure) {
            Ok(value) => value,
            Err(missing) => panic!("{}", missing),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.as_ref().reduce(|_| true, |_| false)
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    // ========== Accessors ==========

    /// Convert to `Failable<&S, &F>`.
    #[inline]
    pub fn as_ref(&self) -> Failable<&S, &F> {
        match self {
            Failable::Success(value) => Failable::Success(value),
            Failable::Failure(error) => Failable::Failure(error),
        }
    }

    /// The stored success payload, if this is a `Success`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// let value: Failable<&str, ()> = Failable::success("done");
    /// assert_eq!(value.success_value(), Some(&"done"));
    /// assert_eq!(value.failure_value(), None);
    /// ```
    #[inline]
    pub fn success_value(&self) -> Option<&S> {
        self.as_ref().into_success()
    }

    /// The stored failure payload, if this is a `Failure`.
    #[inline]
    pub fn failure_value(&self) -> Option<&F> {
        self.as_ref().into_failure()
    }

    /// Consume and return the success payload, if any.
    #[inline]
    pub fn into_success(self) -> Option<S> {
        self.reduce(Some, |_| None)
    }

    /// Consume and return the failure payload, if any.
    #[inline]
    pub fn into_failure(self) -> Option<F> {
        self.reduce(|_| None, Some)
    }

    // ========== Conversions ==========

    /// Convert to `Result` (`Success` becomes `Ok`, `Failure` becomes `Err`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// let value: Failable<i32, &str> = Failable::failure("nope");
    /// assert_eq!(value.into_result(), Err("nope"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        self.reduce(Ok, Err)
    }

    /// Create from `Result` (`Ok` becomes `Success`, `Err` becomes `Failure`).
    #[inline]
    pub fn from_result(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Failable::Success(value),
            Err(error) => Failable::Failure(error),
        }
    }

    // ========== Suspendable wrapping ==========

    /// Wrap this value in an already-resolved future.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// # tokio_test::block_on(async {
    /// let pending = Failable::<i32, String>::success(7).ready();
    /// assert_eq!(pending.await, Failable::success(7));
    /// # });
    /// ```
    #[inline]
    pub fn ready(self) -> Ready<Self> {
        ready(self)
    }

    /// An already-resolved future holding a `Success`.
    #[inline]
    pub fn success_async(value: S) -> Ready<Self> {
        Self::success(value).ready()
    }

    /// An already-resolved future holding a `Failure`.
    #[inline]
    pub fn failure_async(error: F) -> Ready<Self> {
        Self::failure(error).ready()
    }
}

// ========== Trait Implementations ==========

impl<S, F> From<Result<S, F>> for Failable<S, F> {
    fn from(result: Result<S, F>) -> Self {
        Failable::from_result(result)
    }
}

impl<S, F> From<Failable<S, F>> for Result<S, F> {
    fn from(value: Failable<S, F>) -> Self {
        value.into_result()
    }
}

/// Awaiting a plain `Failable` resolves immediately to itself.
impl<S, F> IntoFuture for Failable<S, F> {
    type Output = Self;
    type IntoFuture = Ready<Self>;

    fn into_future(self) -> Self::IntoFuture {
        self.ready()
    }
}
