//! Synchronous combinators for [`Failable`].
//!
//! Each combinator consumes a value and returns a new one, dispatching only
//! through [`Failable::reduce`]. A `Failure` flows untouched past every
//! `on_success*` step and a `Success` flows untouched past every `on_failure*`
//! step, so a pipeline reads as a flat sequence of steps:
//!
//! ```rust
//! use failable::Failable;
//!
//! fn load(id: u32) -> Failable<String, String> {
//!     if id == 0 {
//!         Failable::failure("id 0 is reserved".to_string())
//!     } else {
//!         Failable::success(format!("user-{id}"))
//!     }
//! }
//!
//! let greeting = load(7)
//!     .on_success(|name| name.to_uppercase())
//!     .on_success_then(|name| {
//!         if name.len() > 3 {
//!             Failable::success(format!("hello {name}"))
//!         } else {
//!             Failable::failure("name too short".to_string())
//!         }
//!     })
//!     .on_failure(|e| format!("lookup failed: {e}"));
//!
//! assert_eq!(greeting, Failable::success("hello USER-7".to_string()));
//! ```

use crate::Failable;

impl<S, F> Failable<S, F> {
    /// Transform the success payload, passing a `Failure` through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// let value: Failable<i32, &str> = Failable::success(1);
    /// assert_eq!(value.on_success(|v| v * 2).on_success(|v| v + 5), Failable::success(7));
    ///
    /// let value: Failable<i32, &str> = Failable::failure("e");
    /// assert_eq!(value.on_success(|v| v * 2), Failable::failure("e"));
    /// ```
    #[inline]
    pub fn on_success<T, G>(self, f: G) -> Failable<T, F>
    where
        G: FnOnce(S) -> T,
    {
        self.reduce(|value| Failable::success(f(value)), Failable::failure)
    }

    /// Replace a `Success` with the value returned by `f`.
    ///
    /// This is the flattening form of [`on_success`](Self::on_success): `f`
    /// may itself fail, and its result is returned as-is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// let value: Failable<i32, String> = Failable::success(1);
    /// assert_eq!(value.on_success_then(|v| Failable::success(v + 5)), Failable::success(6));
    /// ```
    #[inline]
    pub fn on_success_then<T, G>(self, f: G) -> Failable<T, F>
    where
        G: FnOnce(S) -> Failable<T, F>,
    {
        self.reduce(f, Failable::failure)
    }

    /// Transform the failure payload, passing a `Success` through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// let value: Failable<i32, i32> = Failable::failure(2);
    /// let out = value.on_success(|s| s * 2).on_failure(|f| f * 3);
    /// assert_eq!(out, Failable::failure(6));
    /// ```
    #[inline]
    pub fn on_failure<G2, H>(self, f: H) -> Failable<S, G2>
    where
        H: FnOnce(F) -> G2,
    {
        self.reduce(Failable::success, |error| Failable::failure(f(error)))
    }

    /// Replace a `Failure` with the value returned by `f`.
    ///
    /// The flattening form of [`on_failure`](Self::on_failure); `f` can
    /// recover by returning a `Success`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// let value: Failable<u16, &str> = Failable::failure("no port configured");
    /// let out: Failable<u16, String> = value.on_failure_then(|_| Failable::success(8080));
    /// assert_eq!(out, Failable::success(8080));
    /// ```
    #[inline]
    pub fn on_failure_then<G2, H>(self, f: H) -> Failable<S, G2>
    where
        H: FnOnce(F) -> Failable<S, G2>,
    {
        self.reduce(Failable::success, f)
    }

    /// Observe a failure without changing the value.
    ///
    /// `f` runs only for a `Failure`; the original value is returned either
    /// way. A panic inside `f` propagates to the caller.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// let mut seen = Vec::new();
    /// let value: Failable<i32, &str> = Failable::failure("timeout");
    /// let value = value.inspect_failure(|e| seen.push(e.to_string()));
    ///
    /// assert_eq!(value, Failable::failure("timeout"));
    /// assert_eq!(seen, vec!["timeout"]);
    /// ```
    #[inline]
    pub fn inspect_failure<H>(self, f: H) -> Self
    where
        H: FnOnce(&F),
    {
        self.as_ref().reduce(|_| (), f);
        self
    }

    /// Leave the `Failable` world: return the success payload or an error.
    ///
    /// A `Failure` is converted by `to_error` into the caller's error type so
    /// it can travel through `?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// #[derive(Debug)]
    /// struct AppError(String);
    ///
    /// fn run() -> Result<&'static str, AppError> {
    ///     let value: Failable<&str, &str> = Failable::success("result");
    ///     let out = value.get_result_or_fail(|e| AppError(e.to_string()))?;
    ///     Ok(out)
    /// }
    ///
    /// assert_eq!(run().unwrap(), "result");
    /// ```
    #[inline]
    pub fn get_result_or_fail<E, H>(self, to_error: H) -> Result<S, E>
    where
        H: FnOnce(F) -> E,
    {
        self.reduce(Ok, |error| Err(to_error(error)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct TestError(String);

    impl fmt::Display for TestError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "test error: {}", self.0)
        }
    }

    impl std::error::Error for TestError {}

    #[test]
    fn test_on_success_transforms_value() {
        let value: Failable<&str, ()> = Failable::success("abc");
        assert_eq!(value.on_success(str::len), Failable::success(3));
    }

    #[test]
    fn test_on_success_skipped_on_failure() {
        let calls = Cell::new(0);
        let value: Failable<i32, &str> = Failable::failure("e");
        let out = value.on_success(|v| {
            calls.set(calls.get() + 1);
            v
        });
        assert_eq!(out, Failable::failure("e"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_on_success_then_flattens() {
        let value: Failable<i32, String> = Failable::success(1);
        let out = value
            .on_success_then(|v| Failable::success(v + 5))
            .reduce(|v| v, |_| 0);
        assert_eq!(out, 6);
    }

    #[test]
    fn test_on_success_then_can_fail() {
        let value: Failable<i32, &str> = Failable::success(1);
        let out: Failable<i32, &str> = value
            .on_success_then(|_| Failable::<i32, &str>::failure("rejected"))
            .on_success(|v| v + 100);
        assert_eq!(out, Failable::failure("rejected"));
    }

    #[test]
    fn test_on_failure_transforms_error() {
        let value: Failable<i32, i32> = Failable::failure(2);
        let out = value.on_success(|s| s * 2).on_failure(|f| f * 3);
        assert_eq!(out.reduce(|s| s, |f| f), 6);
    }

    #[test]
    fn test_on_failure_skipped_on_success() {
        let calls = Cell::new(0);
        let value: Failable<i32, i32> = Failable::success(1);
        let out = value.on_failure(|e| {
            calls.set(calls.get() + 1);
            e.to_string()
        });
        assert_eq!(out, Failable::success(1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_on_failure_then_recovers() {
        let value: Failable<i32, &str> = Failable::failure("missing");
        let out: Failable<i32, ()> = value.on_failure_then(|e| Failable::success(e.len() as i32));
        assert_eq!(out, Failable::success(7));
    }

    #[test]
    fn test_on_failure_then_skipped_on_success() {
        let value: Failable<i32, &str> = Failable::success(1);
        let out: Failable<i32, String> =
            value.on_failure_then(|_| panic!("handler must not run on success"));
        assert_eq!(out, Failable::success(1));
    }

    #[test]
    fn test_inspect_failure_observes_and_passes_through() {
        let seen = Cell::new(0);
        let value: Failable<i32, i32> = Failable::failure(4);
        let out = value.inspect_failure(|e| seen.set(*e));
        assert_eq!(out, Failable::failure(4));
        assert_eq!(seen.get(), 4);
    }

    #[test]
    fn test_inspect_failure_not_called_on_success() {
        let value: Failable<i32, i32> = Failable::success(4);
        let out = value.inspect_failure(|_| panic!("side effect must not run"));
        assert_eq!(out, Failable::success(4));
    }

    #[test]
    #[should_panic(expected = "logger exploded")]
    fn test_inspect_failure_panic_propagates() {
        let value: Failable<i32, i32> = Failable::failure(4);
        let _ = value.inspect_failure(|_| panic!("logger exploded"));
    }

    #[test]
    fn test_get_result_or_fail_returns_success() {
        let value: Failable<&str, &str> = Failable::success("result");
        assert_eq!(
            value.get_result_or_fail(|_| TestError("unused".into())),
            Ok("result")
        );
    }

    #[test]
    fn test_get_result_or_fail_raises_mapped_error() {
        let value: Failable<&str, &str> = Failable::failure("failure");
        let err = value
            .get_result_or_fail(|e| TestError(e.to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("failure"));
    }

    #[test]
    fn test_get_result_or_fail_feeds_question_mark() {
        fn pipeline(input: i32) -> Result<i32, Box<dyn std::error::Error>> {
            let doubled = Failable::<i32, String>::success(input)
                .on_success_then(|v| {
                    if v >= 0 {
                        Failable::success(v * 2)
                    } else {
                        Failable::failure(format!("negative input {v}"))
                    }
                })
                .get_result_or_fail(TestError)?;
            Ok(doubled + 1)
        }

        assert_eq!(pipeline(3).unwrap(), 7);
        let err = pipeline(-1).unwrap_err();
        assert_eq!(err.to_string(), "test error: negative input -1");
    }

    #[test]
    fn test_failure_propagates_until_intercepted() {
        let later_steps = Cell::new(0);
        let value: Failable<i32, &str> = Failable::failure("early");
        let out = value
            .on_success(|v| {
                later_steps.set(later_steps.get() + 1);
                v + 1
            })
            .on_success_then(|v| {
                later_steps.set(later_steps.get() + 1);
                Failable::success(v * 2)
            })
            .on_failure(|e| format!("caught {e}"))
            .on_success(|v| v + 1);
        assert_eq!(out, Failable::failure("caught early".to_string()));
        assert_eq!(later_steps.get(), 0);
    }
}
