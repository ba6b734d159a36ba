//! Suspendable combinators on a plain [`Failable`].
//!
//! The handler returns a future; the combinator returns a future of the new
//! `Failable`. Nothing runs, not even the handler call, until the returned
//! future is polled.

use std::future::Future;

use futures::future::{Either, FutureExt};

use crate::Failable;

impl<S, F> Failable<S, F> {
    /// Reduce both variants with suspendable handlers.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// # tokio_test::block_on(async {
    /// let value: Failable<i32, String> = Failable::success(2);
    /// let out = value
    ///     .reduce_async(|v| async move { v * 10 }, |_| async { 0 })
    ///     .await;
    /// assert_eq!(out, 20);
    /// # });
    /// ```
    pub fn reduce_async<T, G, H, FutS, FutF>(
        self,
        on_success: G,
        on_failure: H,
    ) -> impl Future<Output = T>
    where
        G: FnOnce(S) -> FutS,
        H: FnOnce(F) -> FutF,
        FutS: Future<Output = T>,
        FutF: Future<Output = T>,
    {
        async move {
            self.reduce(
                |value| Either::Left(on_success(value)),
                |error| Either::Right(on_failure(error)),
            )
            .await
        }
    }

    /// Transform the success payload with a suspendable function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// # tokio_test::block_on(async {
    /// let value: Failable<i32, String> = Failable::success(1);
    /// let out = value.on_success_async(|v| async move { v * 2 }).await;
    /// assert_eq!(out, Failable::success(2));
    /// # });
    /// ```
    pub fn on_success_async<T, G, Fut>(self, f: G) -> impl Future<Output = Failable<T, F>>
    where
        G: FnOnce(S) -> Fut,
        Fut: Future<Output = T>,
    {
        self.reduce_async(
            |value| f(value).map(Failable::success),
            Failable::failure_async,
        )
    }

    /// Replace a `Success` with the `Failable` a suspendable function returns.
    pub fn on_success_then_async<T, G, Fut>(self, f: G) -> impl Future<Output = Failable<T, F>>
    where
        G: FnOnce(S) -> Fut,
        Fut: Future<Output = Failable<T, F>>,
    {
        self.reduce_async(f, Failable::failure_async)
    }

    /// Transform the failure payload with a suspendable function.
    pub fn on_failure_async<G2, H, Fut>(self, f: H) -> impl Future<Output = Failable<S, G2>>
    where
        H: FnOnce(F) -> Fut,
        Fut: Future<Output = G2>,
    {
        self.reduce_async(Failable::success_async, |error| {
            f(error).map(Failable::failure)
        })
    }

    /// Replace a `Failure` with the `Failable` a suspendable function returns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    ///
    /// # tokio_test::block_on(async {
    /// let value: Failable<&str, &str> = Failable::failure("cache miss");
    /// let out: Failable<&str, ()> = value
    ///     .on_failure_then_async(|_| async { Failable::success("from origin") })
    ///     .await;
    /// assert_eq!(out, Failable::success("from origin"));
    /// # });
    /// ```
    pub fn on_failure_then_async<G2, H, Fut>(
        self,
        f: H,
    ) -> impl Future<Output = Failable<S, G2>>
    where
        H: FnOnce(F) -> Fut,
        Fut: Future<Output = Failable<S, G2>>,
    {
        self.reduce_async(Failable::success_async, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_reduce_async_picks_failure_handler() {
        let value: Failable<i32, i32> = Failable::failure(3);
        let out = value
            .reduce_async(|v| async move { v * 100 }, |e| async move { e + 1 })
            .await;
        assert_eq!(out, 4);
    }

    #[tokio::test]
    async fn test_on_success_async_skipped_on_failure() {
        let calls = Cell::new(0);
        let value: Failable<i32, &str> = Failable::failure("e");
        let out = value
            .on_success_async(|v| {
                calls.set(calls.get() + 1);
                async move { v }
            })
            .await;
        assert_eq!(out, Failable::failure("e"));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_on_success_then_async_flattens() {
        let value: Failable<i32, String> = Failable::success(1);
        let out = value
            .on_success_then_async(|v| async move { Failable::success(v + 5) })
            .await;
        assert_eq!(out, Failable::success(6));
    }

    #[tokio::test]
    async fn test_on_failure_async_transforms_error() {
        let value: Failable<i32, i32> = Failable::failure(2);
        let out = value.on_failure_async(|e| async move { e * 3 }).await;
        assert_eq!(out, Failable::failure(6));
    }

    #[tokio::test]
    async fn test_on_failure_async_skipped_on_success() {
        let calls = Cell::new(0);
        let value: Failable<i32, i32> = Failable::success(2);
        let out = value
            .on_failure_async(|e| {
                calls.set(calls.get() + 1);
                async move { e.to_string() }
            })
            .await;
        assert_eq!(out, Failable::success(2));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_handler_not_called_until_polled() {
        let calls = Cell::new(0);
        let value: Failable<i32, ()> = Failable::success(1);
        let pending = value.on_success_async(|v| {
            calls.set(calls.get() + 1);
            async move { v }
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(pending.await, Failable::success(1));
        assert_eq!(calls.get(), 1);
    }
}
