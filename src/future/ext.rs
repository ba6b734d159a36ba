//! Extension trait chaining combinators off a future of a [`Failable`].

use std::future::Future;

use crate::future::Resume;
use crate::Failable;

/// A future that resolves to a [`Failable`].
///
/// Names the two payload types of the output so combinator signatures can
/// refer to them. Implemented for every `Future<Output = Failable<S, F>>`.
pub trait FailableFuture:
    Future<Output = Failable<<Self as FailableFuture>::Success, <Self as FailableFuture>::Failure>>
{
    /// Success payload of the resolved value.
    type Success;
    /// Failure payload of the resolved value.
    type Failure;
}

impl<Fut, S, F> FailableFuture for Fut
where
    Fut: Future<Output = Failable<S, F>>,
{
    type Success = S;
    type Failure = F;
}

/// Combinators for any `Future<Output = Failable<S, F>>`.
///
/// Each method awaits the source future, then dispatches exactly like its
/// synchronous counterpart on [`Failable`]. Steps run strictly one after
/// another; a handler never starts before the previous step has resolved.
///
/// Methods come in pairs: a plain handler (`on_success`) and a suspendable
/// one (`on_success_async`), each with a flattening form (`*_then`).
///
/// None of them take a resumption argument. Append [`resume`](Self::resume)
/// after any step to choose how the chain continues once that step
/// completes; a step without it continues inline.
///
/// # Example
///
/// ```rust
/// use failable::Failable;
/// use failable::future::FailableFutureExt;
///
/// async fn fetch(id: u32) -> Failable<String, String> {
///     if id == 0 {
///         Failable::failure("no such user".into())
///     } else {
///         Failable::success(format!("user-{id}"))
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let name = fetch(3)
///     .on_success(|name| name.to_uppercase())
///     .on_success_async(|name| async move { format!("{name}!") })
///     .get_result_or_fail(|e| std::io::Error::other(e))
///     .await
///     .unwrap();
/// assert_eq!(name, "USER-3!");
/// # });
/// ```
pub trait FailableFutureExt: FailableFuture + Sized {
    /// Await, then reduce both variants.
    fn reduce<T, G, H>(self, on_success: G, on_failure: H) -> impl Future<Output = T>
    where
        G: FnOnce(Self::Success) -> T,
        H: FnOnce(Self::Failure) -> T,
    {
        async move { self.await.reduce(on_success, on_failure) }
    }

    /// Await, then reduce both variants with suspendable handlers.
    fn reduce_async<T, G, H, FutS, FutF>(
        self,
        on_success: G,
        on_failure: H,
    ) -> impl Future<Output = T>
    where
        G: FnOnce(Self::Success) -> FutS,
        H: FnOnce(Self::Failure) -> FutF,
        FutS: Future<Output = T>,
        FutF: Future<Output = T>,
    {
        async move { self.await.reduce_async(on_success, on_failure).await }
    }

    /// Await, then transform the success payload.
    fn on_success<T, G>(self, f: G) -> impl Future<Output = Failable<T, Self::Failure>>
    where
        G: FnOnce(Self::Success) -> T,
    {
        async move { self.await.on_success(f) }
    }

    /// Await, then replace a `Success` with the `Failable` returned by `f`.
    fn on_success_then<T, G>(self, f: G) -> impl Future<Output = Failable<T, Self::Failure>>
    where
        G: FnOnce(Self::Success) -> Failable<T, Self::Failure>,
    {
        async move { self.await.on_success_then(f) }
    }

    /// Await, then transform the success payload with a suspendable function.
    fn on_success_async<T, G, Fut>(self, f: G) -> impl Future<Output = Failable<T, Self::Failure>>
    where
        G: FnOnce(Self::Success) -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.on_success_async(f).await }
    }

    /// Await, then replace a `Success` with a suspendable `Failable`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    /// use failable::future::FailableFutureExt;
    ///
    /// # tokio_test::block_on(async {
    /// let out = Failable::<i32, String>::success_async(1)
    ///     .on_success_then_async(|v| async move { Failable::success(v + 5) })
    ///     .await;
    /// assert_eq!(out, Failable::success(6));
    /// # });
    /// ```
    fn on_success_then_async<T, G, Fut>(
        self,
        f: G,
    ) -> impl Future<Output = Failable<T, Self::Failure>>
    where
        G: FnOnce(Self::Success) -> Fut,
        Fut: Future<Output = Failable<T, Self::Failure>>,
    {
        async move { self.await.on_success_then_async(f).await }
    }

    /// Await, then transform the failure payload.
    fn on_failure<G2, H>(self, f: H) -> impl Future<Output = Failable<Self::Success, G2>>
    where
        H: FnOnce(Self::Failure) -> G2,
    {
        async move { self.await.on_failure(f) }
    }

    /// Await, then replace a `Failure` with the `Failable` returned by `f`.
    fn on_failure_then<G2, H>(self, f: H) -> impl Future<Output = Failable<Self::Success, G2>>
    where
        H: FnOnce(Self::Failure) -> Failable<Self::Success, G2>,
    {
        async move { self.await.on_failure_then(f) }
    }

    /// Await, then transform the failure payload with a suspendable function.
    fn on_failure_async<G2, H, Fut>(self, f: H) -> impl Future<Output = Failable<Self::Success, G2>>
    where
        H: FnOnce(Self::Failure) -> Fut,
        Fut: Future<Output = G2>,
    {
        async move { self.await.on_failure_async(f).await }
    }

    /// Await, then replace a `Failure` with a suspendable `Failable`.
    fn on_failure_then_async<G2, H, Fut>(
        self,
        f: H,
    ) -> impl Future<Output = Failable<Self::Success, G2>>
    where
        H: FnOnce(Self::Failure) -> Fut,
        Fut: Future<Output = Failable<Self::Success, G2>>,
    {
        async move { self.await.on_failure_then_async(f).await }
    }

    /// Await, then observe a failure without changing the value.
    fn inspect_failure<H>(
        self,
        f: H,
    ) -> impl Future<Output = Failable<Self::Success, Self::Failure>>
    where
        H: FnOnce(&Self::Failure),
    {
        async move { self.await.inspect_failure(f) }
    }

    /// Await, then return the success payload or the mapped error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use failable::Failable;
    /// use failable::future::FailableFutureExt;
    ///
    /// # tokio_test::block_on(async {
    /// let err = Failable::<(), &str>::failure_async("failure")
    ///     .get_result_or_fail(|e| format!("request failed: {e}"))
    ///     .await
    ///     .unwrap_err();
    /// assert!(err.contains("failure"));
    /// # });
    /// ```
    fn get_result_or_fail<E, H>(self, to_error: H) -> impl Future<Output = Result<Self::Success, E>>
    where
        H: FnOnce(Self::Failure) -> E,
    {
        async move { self.await.get_result_or_fail(to_error) }
    }

    /// Await, then continue the chain according to `mode`.
    ///
    /// With [`Resume::Yield`] the executor gets a turn between this step and
    /// the next handler; with [`Resume::Inline`] the next handler runs in the
    /// same poll.
    fn resume(self, mode: Resume) -> impl Future<Output = Failable<Self::Success, Self::Failure>> {
        async move {
            let value = self.await;
            mode.settle().await;
            value
        }
    }
}

impl<Fut: FailableFuture> FailableFutureExt for Fut {}
