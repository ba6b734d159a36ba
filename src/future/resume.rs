//! Where a suspendable chain continues after a step completes.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Continuation policy applied after an awaited step.
///
/// A Rust future has no ambient execution context to marshal back to; the
/// task that polls the chain is the context. The choice is therefore whether
/// the next handler runs in the same poll that observed completion, or only
/// after the executor has had a turn.
///
/// Selected per call with
/// [`FailableFutureExt::resume`](crate::future::FailableFutureExt::resume).
/// Chains that never call `resume` all behave as [`Resume::Inline`].
///
/// # Example
///
/// ```rust
/// use failable::Failable;
/// use failable::future::{FailableFutureExt, Resume};
///
/// # tokio_test::block_on(async {
/// let out = Failable::<i32, String>::success_async(1)
///     .resume(Resume::Yield)
///     .on_success(|v| v + 1)
///     .await;
/// assert_eq!(out, Failable::success(2));
/// # });
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Resume {
    /// Continue immediately, in whatever poll completed the previous step.
    #[default]
    Inline,
    /// Yield to the executor once before continuing.
    Yield,
}

impl Resume {
    pub(crate) async fn settle(self) {
        if self == Resume::Yield {
            YieldNow::default().await;
        }
    }
}

/// Returns `Pending` exactly once, waking itself first.
#[derive(Debug, Default)]
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}
