//! Deferred invocation on a tokio runtime.

use std::future::Future;
use std::panic;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::UnderbarError;

/// A handle to an invocation scheduled by [`delay`] or [`delay_on`].
///
/// Dropping the handle does not cancel the invocation; it still runs when
/// its deadline passes. Awaiting the handle yields the function's result,
/// or [`UnderbarError::Cancelled`] if [`cancel`](DelayHandle::cancel) won
/// the race. A panic inside the function resumes on the awaiting task.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::delay;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let handle = delay(|(left, right): (i32, i32)| left + right, Duration::from_millis(5), (2, 3))
///     .expect("called inside a runtime");
/// assert_eq!(handle.await, Ok(5));
/// # }
/// ```
#[derive(Debug)]
pub struct DelayHandle<R> {
    task: JoinHandle<R>,
    wait: Duration,
}

impl<R> DelayHandle<R> {
    /// Cancels the invocation if it has not started yet.
    pub fn cancel(&self) {
        tracing::debug!(wait = ?self.wait, "delay: cancelling scheduled invocation");
        self.task.abort();
    }

    /// Returns `true` once the invocation has completed or been cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Returns the delay the invocation was scheduled with.
    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }
}

impl<R> Future for DelayHandle<R> {
    type Output = Result<R, UnderbarError>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.task).poll(context) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(value)) => Poll::Ready(Ok(value)),
            Poll::Ready(Err(error)) if error.is_cancelled() => {
                Poll::Ready(Err(UnderbarError::Cancelled))
            }
            Poll::Ready(Err(error)) => panic::resume_unwind(error.into_panic()),
        }
    }
}

/// Schedules `function(arguments)` to run once after `wait` on the current
/// tokio runtime.
///
/// Returns immediately. Invocations scheduled on the same runtime fire in
/// deadline order.
///
/// # Errors
///
/// Returns [`UnderbarError::NoScheduler`] when called outside a tokio
/// runtime. Use [`delay_on`] to schedule from elsewhere.
pub fn delay<A, R, F>(function: F, wait: Duration, arguments: A) -> Result<DelayHandle<R>, UnderbarError>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    let handle = Handle::try_current().map_err(|_| UnderbarError::NoScheduler)?;
    Ok(delay_on(&handle, function, wait, arguments))
}

/// Schedules `function(arguments)` to run once after `wait` on the runtime
/// behind `handle`.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::delay_on;
/// use std::time::Duration;
///
/// let runtime = tokio::runtime::Builder::new_current_thread()
///     .enable_time()
///     .build()
///     .unwrap();
///
/// let handle = delay_on(runtime.handle(), |name: &'static str| name.len(), Duration::from_millis(1), "tokio");
/// assert_eq!(runtime.block_on(handle), Ok(5));
/// ```
pub fn delay_on<A, R, F>(handle: &Handle, function: F, wait: Duration, arguments: A) -> DelayHandle<R>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    tracing::debug!(?wait, "delay: scheduling invocation");
    let task = handle.spawn(async move {
        tokio::time::sleep(wait).await;
        function(arguments)
    });
    DelayHandle { task, wait }
}
