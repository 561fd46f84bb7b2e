//! Rate-limited functions.

use std::fmt;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::clock::{Clock, MonotonicClock};

/// A function wrapper that runs the wrapped function at most once per time
/// window.
///
/// The first call runs the function immediately. A call made less than
/// `wait` after the last actual invocation is dropped and returns `None`;
/// a call made at or after `wait` runs the function and starts a new window.
///
/// Dropped calls are discarded entirely: there is no trailing invocation at
/// the end of the window.
///
/// # Thread Safety
///
/// Reading and updating the last invocation time is a single critical
/// section, so two concurrent callers can never both open the same window.
/// The wrapped function itself runs outside the lock.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::{ManualClock, throttle_with_clock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let save = throttle_with_clock(|draft: &str| draft.len(), Duration::from_millis(100), clock.clone());
///
/// assert_eq!(save.call("a"), Some(1));   // t = 0ms
/// clock.advance(Duration::from_millis(50));
/// assert_eq!(save.call("ab"), None);     // t = 50ms, dropped
/// clock.advance(Duration::from_millis(100));
/// assert_eq!(save.call("abc"), Some(3)); // t = 150ms
/// ```
pub struct Throttle<A, R, F, C = MonotonicClock> {
    function: F,
    wait: Duration,
    clock: C,
    last_invocation: Mutex<Option<Instant>>,
    _signature: PhantomData<fn(A) -> R>,
}

impl<A, R, F, C> Throttle<A, R, F, C>
where
    F: Fn(A) -> R,
    C: Clock,
{
    /// Wraps `function` so that it runs at most once per `wait`, measured by
    /// `clock`.
    #[must_use]
    pub const fn with_clock(function: F, wait: Duration, clock: C) -> Self {
        Self {
            function,
            wait,
            clock,
            last_invocation: Mutex::new(None),
            _signature: PhantomData,
        }
    }

    /// Runs the wrapped function if the current window has elapsed.
    ///
    /// Returns `Some(result)` when the function ran and `None` when the call
    /// was dropped.
    pub fn call(&self, arguments: A) -> Option<R> {
        let now = self.clock.now();
        {
            let mut last_invocation = self.last_invocation.lock();
            let window_elapsed = last_invocation
                .is_none_or(|previous| now.saturating_duration_since(previous) >= self.wait);
            if !window_elapsed {
                tracing::trace!(wait = ?self.wait, "throttle: call dropped");
                return None;
            }
            *last_invocation = Some(now);
        }
        tracing::trace!("throttle: invoking the wrapped function");
        Some((self.function)(arguments))
    }

    /// Returns how long until a call would run again.
    ///
    /// `Duration::ZERO` means the next call runs immediately.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        let now = self.clock.now();
        self.last_invocation.lock().map_or(Duration::ZERO, |previous| {
            self.wait
                .saturating_sub(now.saturating_duration_since(previous))
        })
    }
}

impl<A, R, F> Throttle<A, R, F, MonotonicClock>
where
    F: Fn(A) -> R,
{
    /// Wraps `function` so that it runs at most once per `wait` of monotonic
    /// time.
    #[must_use]
    pub const fn new(function: F, wait: Duration) -> Self {
        Self::with_clock(function, wait, MonotonicClock)
    }
}

impl<A, R, F, C> Throttle<A, R, F, C> {
    /// Returns the window length.
    #[inline]
    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }
}

impl<A, R, F, C> fmt::Debug for Throttle<A, R, F, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("last_invocation", &*self.last_invocation.lock())
            .finish_non_exhaustive()
    }
}
