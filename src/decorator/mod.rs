//! Function decorators.
//!
//! A decorator takes a function and returns a new value with altered
//! invocation semantics. Each decorator is a struct that owns both the
//! wrapped function and its private state, and exposes a `call` method:
//!
//! | Decorator | State | `call` returns |
//! |---|---|---|
//! | [`Once`] | called flag and cached result | `&R`, always the first result |
//! | [`Memoize`] | cache keyed by argument value | `R`, cached per argument list |
//! | [`Throttle`] | last invocation instant | `Option<R>`, `None` when dropped |
//!
//! [`delay`] (feature `async`) schedules a single deferred invocation and
//! returns a cancellable [`DelayHandle`].
//!
//! Arguments are passed as one value. Functions of several arguments take a
//! tuple, which also makes the argument list the memoization key.
//!
//! # Examples
//!
//! ```rust
//! use underbar::decorator::{memoize, once};
//!
//! let connect = once(|address: &str| format!("connected to {address}"));
//! assert_eq!(connect.call("primary"), "connected to primary");
//! assert_eq!(connect.call("replica"), "connected to primary");
//!
//! let square = memoize(|value: u64| value * value);
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.len(), 1);
//! ```

mod clock;
#[cfg(feature = "async")]
mod delay;
mod memoize;
mod once;
mod throttle;

#[cfg(feature = "async")]
pub use clock::TokioClock;
pub use clock::{Clock, ManualClock, MonotonicClock};
#[cfg(feature = "async")]
pub use delay::{DelayHandle, delay, delay_on};
pub use memoize::Memoize;
pub use once::Once;
pub use throttle::Throttle;

use std::hash::Hash;
use std::time::Duration;

/// Returns a wrapper that runs `function` on its first call only.
///
/// See [`Once`].
#[must_use]
pub const fn once<A, R, F>(function: F) -> Once<A, R, F>
where
    F: FnOnce(A) -> R,
{
    Once::new(function)
}

/// Returns a wrapper that caches the result of `function` per argument
/// value.
///
/// See [`Memoize`].
#[must_use]
pub fn memoize<A, R, F>(function: F) -> Memoize<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    Memoize::new(function)
}

/// Returns a wrapper that runs `function` at most once per `wait` of
/// monotonic time.
///
/// See [`Throttle`].
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::throttle;
/// use std::time::Duration;
///
/// let refresh = throttle(|(): ()| "refreshed", Duration::from_secs(60));
/// assert_eq!(refresh.call(()), Some("refreshed"));
/// assert_eq!(refresh.call(()), None);
/// ```
#[must_use]
pub const fn throttle<A, R, F>(function: F, wait: Duration) -> Throttle<A, R, F>
where
    F: Fn(A) -> R,
{
    Throttle::new(function, wait)
}

/// Returns a wrapper that runs `function` at most once per `wait`, as
/// measured by `clock`.
///
/// See [`Throttle`].
#[must_use]
pub const fn throttle_with_clock<A, R, F, C>(function: F, wait: Duration, clock: C) -> Throttle<A, R, F, C>
where
    F: Fn(A) -> R,
    C: Clock,
{
    Throttle::with_clock(function, wait, clock)
}

static_assertions::assert_impl_all!(Once<i32, String, fn(i32) -> String>: Send, Sync);
static_assertions::assert_impl_all!(Memoize<(i32, i32), String, fn((i32, i32)) -> String>: Send, Sync);
static_assertions::assert_impl_all!(Throttle<i32, i32, fn(i32) -> i32>: Send, Sync);
static_assertions::assert_impl_all!(ManualClock: Send, Sync, Clone);
