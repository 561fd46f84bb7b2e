//! Functions that run at most once.

use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

use parking_lot::Mutex;

/// A function wrapper that invokes the wrapped function on the first call
/// only.
///
/// The first [`call`](Once::call) runs the function with its arguments and
/// caches the result. Every later call, whatever its arguments, returns the
/// cached result without running the function again. Arguments are passed
/// as a single value, usually a tuple.
///
/// # Type Parameters
///
/// * `A` - The argument type (use a tuple for several arguments)
/// * `R` - The result type
/// * `F` - The wrapped function, which only needs to be `FnOnce`
///
/// # Thread Safety
///
/// `Once` is `Sync` when `F: Send` and `R: Send + Sync`. Under concurrent
/// first calls exactly one caller runs the function; the others block until
/// the result is available.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::once;
///
/// let initialize = once(|(name,): (&str,)| format!("hello, {name}"));
///
/// assert_eq!(initialize.call(("ada",)), "hello, ada");
/// // Later arguments are ignored.
/// assert_eq!(initialize.call(("bob",)), "hello, ada");
/// ```
pub struct Once<A, R, F> {
    function: Mutex<Option<F>>,
    result: OnceLock<R>,
    _arguments: PhantomData<fn(A)>,
}

impl<A, R, F: FnOnce(A) -> R> Once<A, R, F> {
    /// Wraps `function` so that it runs at most once.
    #[inline]
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self {
            function: Mutex::new(Some(function)),
            result: OnceLock::new(),
            _arguments: PhantomData,
        }
    }

    /// Runs the wrapped function on the first call and returns its result.
    ///
    /// Every call returns a reference to the same cached result.
    ///
    /// # Panics
    ///
    /// If the wrapped function panics, the panic propagates to the caller
    /// and the wrapper becomes poisoned: the function has been consumed, so
    /// every later call panics as well.
    pub fn call(&self, arguments: A) -> &R {
        self.result.get_or_init(|| {
            let function = self.function.lock().take();
            let Some(function) = function else {
                panic!("Once instance has been poisoned");
            };
            tracing::trace!("once: invoking the wrapped function");
            function(arguments)
        })
    }
}

impl<A, R, F> Once<A, R, F> {
    /// Returns `true` once the wrapped function has produced its result.
    #[inline]
    #[must_use]
    pub fn is_called(&self) -> bool {
        self.result.get().is_some()
    }

    /// Returns the cached result without invoking anything.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<&R> {
        self.result.get()
    }

    /// Consumes the wrapper and returns the cached result, if any.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Option<R> {
        self.result.into_inner()
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for Once<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result.get() {
            Some(value) => formatter.debug_tuple("Once").field(value).finish(),
            None => formatter.write_str("Once(<not called>)"),
        }
    }
}
