//! Functions that cache their results per argument list.

use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::hash::{self, FastHashMap};

/// A function wrapper that remembers the result for every distinct argument
/// list it has seen.
///
/// The cache key is the argument value itself (usually a tuple), compared
/// with `Eq` and `Hash`. Because the key is typed, argument lists of a
/// different arity or of different types can never share an entry: `(1,)`
/// and `("1",)` are different types, and `()` and `(x,)` are too.
///
/// The cache belongs to this wrapper, lives as long as it does, and is never
/// cleared.
///
/// # Thread Safety
///
/// Each key owns its own once-cell. The cache map is locked only long enough
/// to find or create that cell, so concurrent callers with the same key
/// compute the result once, callers with different keys compute in
/// parallel, and the wrapped function may itself call other memoized
/// functions.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::memoize;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let calls = AtomicUsize::new(0);
/// let area = memoize(|(width, height): (u32, u32)| {
///     calls.fetch_add(1, Ordering::SeqCst);
///     width * height
/// });
///
/// assert_eq!(area.call((3, 4)), 12);
/// assert_eq!(area.call((3, 4)), 12);
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
///
/// assert_eq!(area.call((4, 3)), 12);
/// assert_eq!(calls.load(Ordering::SeqCst), 2);
/// ```
pub struct Memoize<A, R, F> {
    function: F,
    cache: Mutex<FastHashMap<A, Arc<OnceLock<R>>>>,
}

impl<A, R, F> Memoize<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    /// Wraps `function` with an empty cache.
    #[must_use]
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: Mutex::new(hash::new_map()),
        }
    }

    /// Returns the cached result for `arguments`, computing it on a miss.
    ///
    /// # Panics
    ///
    /// A panic in the wrapped function propagates to the caller and nothing
    /// is cached for those arguments, so a later call retries.
    pub fn call(&self, arguments: A) -> R {
        let slot = {
            let mut cache = self.cache.lock();
            Arc::clone(cache.entry(arguments.clone()).or_default())
        };

        if let Some(value) = slot.get() {
            tracing::trace!("memoize: cache hit");
            return value.clone();
        }

        let _eviction = EvictEmptySlot {
            cache: &self.cache,
            key: arguments.clone(),
            slot: &slot,
        };
        slot.get_or_init(|| {
            tracing::trace!("memoize: cache miss, invoking the wrapped function");
            (self.function)(arguments)
        })
        .clone()
    }

    /// Returns `true` if a result is cached for `arguments`.
    #[must_use]
    pub fn contains_key(&self, arguments: &A) -> bool {
        self.cache
            .lock()
            .get(arguments)
            .is_some_and(|slot| slot.get().is_some())
    }
}

/// Removes a slot whose initialization unwound, so failed keys leave no
/// entry behind.
struct EvictEmptySlot<'m, A: Eq + Hash, R> {
    cache: &'m Mutex<FastHashMap<A, Arc<OnceLock<R>>>>,
    key: A,
    slot: &'m Arc<OnceLock<R>>,
}

impl<A: Eq + Hash, R> Drop for EvictEmptySlot<'_, A, R> {
    fn drop(&mut self) {
        if self.slot.get().is_some() {
            return;
        }
        let mut cache = self.cache.lock();
        // Another caller may have replaced or filled the entry meanwhile.
        let stale = cache
            .get(&self.key)
            .is_some_and(|current| Arc::ptr_eq(current, self.slot) && current.get().is_none());
        if stale {
            tracing::trace!("memoize: dropping slot left empty by a panic");
            cache.remove(&self.key);
        }
    }
}

impl<A, R, F> Memoize<A, R, F> {
    /// Returns the number of cached results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache
            .lock()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    /// Returns `true` if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A, R, F> fmt::Debug for Memoize<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_unit_and_single_argument_are_distinct_caches() {
        let unit = Memoize::new(|(): ()| 0);
        let single = Memoize::new(|(value,): (Option<i32>,)| value.unwrap_or(1));
        assert_eq!(unit.call(()), 0);
        assert_eq!(single.call((None,)), 1);
        assert_eq!(unit.len(), 1);
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_panicking_call_caches_nothing() {
        let attempts = Cell::new(0);
        let flaky = Memoize::new(|value: i32| {
            attempts.set(attempts.get() + 1);
            assert!(attempts.get() > 1, "first attempt fails");
            value
        });

        let first = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| flaky.call(5)));
        assert!(first.is_err());
        assert!(!flaky.contains_key(&5));

        assert_eq!(flaky.cache.lock().len(), 0);

        assert_eq!(flaky.call(5), 5);
        assert!(flaky.contains_key(&5));
        assert_eq!(attempts.get(), 2);
        assert_eq!(flaky.cache.lock().len(), 1);
    }

    #[test]
    fn test_panicking_keys_leave_no_entries_behind() {
        let failing = Memoize::new(|value: u32| -> u32 { panic!("no result for {value}") });

        for key in 0..200 {
            let outcome =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| failing.call(key)));
            assert!(outcome.is_err());
        }

        assert!(failing.is_empty());
        assert_eq!(failing.cache.lock().len(), 0);
    }

    #[test]
    fn test_successful_miss_keeps_its_entry() {
        let doubled = Memoize::new(|value: u32| value * 2);
        assert_eq!(doubled.call(4), 8);
        assert_eq!(doubled.call(5), 10);
        assert_eq!(doubled.cache.lock().len(), 2);
    }

    #[test]
    fn test_debug_reports_cache_size() {
        let memoized = Memoize::new(|value: u8| value);
        memoized.call(1);
        assert!(format!("{memoized:?}").contains("cached: 1"));
    }
}
