//! The memoization cache.

use std::collections::HashMap;
use std::marker::PhantomData;

use super::key::{CacheKey, ToCacheKey, UnhashableArgumentError};

/// A cache wrapping a pure function.
///
/// `Memoizer<A, R, F>` owns the wrapped function and a mapping from
/// [`CacheKey`] to previously computed results. On each [`call`], the key is
/// derived from the arguments; a hit returns the stored result without
/// invoking the function, a miss invokes it, stores the result, and returns
/// it. The function is therefore invoked **at most once per distinct key**
/// for the lifetime of the cache, or until [`clear`].
///
/// The cache starts empty, grows monotonically on misses, and is never
/// evicted automatically. It is an owned value: independent memoized
/// instances of the same function keep independent caches. Not thread-safe;
/// wrap in a mutex for concurrent use.
///
/// Multi-argument functions take their arguments as a tuple, which is how
/// [`ToCacheKey`] models a call's positional argument list. Calls carrying
/// keyword arguments can derive a key through
/// [`CallKeyBuilder`](super::CallKeyBuilder) and use [`has`]/[`get`]/[`set`]
/// directly.
///
/// [`call`]: Memoizer::call
/// [`clear`]: Memoizer::clear
/// [`has`]: Memoizer::has
/// [`get`]: Memoizer::get
/// [`set`]: Memoizer::set
///
/// # Type Parameters
///
/// * `A` - The argument tuple type (must implement [`ToCacheKey`])
/// * `R` - The result type (must implement [`Clone`])
/// * `F` - The wrapped function type
///
/// # Examples
///
/// ```rust
/// use funky::memo::Memoizer;
/// use std::cell::Cell;
///
/// let invocations = Cell::new(0);
/// let mut square = Memoizer::new(|&(n,): &(i64,)| {
///     invocations.set(invocations.get() + 1);
///     n * n
/// });
///
/// assert_eq!(square.call((12,)).unwrap(), 144);
/// assert_eq!(square.call((12,)).unwrap(), 144);
/// assert_eq!(invocations.get(), 1); // second call was a cache hit
///
/// square.clear();
/// assert_eq!(square.call((12,)).unwrap(), 144);
/// assert_eq!(invocations.get(), 2); // recomputed after clear
/// ```
pub struct Memoizer<A, R, F> {
    function: F,
    cache: HashMap<CacheKey, R>,
    arguments: PhantomData<fn(A)>,
}

impl<A, R, F> Memoizer<A, R, F>
where
    A: ToCacheKey,
    R: Clone,
    F: Fn(&A) -> R,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: HashMap::new(),
            arguments: PhantomData,
        }
    }

    /// Invokes the wrapped function through the cache.
    ///
    /// Derives the key from `arguments`; on a hit the stored result is
    /// returned (cloned) without invoking the function, on a miss the
    /// function runs once and its result is stored. Side effects of the
    /// wrapped function thus occur exactly once per distinct key.
    ///
    /// # Errors
    ///
    /// Returns [`UnhashableArgumentError`] when the arguments cannot form a
    /// key. The wrapped function is never invoked in that case.
    pub fn call(&mut self, arguments: A) -> Result<R, UnhashableArgumentError> {
        let key = arguments.to_cache_key()?;
        if let Some(value) = self.cache.get(&key) {
            return Ok(value.clone());
        }
        let value = (self.function)(&arguments);
        self.cache.insert(key, value.clone());
        Ok(value)
    }
}

impl<A, R, F> Memoizer<A, R, F> {
    /// Returns `true` when a result is cached under `key`.
    #[inline]
    pub fn has(&self, key: CacheKey) -> bool {
        self.cache.contains_key(&key)
    }

    /// Returns the cached result for `key`, or `None` when absent.
    ///
    /// `None` is the documented absent-key contract: a missing key is never
    /// confused with a stored value.
    #[inline]
    pub fn get(&self, key: CacheKey) -> Option<&R> {
        self.cache.get(&key)
    }

    /// Stores (or overwrites) the result for `key`.
    #[inline]
    pub fn set(&mut self, key: CacheKey, value: R) {
        self.cache.insert(key, value);
    }

    /// Discards every cached entry.
    ///
    /// The next call with previously seen arguments recomputes.
    #[inline]
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of cached entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` when nothing is cached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Wraps a function in a fresh [`Memoizer`].
///
/// Convenience constructor; `memoize(f)` is `Memoizer::new(f)`.
///
/// # Examples
///
/// ```rust
/// use funky::memo::memoize;
///
/// let mut concat = memoize(|(a, b): &(String, String)| format!("{a}{b}"));
/// let joined = concat.call(("ab".to_owned(), "cd".to_owned())).unwrap();
/// assert_eq!(joined, "abcd");
/// ```
pub fn memoize<A, R, F>(function: F) -> Memoizer<A, R, F>
where
    A: ToCacheKey,
    R: Clone,
    F: Fn(&A) -> R,
{
    Memoizer::new(function)
}
