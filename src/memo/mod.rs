//! Memoization: cache a function's output per distinct argument set.
//!
//! The pieces:
//!
//! - [`CacheKey`]: a deterministic digest of a call's arguments
//! - [`ToCacheKey`]: fallible key derivation (a float `NaN` cannot form a
//!   key and is rejected with [`UnhashableArgumentError`])
//! - [`CallKeyBuilder`]: key derivation for calls with keyword arguments,
//!   sorted by name so supply order does not matter
//! - [`Memoizer`] / [`memoize`]: the cache itself
//!
//! The behavioral contract: the wrapped function runs **at most once per
//! distinct key** for the lifetime of the cache, or until
//! [`Memoizer::clear`].
//!
//! # Examples
//!
//! ```rust
//! use funky::memo::memoize;
//!
//! let mut add = memoize(|&(a, b): &(i32, i32)| a + b);
//! assert_eq!(add.call((2, 3)).unwrap(), 5);
//! assert_eq!(add.call((2, 3)).unwrap(), 5); // served from the cache
//! ```

mod key;
mod memoizer;

pub use key::{CacheKey, CallKeyBuilder, ToCacheKey, UnhashableArgumentError};
pub use memoizer::{Memoizer, memoize};
