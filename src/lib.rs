//! # funky
//!
//! A small collection of general-purpose functional programming helpers.
//!
//! ## Overview
//!
//! This library bundles a handful of utilities that keep showing up in
//! functional-style Rust code:
//!
//! - **Sequence accessors**: `first`, `rest`, `last`, `get` (with negative
//!   indexing), `next_after`, `prev_before`
//! - **Truthiness helpers**: the [`Truthy`](sequence::Truthy) trait,
//!   `true_only`, `first_true`
//! - **Argument normalization**: accept either one container argument or
//!   many scalar arguments and flatten both into a single sequence
//! - **Memoization**: a [`Memoizer`](memo::Memoizer) cache with explicit
//!   key derivation, lookup, store, and clear operations
//! - **Combinators**: `transform` (post-composition) and `negate`
//!
//! Everything is single-threaded and synchronous. The memoization cache is
//! the only piece of mutable state, and it is an owned value with its own
//! lifecycle rather than a process-wide singleton. Callers that need
//! concurrent access must add their own synchronization.
//!
//! ## Feature Flags
//!
//! - `sequence`: Sequence accessors and truthiness helpers
//! - `arguments`: Argument normalization
//! - `memo`: Memoization cache
//! - `compose`: Function combinators
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funky::prelude::*;
//!
//! let mut doubled = memoize(|&(n,): &(i32,)| n * 2);
//! assert_eq!(doubled.call((21,)).unwrap(), 42);
//!
//! assert_eq!(first_true([0, 0, 5, 6]), Some(5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use funky::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "arguments")]
    pub use crate::arguments::*;

    #[cfg(feature = "memo")]
    pub use crate::memo::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "arguments")]
pub mod arguments;

#[cfg(feature = "memo")]
pub mod memo;

#[cfg(feature = "compose")]
pub mod compose;
