//! Sequence accessors and truthiness helpers.
//!
//! This module provides small, pure functions over slices:
//!
//! - [`first`], [`rest`], [`last`]: positional accessors
//! - [`get`]: index lookup with negative indices counting from the end
//! - [`next_after`], [`prev_before`]: value-relative lookup
//! - [`Truthy`], [`true_only`], [`first_true`]: truthiness filtering
//!
//! All accessors use [`Option`] as the "no such element" channel; callers
//! that want a default value can chain `unwrap_or` at the call site.
//!
//! # Examples
//!
//! ```rust
//! use funky::sequence::{first, rest, first_true};
//!
//! let items = [1, 2, 3];
//! assert_eq!(first(&items), Some(&1));
//! assert_eq!(rest(&items), &[2, 3]);
//! assert_eq!(first_true([0, 0, 7]), Some(7));
//! ```

mod accessors;
mod truthy;

pub use accessors::{first, get, last, next_after, prev_before, rest};
pub use truthy::{Truthy, first_true, true_only};
