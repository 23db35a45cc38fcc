//! Function combinators.
//!
//! - [`transform`]: post-compose a transformation onto a function's result
//! - [`negate`]: [`transform`] specialized with boolean negation
//!
//! # Examples
//!
//! ```rust
//! use funky::compose::{negate, transform};
//!
//! fn double(n: i32) -> i32 { n * 2 }
//! fn is_even(n: i32) -> bool { n % 2 == 0 }
//!
//! let doubled_text = transform(|n: i32| n.to_string(), double);
//! assert_eq!(doubled_text(21), "42");
//!
//! let is_odd = negate(is_even);
//! assert!(is_odd(3));
//! ```

mod transform;

pub use transform::{negate, transform};
