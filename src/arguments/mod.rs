//! Argument normalization.
//!
//! Lets a function accept either one container argument or many scalar
//! arguments and see a single flat sequence either way:
//!
//! ```rust
//! use funky::arguments::{Argument, list_from_args};
//!
//! // func([a, b, c]) and func(a, b, c) normalize identically
//! let from_list = list_from_args(vec![Argument::list(vec![1, 2, 3])]).unwrap();
//! let from_scalars = list_from_args(vec![
//!     Argument::scalar(1),
//!     Argument::scalar(2),
//!     Argument::scalar(3),
//! ])
//! .unwrap();
//! assert_eq!(from_list, from_scalars);
//! ```
//!
//! The call must be homogeneous: the first argument's kind decides the mode,
//! and every other argument must be of the same kind. Mixing container and
//! scalar style (or different container kinds) in one call is a
//! [`UniformTypeError`].

use std::collections::BTreeSet;
use std::fmt;

/// The closed set of argument kinds the normalizer recognizes.
///
/// `List`, `Tuple`, and `Set` are container kinds whose elements are
/// flattened; `Scalar` arguments are taken as the elements themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// An ordered, growable sequence of elements.
    List,
    /// An ordered, fixed sequence of elements.
    Tuple,
    /// An unordered collection of distinct elements.
    Set,
    /// A single non-container value.
    Scalar,
}

impl ArgumentKind {
    /// Returns `true` for the container kinds (`List`, `Tuple`, `Set`).
    #[inline]
    pub const fn is_container(self) -> bool {
        !matches!(self, Self::Scalar)
    }

    const fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Tuple => "tuple",
            Self::Set => "set",
            Self::Scalar => "scalar",
        }
    }
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// One positional argument: a container of elements or a single scalar.
///
/// The `Set` kind is carried by a [`BTreeSet`]; when flattened, its elements
/// appear in the set's own iteration order. That order is a property of the
/// set, not of the normalizer, and callers should treat it as
/// implementation-dependent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument<T> {
    /// A list of elements, flattened in order.
    List(Vec<T>),
    /// A tuple of elements, flattened in order.
    Tuple(Vec<T>),
    /// A set of elements, flattened in the set's iteration order.
    Set(BTreeSet<T>),
    /// A single element.
    Scalar(T),
}

impl<T> Argument<T> {
    /// Wraps a list argument.
    #[inline]
    pub const fn list(elements: Vec<T>) -> Self {
        Self::List(elements)
    }

    /// Wraps a tuple argument.
    #[inline]
    pub const fn tuple(elements: Vec<T>) -> Self {
        Self::Tuple(elements)
    }

    /// Wraps a set argument.
    #[inline]
    pub const fn set(elements: BTreeSet<T>) -> Self {
        Self::Set(elements)
    }

    /// Wraps a scalar argument.
    #[inline]
    pub const fn scalar(value: T) -> Self {
        Self::Scalar(value)
    }

    /// Returns the kind tag this argument dispatches on.
    #[inline]
    pub const fn kind(&self) -> ArgumentKind {
        match self {
            Self::List(_) => ArgumentKind::List,
            Self::Tuple(_) => ArgumentKind::Tuple,
            Self::Set(_) => ArgumentKind::Set,
            Self::Scalar(_) => ArgumentKind::Scalar,
        }
    }

    fn into_elements(self) -> Vec<T> {
        match self {
            Self::List(elements) | Self::Tuple(elements) => elements,
            Self::Set(elements) => elements.into_iter().collect(),
            Self::Scalar(value) => vec![value],
        }
    }
}

/// Error raised when a call mixes argument kinds.
///
/// The first argument's kind decides the call's mode; this error reports the
/// first position whose kind disagrees with it.
///
/// # Examples
///
/// ```rust
/// use funky::arguments::{Argument, ArgumentKind, list_from_args};
///
/// let error = list_from_args(vec![
///     Argument::list(vec![1, 2]),
///     Argument::scalar(3),
/// ])
/// .unwrap_err();
///
/// assert_eq!(error.expected, ArgumentKind::List);
/// assert_eq!(error.found, ArgumentKind::Scalar);
/// assert_eq!(error.position, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformTypeError {
    /// The kind of the first argument.
    pub expected: ArgumentKind,
    /// The kind of the offending argument.
    pub found: ArgumentKind,
    /// Zero-based position of the offending argument.
    pub position: usize,
}

impl fmt::Display for UniformTypeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "expected uniform {} arguments, found {} at position {}",
            self.expected, self.found, self.position
        )
    }
}

impl std::error::Error for UniformTypeError {}

/// Flattens a call's positional arguments into one sequence.
///
/// - Empty input yields an empty `Vec`.
/// - If the first argument is a container kind, every argument must be of
///   that same kind; their elements are concatenated in argument order.
/// - If the first argument is a scalar, every argument must be a scalar and
///   the result is the arguments themselves in call order.
///
/// Pure: the input is consumed, nothing else is touched.
///
/// # Errors
///
/// Returns [`UniformTypeError`] when any argument's kind differs from the
/// first argument's kind.
///
/// # Examples
///
/// ```rust
/// use funky::arguments::{Argument, list_from_args};
///
/// let flat = list_from_args(vec![
///     Argument::list(vec![1, 2]),
///     Argument::list(vec![3, 4]),
/// ])
/// .unwrap();
/// assert_eq!(flat, vec![1, 2, 3, 4]);
///
/// assert_eq!(list_from_args(Vec::<Argument<i32>>::new()).unwrap(), vec![]);
/// ```
pub fn list_from_args<T, I>(args: I) -> Result<Vec<T>, UniformTypeError>
where
    I: IntoIterator<Item = Argument<T>>,
{
    let mut arguments = args.into_iter();
    let Some(head) = arguments.next() else {
        return Ok(Vec::new());
    };

    let expected = head.kind();
    let mut flattened = head.into_elements();
    for (position, argument) in arguments.enumerate() {
        let found = argument.kind();
        if found != expected {
            return Err(UniformTypeError {
                expected,
                found,
                position: position + 1,
            });
        }
        flattened.extend(argument.into_elements());
    }
    Ok(flattened)
}

/// Adapts a function over a flat sequence into one over raw arguments.
///
/// The returned closure runs [`list_from_args`] on its input and passes the
/// flattened sequence to `function` as its single argument.
///
/// # Examples
///
/// ```rust
/// use funky::arguments::{Argument, arglist};
///
/// let sum = arglist(|values: Vec<i32>| values.iter().sum::<i32>());
///
/// let from_scalars = sum(vec![Argument::scalar(1), Argument::scalar(2)]).unwrap();
/// let from_list = sum(vec![Argument::list(vec![1, 2])]).unwrap();
/// assert_eq!(from_scalars, 3);
/// assert_eq!(from_list, 3);
/// ```
pub fn arglist<T, R, F>(function: F) -> impl Fn(Vec<Argument<T>>) -> Result<R, UniformTypeError>
where
    F: Fn(Vec<T>) -> R,
{
    move |args| Ok(function(list_from_args(args)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_scalar_becomes_singleton() {
        assert_eq!(list_from_args(vec![Argument::scalar(7)]).unwrap(), vec![7]);
    }

    #[test]
    fn set_flattens_in_set_order() {
        let elements: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
        let flat = list_from_args(vec![Argument::set(elements)]).unwrap();
        assert_eq!(flat, vec![1, 2, 3]);
    }

    #[test]
    fn container_kinds_do_not_mix() {
        let error = list_from_args(vec![
            Argument::list(vec![1]),
            Argument::tuple(vec![2]),
        ])
        .unwrap_err();
        assert_eq!(error.expected, ArgumentKind::List);
        assert_eq!(error.found, ArgumentKind::Tuple);
    }

    #[test]
    fn error_reports_first_offending_position() {
        let error = list_from_args(vec![
            Argument::scalar(1),
            Argument::scalar(2),
            Argument::list(vec![3]),
        ])
        .unwrap_err();
        assert_eq!(error.position, 2);
    }

    #[test]
    fn display_names_both_kinds() {
        let error = UniformTypeError {
            expected: ArgumentKind::List,
            found: ArgumentKind::Scalar,
            position: 1,
        };
        assert_eq!(
            error.to_string(),
            "expected uniform list arguments, found scalar at position 1"
        );
    }
}
