//! Truthiness filtering.
//!
//! The [`Truthy`] trait gives each supported type a boolean coercion:
//! numbers are truthy when non-zero, strings and collections when
//! non-empty, `Option` when it holds a truthy value. [`true_only`] and
//! [`first_true`] build on it.

/// Boolean coercion for a value.
///
/// Mirrors the usual dynamic-language truthiness rules: zero, empty, and
/// absent values are falsy; everything else is truthy.
///
/// # Examples
///
/// ```
/// use funky::sequence::Truthy;
///
/// assert!(1.is_truthy());
/// assert!(!0.is_truthy());
/// assert!("x".is_truthy());
/// assert!(!"".is_truthy());
/// assert!(!None::<i32>.is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` when the value coerces to `true`.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_nonzero_int {
    ($($int:ty),+ $(,)?) => {$(
        impl Truthy for $int {
            #[inline]
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        }
    )+};
}

truthy_nonzero_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! truthy_nonzero_float {
    ($($float:ty),+ $(,)?) => {$(
        impl Truthy for $float {
            // NaN is truthy: it is neither zero nor empty
            #[inline]
            fn is_truthy(&self) -> bool {
                *self != 0.0
            }
        }
    )+};
}

truthy_nonzero_float!(f32, f64);

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != '\0'
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    /// `None` is falsy; `Some(value)` defers to `value`.
    #[inline]
    fn is_truthy(&self) -> bool {
        match self {
            Some(value) => value.is_truthy(),
            None => false,
        }
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Filters an iterable down to its truthy elements.
///
/// The returned iterator is lazy and single-pass: elements are inspected
/// only as they are pulled, and the sequence is finite exactly when the
/// input is.
///
/// # Examples
///
/// ```
/// use funky::sequence::true_only;
///
/// let kept: Vec<i32> = true_only([0, 1, 0, 2, 0, 3]).collect();
/// assert_eq!(kept, vec![1, 2, 3]);
///
/// let words: Vec<&str> = true_only(["", "a", "", "b"]).collect();
/// assert_eq!(words, vec!["a", "b"]);
/// ```
#[inline]
pub fn true_only<I>(iterable: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: Truthy,
{
    iterable.into_iter().filter(Truthy::is_truthy)
}

/// Returns the first truthy element of an iterable, or `None`.
///
/// Short-circuits: elements after the first truthy one are never inspected.
///
/// # Examples
///
/// ```
/// use funky::sequence::first_true;
///
/// assert_eq!(first_true([0, 0, 0, 5, 6]), Some(5));
/// assert_eq!(first_true([0, 0, 0]), None);
/// ```
#[inline]
pub fn first_true<I>(iterable: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Truthy,
{
    true_only(iterable).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_truthy() {
        assert!(f64::NAN.is_truthy());
        assert!(!0.0_f64.is_truthy());
    }

    #[test]
    fn option_defers_to_inner_value() {
        assert!(Some(1).is_truthy());
        assert!(!Some(0).is_truthy());
        assert!(!None::<i32>.is_truthy());
    }

    #[test]
    fn collections_are_truthy_when_non_empty() {
        assert!(vec![0].is_truthy());
        assert!(!Vec::<i32>::new().is_truthy());
    }
}
