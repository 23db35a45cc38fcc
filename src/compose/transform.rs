//! Result-transforming combinators.

/// Applies a transformation to a function's return value.
///
/// `transform(t, f)` yields a function computing `t(f(input))`. Pure
/// composition: no caching, no side effects beyond whatever `f` and `t`
/// themselves perform.
///
/// # Examples
///
/// ```
/// use funky::compose::transform;
///
/// fn length(text: &str) -> usize { text.len() }
///
/// let is_long = transform(|n| n > 5, length);
/// assert!(is_long("functional"));
/// assert!(!is_long("fun"));
/// ```
#[inline]
pub fn transform<A, B, C, T, F>(transformer: T, function: F) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    T: Fn(B) -> C,
{
    move |input| transformer(function(input))
}

/// Logically negates a predicate's result.
///
/// `negate` is [`transform`] specialized with boolean negation.
///
/// # Examples
///
/// ```
/// use funky::compose::negate;
///
/// fn is_empty(text: &str) -> bool { text.is_empty() }
///
/// let is_non_empty = negate(is_empty);
/// assert!(is_non_empty("x"));
/// assert!(!is_non_empty(""));
/// ```
#[inline]
pub fn negate<A, F>(function: F) -> impl Fn(A) -> bool
where
    F: Fn(A) -> bool,
{
    transform(|result: bool| !result, function)
}
