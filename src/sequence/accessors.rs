//! Positional and value-relative slice accessors.

/// Returns the first element of a slice, or `None` when the slice is empty.
///
/// # Examples
///
/// ```
/// use funky::sequence::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
///
/// // `Option` is the default channel
/// assert_eq!(first::<i32>(&[]).copied().unwrap_or(0), 0);
/// ```
#[inline]
pub fn first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// Returns everything after the first element.
///
/// An empty or single-element slice yields an empty slice.
///
/// # Examples
///
/// ```
/// use funky::sequence::rest;
///
/// assert_eq!(rest(&[1, 2, 3]), &[2, 3]);
/// assert_eq!(rest(&[1]), &[] as &[i32]);
/// assert_eq!(rest::<i32>(&[]), &[]);
/// ```
#[inline]
pub fn rest<T>(items: &[T]) -> &[T] {
    items.get(1..).unwrap_or(&[])
}

/// Returns the last element of a slice, or `None` when the slice is empty.
///
/// # Examples
///
/// ```
/// use funky::sequence::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// assert_eq!(last::<i32>(&[]), None);
/// ```
#[inline]
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Looks up an element by index, with negative indices counting from the end.
///
/// `get(items, -1)` is the last element, `get(items, -2)` the one before it,
/// and so on. Any index outside the slice in either direction returns `None`.
///
/// # Examples
///
/// ```
/// use funky::sequence::get;
///
/// let items = ["a", "b", "c"];
/// assert_eq!(get(&items, 0), Some(&"a"));
/// assert_eq!(get(&items, -1), Some(&"c"));
/// assert_eq!(get(&items, 3), None);
/// assert_eq!(get(&items, -4), None);
/// ```
#[inline]
pub fn get<T>(items: &[T], index: isize) -> Option<&T> {
    let resolved = if index < 0 {
        items.len().checked_sub(index.unsigned_abs())?
    } else {
        index.unsigned_abs()
    };
    items.get(resolved)
}

/// Returns the element `step` positions after the first occurrence of `value`.
///
/// Returns `None` when `value` is absent or the target position is past the
/// end of the slice. The lookup reuses [`get`], so a target that lands before
/// the first element counts back from the end.
///
/// # Examples
///
/// ```
/// use funky::sequence::next_after;
///
/// let items = [10, 20, 30, 40];
/// assert_eq!(next_after(&items, &20, 1), Some(&30));
/// assert_eq!(next_after(&items, &20, 2), Some(&40));
/// assert_eq!(next_after(&items, &40, 1), None);
/// assert_eq!(next_after(&items, &99, 1), None);
/// ```
pub fn next_after<'a, T: PartialEq>(items: &'a [T], value: &T, step: isize) -> Option<&'a T> {
    let position = items.iter().position(|item| item == value)?;
    let target = isize::try_from(position).ok()?.checked_add(step)?;
    get(items, target)
}

/// Returns the element `step` positions before the first occurrence of `value`.
///
/// Implemented by negating `step` and reusing the forward search of
/// [`next_after`]. A target before the first element therefore counts back
/// from the end, like [`get`] with a negative index.
///
/// # Examples
///
/// ```
/// use funky::sequence::prev_before;
///
/// let items = [10, 20, 30, 40];
/// assert_eq!(prev_before(&items, &30, 1), Some(&20));
/// assert_eq!(prev_before(&items, &30, 2), Some(&10));
/// assert_eq!(prev_before(&items, &99, 1), None);
/// ```
pub fn prev_before<'a, T: PartialEq>(items: &'a [T], value: &T, step: isize) -> Option<&'a T> {
    next_after(items, value, step.checked_neg()?)
}
