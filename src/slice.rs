//! Slice entry points mirroring `slice::sort_unstable` and friends.

use core::cmp::Ordering;

use crate::adapters::SortBy;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n* \* log(*n*)) worst-case.
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// ixsort::slice::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    crate::sort(v);
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n* \* log(*n*)) worst-case.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but every element is
/// still present exactly once when the call returns.
///
/// ```
/// let mut floats = [5f64, 4.0, 1.0, 3.0, 2.0];
/// ixsort::slice::sort_by(&mut floats, |a, b| a.partial_cmp(b).unwrap());
/// assert_eq!(floats, [1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    crate::sort(&mut SortBy::new(v, |a: &T, b: &T| {
        compare(a, b) == Ordering::Less
    }));
}

/// Sorts the slice with a key extraction function, but might not preserve the order of equal
/// elements.
///
/// The key function is called twice per comparison.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    crate::sort(&mut SortBy::new(v, |a: &T, b: &T| f(a).lt(&f(b))));
}
