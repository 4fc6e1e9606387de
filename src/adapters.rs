//! Ready-made [`Sortable`] implementations for sequences that are not simply a slice of `Ord`
//! elements.

use crate::error::{Error, Result};
use crate::Sortable;

/// A slice ordered by a caller supplied `is_less` closure.
///
/// ```
/// use ixsort::SortBy;
///
/// let mut words = ["pear", "fig", "banana"];
/// ixsort::sort(&mut SortBy::new(&mut words, |a: &&str, b: &&str| a.len() < b.len()));
/// assert_eq!(words, ["fig", "pear", "banana"]);
/// ```
pub struct SortBy<'a, T, F> {
    v: &'a mut [T],
    is_less: F,
}

impl<'a, T, F> SortBy<'a, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    pub fn new(v: &'a mut [T], is_less: F) -> Self {
        Self { v, is_less }
    }
}

impl<T, F> Sortable for SortBy<'_, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    #[inline]
    fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    fn is_less(&mut self, i: usize, j: usize) -> bool {
        (self.is_less)(&self.v[i], &self.v[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.v.swap(i, j);
    }
}

/// Reverses the ordering of the wrapped sequence, sorting it in non-increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reverse<S>(pub S);

impl<S: Sortable> Sortable for Reverse<S> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn is_less(&mut self, i: usize, j: usize) -> bool {
        self.0.is_less(j, i)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }
}

/// Two parallel slices ordered by `keys`. Every exchange is applied to both, so `values[i]`
/// stays attached to `keys[i]`.
///
/// ```
/// let mut ids = [30, 10, 20];
/// let mut names = ["c", "a", "b"];
/// ixsort::sort(&mut ixsort::Zip::new(&mut ids, &mut names).unwrap());
/// assert_eq!(names, ["a", "b", "c"]);
/// ```
pub struct Zip<'a, K, V> {
    keys: &'a mut [K],
    values: &'a mut [V],
}

impl<'a, K: Ord, V> Zip<'a, K, V> {
    /// Pairs `keys` with `values`, failing with [`Error::LengthMismatch`] if their lengths
    /// differ.
    pub fn new(keys: &'a mut [K], values: &'a mut [V]) -> Result<Self> {
        if keys.len() != values.len() {
            return Err(Error::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        Ok(Self { keys, values })
    }
}

impl<K: Ord, V> Sortable for Zip<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    fn is_less(&mut self, i: usize, j: usize) -> bool {
        self.keys[i] < self.keys[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.keys.swap(i, j);
        self.values.swap(i, j);
    }
}

/// Counts the comparisons and exchanges issued to the wrapped sequence.
///
/// ```
/// let mut counted = ixsort::Counted::new(vec![2, 1]);
/// ixsort::sort(&mut counted);
/// assert_eq!((counted.comparisons(), counted.swaps()), (1, 1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Counted<S> {
    inner: S,
    comparisons: u64,
    swaps: u64,
}

impl<S> Counted<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            comparisons: 0,
            swaps: 0,
        }
    }

    /// Number of `is_less` calls so far.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Number of `swap` calls so far.
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Comparisons plus exchanges.
    pub fn operations(&self) -> u64 {
        self.comparisons + self.swaps
    }

    pub fn reset(&mut self) {
        self.comparisons = 0;
        self.swaps = 0;
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sortable> Sortable for Counted<S> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn is_less(&mut self, i: usize, j: usize) -> bool {
        self.comparisons += 1;
        self.inner.is_less(i, j)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.swaps += 1;
        self.inner.swap(i, j);
    }
}
