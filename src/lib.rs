//! Introspective in-place sort over index-addressable sequences.
//!
//! The engine never looks at elements directly. Anything that can report its length, tell
//! whether the element at one index sorts before the element at another, and exchange two
//! indices implements [`Sortable`] and can be sorted with [`sort`].
//!
//! ```
//! let mut v = vec![5, 3, 8, 1, 9, 2];
//! ixsort::sort(&mut v);
//! assert_eq!(v, [1, 2, 3, 5, 8, 9]);
//! ```
//!
//! # Current implementation
//!
//! Quicksort with a depth budget of `2 * ceil(log2(n + 1))` partitioning levels. Ranges of up to
//! 12 elements get a single gap-6 shell pass followed by insertion sort, and any range that is
//! still large once the budget runs out is finished with heapsort. This gives *O*(*n* \*
//! log(*n*)) comparisons and exchanges in the worst case, independent of pivot quality.
//!
//! The sort is unstable and allocates nothing. Elements are only ever moved through
//! [`Sortable::swap`].

use std::collections::VecDeque;

mod adapters;
mod error;
mod heapsort;
mod pivot;
mod quicksort;
pub mod slice;
mod smallsort;

pub use adapters::{Counted, Reverse, SortBy, Zip};
pub use error::{Error, Result};
pub use heapsort::heapsort;
pub use quicksort::{partition, quicksort};
pub use smallsort::insertion_sort;

/// An index-addressable sequence the engine can reorder.
///
/// `is_less` must implement a strict weak ordering over the elements behind the indices for the
/// result to be sorted. If it does not, the resulting order is unspecified, but the call still
/// terminates, every element is retained and no index outside `0..len()` is ever passed to
/// `is_less` or `swap`.
pub trait Sortable {
    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the element at `i` must sort strictly before the element at `j`.
    fn is_less(&mut self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

impl<T: Ord> Sortable for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn is_less(&mut self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

impl<T: Ord> Sortable for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn is_less(&mut self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}

impl<T: Ord> Sortable for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn is_less(&mut self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j);
    }
}

impl<S: Sortable + ?Sized> Sortable for &mut S {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn is_less(&mut self, i: usize, j: usize) -> bool {
        (**self).is_less(i, j)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j);
    }
}

/// Sorts `data` in place, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
/// allocate), and *O*(*n* \* log(*n*)) worst-case.
///
/// ```
/// use std::collections::VecDeque;
///
/// let mut d: VecDeque<i32> = [3, -1, 2].into_iter().collect();
/// ixsort::sort(&mut d);
/// assert_eq!(d, [-1, 2, 3]);
/// ```
pub fn sort<S: Sortable + ?Sized>(data: &mut S) {
    let len = data.len();
    quicksort::recurse(data, 0, len, max_depth(len));
}

/// Returns `true` if no element of `data` sorts strictly before its left neighbour.
pub fn is_sorted<S: Sortable + ?Sized>(data: &mut S) -> bool {
    (1..data.len()).rev().all(|i| !data.is_less(i, i - 1))
}

/// The depth budget for a sequence of `len` elements, two levels per bit of `len`.
#[inline]
pub fn max_depth(len: usize) -> u32 {
    2 * (usize::BITS - len.leading_zeros())
}
