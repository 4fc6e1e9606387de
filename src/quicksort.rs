use core::ops::Range;

use crate::heapsort;
use crate::pivot::choose_pivot;
use crate::smallsort;
use crate::Sortable;

/// Ranges of at most this many elements are finished by the small-sort.
pub(crate) const SMALL_SORT_THRESHOLD: usize = 12;

/// Sorts `range` of `data` with the depth-budgeted quicksort.
///
/// `depth` is decremented for every partitioning level. A range longer than the small-sort
/// threshold that drives it to zero is sorted with [`heapsort`](fn@crate::heapsort) instead, so
/// passing `0` or `1` heapsorts any range of more than 12 elements right away.
/// [`sort`](fn@crate::sort) starts with [`max_depth`](crate::max_depth) of the sequence length.
///
/// # Panics
///
/// Panics if `range` is out of bounds for `data.len()`.
pub fn quicksort<S: Sortable + ?Sized>(data: &mut S, range: Range<usize>, depth: u32) {
    check_range(data, &range);
    recurse(data, range.start, range.end, depth);
}

/// Sorts `[a, b)` recursively.
///
/// The left side of each partition is handled by a recursive call, the right side by the loop.
/// Every level of nesting consumes budget, so the call depth never exceeds `depth`.
pub(crate) fn recurse<S: Sortable + ?Sized>(
    data: &mut S,
    mut a: usize,
    b: usize,
    mut depth: u32,
) {
    loop {
        if b - a <= SMALL_SORT_THRESHOLD {
            smallsort::small_sort(data, a, b);
            return;
        }

        // If too many bad pivot choices were made, simply fall back to heapsort in order to
        // guarantee `O(N x log(N))` worst-case.
        depth = depth.saturating_sub(1);
        if depth == 0 {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                start = a,
                end = b,
                "depth budget exhausted, falling back to heapsort"
            );

            heapsort::heapsort_range(data, a, b);
            return;
        }

        choose_pivot(data, a, b);
        let mid = partition_range(data, a, b);

        recurse(data, a, mid, depth);
        a = mid + 1;
    }
}

/// Partitions `range` of `data` around the element at `range.start`.
///
/// Returns the final index `p` of the pivot. When the call returns, no element left of `p` sorts
/// after the pivot and no element right of `p` sorts before it:
///
/// ```text
/// for idx in range.start..p: !data.is_less(p, idx)
/// for idx in p + 1..range.end: !data.is_less(idx, p)
/// ```
///
/// If `is_less` does not implement a strict weak ordering the returned index and the order are
/// unspecified, but the result is still a permutation of the input.
///
/// # Panics
///
/// Panics if `range` is empty or out of bounds for `data.len()`.
pub fn partition<S: Sortable + ?Sized>(data: &mut S, range: Range<usize>) -> usize {
    check_range(data, &range);
    assert!(!range.is_empty(), "cannot partition the empty range {range:?}");
    partition_range(data, range.start, range.end)
}

/// Hoare style two-cursor scan with the pivot parked at `a`.
///
/// Both cursors stop on elements equal to the pivot, so a run of equal keys is swapped pairwise
/// and ends up split across both sides instead of piling up on one of them.
pub(crate) fn partition_range<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize) -> usize {
    // Invariant: [a + 1, i) holds no element greater than the pivot, (j, b) no element smaller.
    // Both loops only run while `i <= j`, which keeps `i <= j + 1` and `j >= a`.
    let mut i = a + 1;
    let mut j = b - 1;

    loop {
        // Find the first element not less than the pivot.
        while i <= j && data.is_less(i, a) {
            i += 1;
        }

        // Find the last element not greater than the pivot.
        while i <= j && data.is_less(a, j) {
            j -= 1;
        }

        if i >= j {
            break;
        }

        data.swap(i, j);
        i += 1;
        j -= 1;
    }

    // `j` is either `i` with an element equal to the pivot, or the last slot of the left side.
    if j != a {
        data.swap(a, j);
    }

    j
}

pub(crate) fn check_range<S: Sortable + ?Sized>(data: &S, range: &Range<usize>) {
    let len = data.len();
    assert!(
        range.start <= range.end && range.end <= len,
        "range {range:?} out of bounds for sequence of length {len}"
    );
}
