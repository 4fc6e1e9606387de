use core::ops::Range;

use crate::quicksort::check_range;
use crate::Sortable;

/// Sorts `range` of `data` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// This is the fallback [`quicksort`](fn@crate::quicksort) uses once its depth budget is
/// exhausted.
///
/// # Panics
///
/// Panics if `range` is out of bounds for `data.len()`.
pub fn heapsort<S: Sortable + ?Sized>(data: &mut S, range: Range<usize>) {
    check_range(data, &range);
    heapsort_range(data, range.start, range.end);
}

/// Never inline this, it sits in the main loop of the driver and is meant as unlikely
/// algorithmic fallback.
#[inline(never)]
pub(crate) fn heapsort_range<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize) {
    let len = b - a;

    // Build the heap with the greatest element at the root.
    for node in (0..len / 2).rev() {
        sift_down(data, a, node, len);
    }

    // Pop the greatest remaining element into the end of the shrinking heap.
    for end in (1..len).rev() {
        data.swap(a, a + end);
        sift_down(data, a, 0, end);
    }
}

// This binary heap respects the invariant `parent >= child`. Heap positions are relative to
// `offset`, the heap itself covers `[offset, offset + len)`.
fn sift_down<S: Sortable + ?Sized>(data: &mut S, offset: usize, mut node: usize, len: usize) {
    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Choose the greater child.
        if child + 1 < len && data.is_less(offset + child, offset + child + 1) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !data.is_less(offset + node, offset + child) {
            break;
        }

        data.swap(offset + node, offset + child);
        node = child;
    }
}
