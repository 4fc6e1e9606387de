use core::ops::Range;

use crate::quicksort::check_range;
use crate::Sortable;

/// Gap of the single shell pass that precedes insertion sort.
const SHELL_GAP: usize = 6;

/// Sorts a range of at most `SMALL_SORT_THRESHOLD` elements.
pub(crate) fn small_sort<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize) {
    if b - a < 2 {
        return;
    }

    for i in (a + SHELL_GAP)..b {
        if data.is_less(i, i - SHELL_GAP) {
            data.swap(i, i - SHELL_GAP);
        }
    }

    insertion_sort_range(data, a, b);
}

/// Sorts `range` of `data` with adjacent-exchange insertion sort.
///
/// *O*(*n*^2) comparisons and exchanges, only meant for short ranges.
///
/// # Panics
///
/// Panics if `range` is out of bounds for `data.len()`.
pub fn insertion_sort<S: Sortable + ?Sized>(data: &mut S, range: Range<usize>) {
    check_range(data, &range);
    insertion_sort_range(data, range.start, range.end);
}

fn insertion_sort_range<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize) {
    for i in (a + 1)..b {
        // [a, i) is sorted, move the element at i left until it is in place.
        let mut j = i;
        while j > a && data.is_less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}
