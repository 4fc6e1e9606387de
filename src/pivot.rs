use crate::Sortable;

// Use a pseudomedian of 9 instead of a median of 3 at or above this length.
const PSEUDO_MEDIAN_THRESHOLD: usize = 64;

/// Moves a pivot candidate for `[a, b)` to index `a`. Uses the median of the first, middle and
/// last element, or the compact pseudomedian of 9 for longer ranges.
///
/// `b - a` must be larger than the small-sort threshold.
pub(crate) fn choose_pivot<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize) {
    let len = b - a;
    let mid = a + len / 2;
    let last = b - 1;

    let pivot = if len < PSEUDO_MEDIAN_THRESHOLD {
        median3(data, a, mid, last)
    } else {
        let n8 = len / 8;

        let m1 = median3(data, a, a + n8, a + n8 * 2);
        let m2 = median3(data, mid - n8, mid, mid + n8);
        let m3 = median3(data, last - n8 * 2, last - n8, last);

        median3(data, m1, m2, m3)
    };

    if pivot != a {
        data.swap(a, pivot);
    }
}

/// Returns the index of the median of the elements at `a`, `b` and `c`.
#[inline]
fn median3<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize, c: usize) -> usize {
    let x = data.is_less(b, a);
    let y = data.is_less(c, a);
    let z = data.is_less(c, b);

    // If x == y, a is either the smallest or the largest and the median is one of b, c. Which
    // one is decided by whether c < b agrees with y. Otherwise a is the median.
    let index = (x == y) as usize + (y != z) as usize;
    [a, b, c][index]
}
