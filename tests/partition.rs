use ixsort::{Counted, Sortable};
use proptest::prelude::*;

fn assert_partitioned(v: &[i32], p: usize) {
    for (idx, x) in v.iter().enumerate() {
        if idx < p {
            assert!(*x <= v[p], "{x} left of pivot {} at {p}", v[p]);
        } else if idx > p {
            assert!(*x >= v[p], "{x} right of pivot {} at {p}", v[p]);
        }
    }
}

proptest! {
    #[test]
    fn pivot_lands_in_place(mut v in prop::collection::vec(any::<i32>(), 1..300)) {
        let pivot = v[0];
        let mut expected = v.clone();
        expected.sort_unstable();

        let len = v.len();
        let p = ixsort::partition(&mut v, 0..len);

        prop_assert_eq!(v[p], pivot);
        assert_partitioned(&v, p);

        v.sort_unstable();
        prop_assert_eq!(v, expected);
    }

    #[test]
    fn duplicates_partition(mut v in prop::collection::vec(0..4i32, 1..300)) {
        let len = v.len();
        let p = ixsort::partition(&mut v, 0..len);
        assert_partitioned(&v, p);
    }

    #[test]
    fn sub_range(
        mut v in prop::collection::vec(0..50i32, 2..200),
        split in any::<prop::sample::Index>()
    ) {
        let original = v.clone();
        let start = split.index(v.len() - 1);
        let end = v.len();

        let p = ixsort::partition(&mut v, start..end);

        prop_assert!((start..end).contains(&p));
        prop_assert_eq!(&v[..start], &original[..start]);
        assert_partitioned(&v[start..], p - start);
    }

    #[test]
    fn sort_is_sorted(mut v in prop::collection::vec(any::<i16>(), 0..500)) {
        let mut expected = v.clone();
        expected.sort_unstable();

        ixsort::sort(&mut v);

        prop_assert!(ixsort::is_sorted(&mut v));
        prop_assert_eq!(v, expected);
    }
}

#[test]
fn all_equal_splits_in_the_middle() {
    // Both cursors stop on keys equal to the pivot, so equal keys do not pile up on one side.
    for len in [13, 100, 1_001] {
        let mut v = vec![7; len];
        let p = ixsort::partition(&mut v, 0..len);

        assert!(p.abs_diff(len / 2) <= 1, "pivot at {p} for {len}");
    }
}

#[test]
fn linear_comparisons() {
    for len in [2, 13, 100, 10_000] {
        let mut counted = Counted::new(sort_test_tools::patterns::random(len));
        ixsort::partition(&mut counted, 0..len);

        assert!(counted.comparisons() <= len as u64 + 1);
        assert_eq!(counted.len(), len);
    }
}

#[test]
fn single_element() {
    let mut counted = Counted::new(vec![1]);
    assert_eq!(ixsort::partition(&mut counted, 0..1), 0);
    assert_eq!(counted.operations(), 0);
}

#[test]
#[should_panic(expected = "empty range")]
fn empty_range() {
    let mut v = vec![1, 2, 3];
    ixsort::partition(&mut v, 2..2);
}
