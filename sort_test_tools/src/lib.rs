//! Shared test harness: input patterns plus a generic suite that any slice sort can be checked
//! against with [`instantiate_sort_tests!`].

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;

// Used by the test instantiation macros.
#[doc(hidden)]
pub use paste;
