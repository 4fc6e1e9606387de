//! Provides a set of patterns useful for testing and benchmarking sorting algorithms.
//! Currently limited to i32 values.

use std::env;
use std::ops::Range;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    // :.:.:.::

    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seeded_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    // Simulate pre-existing sorted slice, where len - sorted_percent are the new unsorted values
    // and part of the overall distribution.
    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_size = len / saw_count.max(1);

    for chunk in vals.chunks_mut(chunk_size.max(1)) {
        chunk.sort_unstable();
    }

    vals
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_size = len / saw_count.max(1);

    for chunk in vals.chunks_mut(chunk_size.max(1)) {
        chunk.sort_unstable_by(|a, b| b.cmp(a));
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort_unstable();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_unstable_by(|a, b| b.cmp(a));

    vals
}

/// Musser's median-of-3 killer. Drives a quicksort that picks the median of the first, middle
/// and last element into quadratic behavior.
pub fn median3_killer(len: usize) -> Vec<i32> {
    let k = len / 2;
    let mut vals = vec![0; len];

    for i in 1..=k {
        if i % 2 == 1 {
            vals[i - 1] = i as i32;
            vals[i] = (k + i) as i32;
        }
        vals[k + i - 1] = (2 * i) as i32;
    }

    if len % 2 == 1 {
        vals[len - 1] = len as i32;
    }

    vals
}

/// The seed every pattern is generated from. Random once per process, unless the
/// `OVERRIDE_SEED` environment variable is set.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => seed
            .parse()
            .expect("OVERRIDE_SEED must be an unsigned 64-bit integer"),
        Err(_) => thread_rng().gen(),
    })
}

// --- Private ---

fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
