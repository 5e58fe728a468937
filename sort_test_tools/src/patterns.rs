//! Input patterns for tests and benchmarks.
//!
//! All random patterns draw from a generator seeded with [`random_init_seed`], so a failing run
//! can be reproduced by setting `OVERRIDE_SEED` to the printed seed.

use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| thread_rng().gen());

    eprintln!("Seed: {seed}");
    seed
});

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Uniformly distributed over the whole `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Uniformly distributed over `range`. A narrow range gives many duplicates.
pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Zipf distributed over `1..=len`, a few values are very frequent.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Uniformly distributed over `[0, 1)`.
pub fn random_unit_f64(len: usize) -> Vec<f64> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen()).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Ascending runs of `len / saw_count` elements each.
pub fn saw(len: usize, saw_count: usize) -> Vec<i32> {
    let run = (len / saw_count.max(1)).max(1);
    (0..len).map(|i| (i % run) as i32).collect()
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let half = len / 2;
    (0..half as i32)
        .chain((0..(len - half) as i32).rev())
        .collect()
}
