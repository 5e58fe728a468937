//! Checks shared by every sort implementation, expanded per implementation with
//! [`instantiate_sort_tests!`](crate::instantiate_sort_tests).

use std::fmt::Debug;

use crate::patterns;
use crate::{is_stable_order, tag, Sort};

#[cfg(not(feature = "large_test_sizes"))]
pub const TEST_SIZES: &[usize] = &[
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 15, 16, 17, 20, 24, 30, 31, 32, 33, 50, 64, 100, 128,
    200, 500,
];

#[cfg(feature = "large_test_sizes")]
pub const TEST_SIZES: &[usize] = &[
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 15, 16, 17, 20, 24, 30, 31, 32, 33, 50, 64, 100, 128,
    200, 500, 1_000, 1_024, 2_048,
];

/// Sorts `v` with `S` and compares against the standard library.
fn sort_comp<T, S>(v: &mut [T])
where
    T: PartialOrd + Copy + Debug,
    S: Sort,
{
    let seed = patterns::random_init_seed();

    let mut expected = v.to_vec();
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

    S::sort(v);

    assert!(
        v == expected.as_slice(),
        "{} failed, len: {}, seed: {seed}",
        S::name(),
        v.len()
    );
}

fn test_pattern<T, S>(pattern: impl Fn(usize) -> Vec<i32>)
where
    T: PartialOrd + Copy + Debug + From<i32>,
    S: Sort,
{
    for &len in TEST_SIZES {
        let mut v: Vec<T> = pattern(len).into_iter().map(T::from).collect();
        sort_comp::<T, S>(&mut v);
    }
}

pub fn basic<S: Sort>() {
    let mut empty: [i32; 0] = [];
    S::sort(&mut empty);

    let mut single = [7];
    S::sort(&mut single);
    assert_eq!(single, [7]);

    let mut two = [2, 1];
    S::sort(&mut two);
    assert_eq!(two, [1, 2]);

    let mut v = [64, 34, 25, 12, 22, 11, 90];
    S::sort(&mut v);
    assert_eq!(v, [11, 12, 22, 25, 34, 64, 90]);

    let mut v = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
    S::sort(&mut v);
    assert_eq!(v, [1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9]);

    let mut v = [5, -3, 0, -3, 12, -40];
    S::sort(&mut v);
    assert_eq!(v, [-40, -3, -3, 0, 5, 12]);
}

pub fn random<T, S>()
where
    T: PartialOrd + Copy + Debug + From<i32>,
    S: Sort,
{
    test_pattern::<T, S>(patterns::random);
}

pub fn random_narrow<S: Sort>() {
    test_pattern::<i32, S>(|len| patterns::random_uniform(len, 0..8));
}

pub fn random_zipf<S: Sort>() {
    test_pattern::<i32, S>(|len| patterns::random_zipf(len, 1.0));
}

pub fn random_unit_f64<S: Sort>() {
    for &len in TEST_SIZES {
        let mut v = patterns::random_unit_f64(len);
        sort_comp::<f64, S>(&mut v);
    }
}

pub fn all_equal<S: Sort>() {
    test_pattern::<i32, S>(patterns::all_equal);
}

pub fn ascending<S: Sort>() {
    test_pattern::<i32, S>(patterns::ascending);
}

pub fn descending<S: Sort>() {
    test_pattern::<i32, S>(patterns::descending);
}

pub fn saw<S: Sort>() {
    test_pattern::<i32, S>(|len| patterns::saw(len, 5));
}

pub fn pipe_organ<S: Sort>() {
    test_pattern::<i32, S>(patterns::pipe_organ);
}

pub fn int_edge<S: Sort>() {
    let mut v = [i32::MAX, 0, i32::MIN, -1, i32::MAX, 1, i32::MIN];
    S::sort(&mut v);
    assert_eq!(v, [i32::MIN, i32::MIN, -1, 0, 1, i32::MAX, i32::MAX]);

    let mut v = [u64::MAX, 0, 1 << 63, 7];
    S::sort(&mut v);
    assert_eq!(v, [0, 7, 1 << 63, u64::MAX]);
}

pub fn float_edge<S: Sort>() {
    let mut v = [0.5, -0.0, f64::INFINITY, -1.25, f64::NEG_INFINITY, 0.0, 1e-300];
    S::sort(&mut v);
    assert_eq!(
        v,
        [f64::NEG_INFINITY, -1.25, -0.0, 0.0, 1e-300, 0.5, f64::INFINITY]
    );
}

/// Sorting a sorted slice changes nothing.
pub fn idempotent<S: Sort>() {
    for &len in TEST_SIZES {
        let mut v = patterns::random_uniform(len, -100..100);
        S::sort(&mut v);
        let once = v.clone();
        S::sort(&mut v);
        assert_eq!(v, once, "{} len: {len}", S::name());
    }
}

pub fn stability<S: Sort>() {
    if !S::is_stable() {
        return;
    }

    for &len in TEST_SIZES {
        for keys in [
            patterns::random_uniform(len, 0..4),
            patterns::random_zipf(len, 1.5),
            patterns::all_equal(len),
        ] {
            let mut v = tag(&keys);
            S::sort(&mut v);
            assert!(
                v.windows(2).all(|w| w[0].key <= w[1].key),
                "{} len: {len}",
                S::name()
            );
            assert!(is_stable_order(&v), "{} len: {len}", S::name());
        }
    }
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!(@typed $sort_impl, i32, i64, f64);
        $crate::instantiate_sort_tests!(
            @plain $sort_impl,
            basic,
            random_narrow,
            random_zipf,
            random_unit_f64,
            all_equal,
            ascending,
            descending,
            saw,
            pipe_organ,
            int_edge,
            float_edge,
            idempotent,
            stability
        );
    };
    (@typed $sort_impl:ty, $($t:ident),*) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<random_ $t>]() {
                    $crate::tests::random::<$t, $sort_impl>();
                }
            }
        )*
    };
    (@plain $sort_impl:ty, $($name:ident),*) => {
        $(
            #[test]
            fn $name() {
                $crate::tests::$name::<$sort_impl>();
            }
        )*
    };
}
