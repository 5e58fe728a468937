//! Quicksort with selectable partition scheme.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::observe::{Event, NoObserver, Observer};
use crate::partition;
use crate::primitives::lt;

/// Partition scheme used by quicksort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Lomuto partition around the last element.
    Lomuto,
    /// Hoare partition around the first element, fewer swaps than Lomuto.
    Hoare,
    /// Dutch national flag partition into less, equal and greater. Equal elements are settled in
    /// one go, so heavily duplicated input doesn't degrade to *O*(*n*^2).
    ThreeWay,
    /// Lomuto partition around a uniformly random element. The generator is seeded from OS
    /// entropy on every call, see [`sort_randomized`] to supply one.
    Randomized,
}

impl Scheme {
    pub const ALL: [Scheme; 4] = [
        Scheme::Lomuto,
        Scheme::Hoare,
        Scheme::ThreeWay,
        Scheme::Randomized,
    ];
}

/// Sorts the slice.
///
/// This sort is unstable and *O*(*n* \* log(*n*)) on average. Lomuto and Hoare are *O*(*n*^2) on
/// adversarial input such as already sorted slices, randomization makes that unlikely but not
/// impossible.
///
/// # Current implementation
///
/// Each partition step splits the range into the elements before and after the pivot's final
/// position (or the equal zone, for [`Scheme::ThreeWay`]). The function recurses into the shorter
/// side and loops on the longer one, which bounds the recursion depth to `log2(v.len())` even when
/// the partitions are maximally imbalanced.
#[inline]
pub fn sort<T>(v: &mut [T], scheme: Scheme)
where
    T: PartialOrd + Copy,
{
    let mut rng = None;
    let mut part = Partitioner::new(scheme, &mut rng);
    let len = v.len();
    recurse(v, 0, len, &mut part, &mut lt, &mut NoObserver);
}

/// Same as [`sort`], reporting [`Event::Partition`] after every partition step.
pub fn sort_observed<T, O>(v: &mut [T], scheme: Scheme, observer: &mut O)
where
    T: PartialOrd + Copy,
    O: Observer<T>,
{
    let mut rng = None;
    let mut part = Partitioner::new(scheme, &mut rng);
    let len = v.len();
    recurse(v, 0, len, &mut part, &mut lt, observer);
}

/// Sorts the slice with randomized pivots drawn from `rng`.
///
/// With a seeded generator the result, and every intermediate state, is a pure function of the
/// input and the seed.
pub fn sort_randomized<T, R>(v: &mut [T], rng: &mut R)
where
    T: PartialOrd + Copy,
    R: Rng,
{
    let mut part = Partitioner::Random(rng);
    let len = v.len();
    recurse(v, 0, len, &mut part, &mut lt, &mut NoObserver);
}

/// Sorts the slice without recursion.
///
/// Same partition steps as [`sort`], but pending ranges are kept on an explicit stack. The longer
/// side is pushed first so the shorter one is processed next, which keeps the stack at
/// `log2(v.len())` entries. Meant for untrusted or very large inputs.
pub fn sort_iterative<T>(v: &mut [T], scheme: Scheme)
where
    T: PartialOrd + Copy,
{
    let mut rng = None;
    let mut part = Partitioner::new(scheme, &mut rng);

    let mut stack = vec![(0, v.len())];
    while let Some((lo, hi)) = stack.pop() {
        if hi - lo < 2 {
            continue;
        }

        let (left_end, right_start) = part.split(&mut v[lo..hi], &mut lt);
        let left = (lo, lo + left_end);
        let right = (lo + right_start, hi);

        if left.1 - left.0 < right.1 - right.0 {
            stack.push(right);
            stack.push(left);
        } else {
            stack.push(left);
            stack.push(right);
        }
    }
}

/// A partition scheme together with the state it needs.
enum Partitioner<'r> {
    Lomuto,
    Hoare,
    ThreeWay,
    Random(&'r mut dyn RngCore),
}

impl<'r> Partitioner<'r> {
    /// `rng` is only initialized, from OS entropy, if the scheme needs it.
    fn new(scheme: Scheme, rng: &'r mut Option<StdRng>) -> Self {
        match scheme {
            Scheme::Lomuto => Partitioner::Lomuto,
            Scheme::Hoare => Partitioner::Hoare,
            Scheme::ThreeWay => Partitioner::ThreeWay,
            Scheme::Randomized => Partitioner::Random(rng.insert(StdRng::from_entropy())),
        }
    }

    /// Partitions `v`, `v.len() >= 2`. Returns `(left_end, right_start)`: `v[..left_end]` and
    /// `v[right_start..]` still need sorting, everything in between is in its final position.
    fn split<T, F>(&mut self, v: &mut [T], is_less: &mut F) -> (usize, usize)
    where
        T: Copy,
        F: FnMut(&T, &T) -> bool,
    {
        match self {
            Partitioner::Lomuto => {
                let p = partition::lomuto(v, is_less);
                (p, p + 1)
            }
            Partitioner::Hoare => {
                let j = partition::hoare(v, is_less);
                (j + 1, j + 1)
            }
            Partitioner::ThreeWay => partition::three_way(v, is_less),
            Partitioner::Random(rng) => {
                partition::randomize_pivot(v, &mut **rng);
                let p = partition::lomuto(v, is_less);
                (p, p + 1)
            }
        }
    }
}

fn recurse<T, F, O>(
    v: &mut [T],
    mut lo: usize,
    mut hi: usize,
    part: &mut Partitioner<'_>,
    is_less: &mut F,
    observer: &mut O,
) where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    while hi - lo >= 2 {
        let (left_end, right_start) = part.split(&mut v[lo..hi], is_less);
        let (left_end, right_start) = (lo + left_end, lo + right_start);

        observer.observe(
            Event::Partition {
                range: lo..hi,
                pivot: left_end..right_start,
            },
            v,
        );

        // Recurse into the shorter side, continue with the longer one.
        if left_end - lo < hi - right_start {
            recurse(v, lo, left_end, part, is_less, observer);
            lo = right_start;
        } else {
            recurse(v, right_start, hi, part, is_less, observer);
            hi = left_end;
        }
    }
}
