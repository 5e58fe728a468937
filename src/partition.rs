//! Partition schemes used by quicksort.
//!
//! All functions take a slice of at least one element and only rearrange it, the multiset of
//! elements is unchanged.

use rand::Rng;

/// Lomuto partition around the last element.
///
/// A single forward scan grows the prefix of elements known to be less than the pivot, then the
/// pivot is swapped in right after it. Returns the final position of the pivot. Everything before
/// it is less, everything after it is greater or equal.
pub(crate) fn lomuto<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len > 0);

    let (v_without_pivot, pivot) = v.split_at_mut(len - 1);
    let pivot = &pivot[0];

    let mut lt_count = 0;
    for r in 0..v_without_pivot.len() {
        if is_less(&v_without_pivot[r], pivot) {
            v_without_pivot.swap(lt_count, r);
            lt_count += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(lt_count, len - 1);

    lt_count
}

/// Hoare partition around the first element.
///
/// Two scans converge from both ends and swap misplaced pairs. Returns `j` such that every element
/// of `v[..=j]` is less or equal to every element of `v[j + 1..]`. The pivot itself is not
/// necessarily at `j`. For `v.len() >= 2` the result is always `< v.len() - 1`, so both sides are
/// non-empty and strictly shorter than `v`.
pub(crate) fn hoare<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(!v.is_empty());

    let pivot = v[0];
    let mut i = 0;
    let mut j = v.len() - 1;

    loop {
        // Find the first element not less than the pivot.
        while is_less(&v[i], &pivot) {
            i += 1;
        }

        // Find the last element not greater than the pivot.
        while is_less(&pivot, &v[j]) {
            j -= 1;
        }

        if i >= j {
            return j;
        }

        v.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Three-way (Dutch national flag) partition around the first element.
///
/// Returns `(lt, gt)` such that `v[..lt]` is less than the pivot, `v[lt..gt]` is equal to it and
/// `v[gt..]` is greater. The equal zone always holds at least the pivot.
pub(crate) fn three_way<T, F>(v: &mut [T], is_less: &mut F) -> (usize, usize)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(!v.is_empty());

    let pivot = v[0];
    let mut lt = 0;
    let mut i = 1;
    let mut gt = v.len();

    // v[..lt] < pivot, v[lt..i] == pivot, v[i..gt] unknown, v[gt..] > pivot.
    while i < gt {
        if is_less(&v[i], &pivot) {
            v.swap(lt, i);
            lt += 1;
            i += 1;
        } else if is_less(&pivot, &v[i]) {
            gt -= 1;
            v.swap(i, gt);
        } else {
            i += 1;
        }
    }

    (lt, gt)
}

/// Swaps a uniformly chosen element into the last position, where [`lomuto`] expects the pivot.
pub(crate) fn randomize_pivot<T, R>(v: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    let len = v.len();
    debug_assert!(len > 0);

    let pick = rng.gen_range(0..len);
    v.swap(pick, len - 1);
}
