//! Bubble sort with early exit.

use crate::observe::{Event, NoObserver, Observer};
use crate::primitives::lt;

/// Sorts the slice.
///
/// This sort is stable and *O*(*n*^2) worst-case, *O*(*n*) on input that is already sorted. It
/// doesn't allocate.
///
/// # Current implementation
///
/// Every outer pass compares adjacent pairs of the unsorted prefix and swaps them if they are out
/// of order, which moves the maximum of the prefix to its final position at the end. A pass
/// without a single swap proves the prefix sorted and ends the sort.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: PartialOrd,
{
    bubble_sort(v, &mut lt, &mut NoObserver);
}

/// Same as [`sort`], reporting [`Event::Pass`] after every outer pass.
pub fn sort_observed<T, O>(v: &mut [T], observer: &mut O)
where
    T: PartialOrd,
    O: Observer<T>,
{
    bubble_sort(v, &mut lt, observer);
}

fn bubble_sort<T, F, O>(v: &mut [T], is_less: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for round in 0..len - 1 {
        let unsorted_end = len - round;
        let mut swapped = false;

        for j in 1..unsorted_end {
            // Strictly less, equal neighbours never trade places.
            if is_less(&v[j], &v[j - 1]) {
                v.swap(j - 1, j);
                swapped = true;
            }
        }

        observer.observe(Event::Pass { round, swapped }, v);

        if !swapped {
            break;
        }
    }
}
