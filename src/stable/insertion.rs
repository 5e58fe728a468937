//! Insertion sort, linear and binary search variants.

use crate::observe::{Event, NoObserver, Observer};
use crate::primitives::{insert_tail, lt, upper_bound};

/// Sorts the slice.
///
/// This sort is stable and *O*(*n*^2) worst-case, *O*(*n*) on input that is already sorted. It
/// doesn't allocate.
///
/// # Current implementation
///
/// The slice is split into a sorted prefix and the rest. Every new element shifts the greater
/// elements of the prefix one position to the right and drops into the hole that is left.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: PartialOrd + Copy,
{
    insertion_sort(v, &mut lt, &mut NoObserver);
}

/// Same as [`sort`], reporting [`Event::Insert`] for every element that had to move.
pub fn sort_observed<T, O>(v: &mut [T], observer: &mut O)
where
    T: PartialOrd + Copy,
    O: Observer<T>,
{
    insertion_sort(v, &mut lt, observer);
}

/// Sorts the slice, locating each insertion point with binary search.
///
/// This sort is stable. Binary search cuts the comparisons to *O*(*n* \* log(*n*)), but every
/// element still has to be shifted, so it stays *O*(*n*^2) worst-case.
pub fn sort_binary<T>(v: &mut [T])
where
    T: PartialOrd + Copy,
{
    let len = v.len();

    for i in 1..len {
        let x = v[i];
        // Searching for the upper bound places `x` after any equal element, keeping it stable.
        let pos = upper_bound(&v[..i], &x, &mut lt);
        if pos < i {
            v.copy_within(pos..i, pos + 1);
            v[pos] = x;
        }
    }
}

pub(crate) fn insertion_sort<T, F, O>(v: &mut [T], is_less: &mut F, observer: &mut O)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    for i in 1..v.len() {
        let to = insert_tail(v, i, 1, is_less);
        if to != i {
            observer.observe(Event::Insert { from: i, to }, v);
        }
    }
}
