//! Selection sort, ascending, descending and bidirectional.

use crate::observe::{Event, NoObserver, Observer};
use crate::primitives::{gt, lt};

/// Sorts the slice in ascending order.
///
/// This sort is unstable and *O*(*n*^2) in every case: the number of comparisons doesn't depend
/// on the input order. It performs at most *n* - 1 swaps and doesn't allocate.
///
/// # Current implementation
///
/// For every position from the left, the minimum of the unsorted suffix is found and swapped into
/// that position, unless it already sits there. The long-distance swap is what breaks stability.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: PartialOrd,
{
    selection_sort(v, &mut lt, &mut NoObserver);
}

/// Sorts the slice in descending order.
#[inline]
pub fn sort_descending<T>(v: &mut [T])
where
    T: PartialOrd,
{
    selection_sort(v, &mut gt, &mut NoObserver);
}

/// Same as [`sort`], reporting [`Event::Select`] for every settled position.
pub fn sort_observed<T, O>(v: &mut [T], observer: &mut O)
where
    T: PartialOrd,
    O: Observer<T>,
{
    selection_sort(v, &mut lt, observer);
}

/// Sorts the slice in ascending order, settling both ends in every pass.
///
/// Each scan of the unsorted middle finds the minimum and the maximum at once, which halves the
/// number of passes. Still *O*(*n*^2) comparisons, unstable.
pub fn sort_bidirectional<T>(v: &mut [T])
where
    T: PartialOrd,
{
    if v.len() < 2 {
        return;
    }

    let mut left = 0;
    let mut right = v.len() - 1;

    while left < right {
        let mut min = left;
        let mut max = left;

        for i in left..=right {
            if v[i] < v[min] {
                min = i;
            }
            if v[i] > v[max] {
                max = i;
            }
        }

        if min != left {
            v.swap(left, min);
            // The maximum was just moved to where the minimum used to be.
            if max == left {
                max = min;
            }
        }

        if max != right {
            v.swap(right, max);
        }

        left += 1;
        right -= 1;
    }
}

fn selection_sort<T, F, O>(v: &mut [T], is_less: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let mut min = i;
        for j in i + 1..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        if min != i {
            v.swap(i, min);
        }

        observer.observe(
            Event::Select {
                position: i,
                from: min,
            },
            v,
        );
    }
}
