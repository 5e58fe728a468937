//! Merge sort: top-down into fresh vectors, top-down over one shared scratch buffer, and the
//! iterative bottom-up variant.
//!
//! All three are stable and *O*(*n* \* log(*n*)) in every case, with *O*(*n*) auxiliary memory.

use std::cmp;

use crate::merge::{merge_into_vec, merge_with_scratch};
use crate::observe::{Event, NoObserver, Observer};
use crate::primitives::lt;

/// Returns a sorted copy of `v`, leaving `v` untouched.
///
/// # Current implementation
///
/// Splits at the midpoint, sorts both halves recursively into new vectors and merges them with a
/// two-pointer merge that prefers the left element on ties. Recursion depth is `log2(v.len())`.
#[inline]
pub fn sort_top_down<T>(v: &[T]) -> Vec<T>
where
    T: PartialOrd + Copy,
{
    top_down(v, 0, &mut lt, &mut NoObserver)
}

/// Same as [`sort_top_down`], reporting [`Event::Merge`] with the merged run after every merge.
pub fn sort_top_down_observed<T, O>(v: &[T], observer: &mut O) -> Vec<T>
where
    T: PartialOrd + Copy,
    O: Observer<T>,
{
    top_down(v, 0, &mut lt, observer)
}

/// Sorts the slice in place with one scratch buffer shared by every merge.
///
/// Same divide strategy as [`sort_top_down`], but it works on index ranges of `v` and allocates
/// exactly once.
#[inline]
pub fn sort_in_place<T>(v: &mut [T])
where
    T: PartialOrd + Copy,
{
    in_place(v, &mut lt, &mut NoObserver);
}

/// Same as [`sort_in_place`], reporting [`Event::Merge`] after every merge.
pub fn sort_in_place_observed<T, O>(v: &mut [T], observer: &mut O)
where
    T: PartialOrd + Copy,
    O: Observer<T>,
{
    in_place(v, &mut lt, observer);
}

/// Sorts the slice without recursion.
///
/// Merges adjacent runs of width 1, 2, 4, … until a single run spans the slice. The last run of a
/// round is clamped to the end of the slice.
#[inline]
pub fn sort_bottom_up<T>(v: &mut [T])
where
    T: PartialOrd + Copy,
{
    bottom_up(v, &mut lt, &mut NoObserver);
}

/// Same as [`sort_bottom_up`], reporting [`Event::Merge`] after every merge.
pub fn sort_bottom_up_observed<T, O>(v: &mut [T], observer: &mut O)
where
    T: PartialOrd + Copy,
    O: Observer<T>,
{
    bottom_up(v, &mut lt, observer);
}

fn top_down<T, F, O>(v: &[T], offset: usize, is_less: &mut F, observer: &mut O) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    let len = v.len();
    if len <= 1 {
        return v.to_vec();
    }

    let mid = len / 2;
    let left = top_down(&v[..mid], offset, is_less, observer);
    let right = top_down(&v[mid..], offset + mid, is_less, observer);

    let merged = merge_into_vec(&left, &right, is_less);
    observer.observe(
        Event::Merge {
            start: offset,
            mid: offset + mid,
            end: offset + len,
        },
        &merged,
    );

    merged
}

fn in_place<T, F, O>(v: &mut [T], is_less: &mut F, observer: &mut O)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // The contents are irrelevant, every merge overwrites the part it uses first.
    let mut scratch = v.to_vec();
    sort_range(v, &mut scratch, 0, len, is_less, observer);
}

fn sort_range<T, F, O>(
    v: &mut [T],
    scratch: &mut [T],
    start: usize,
    end: usize,
    is_less: &mut F,
    observer: &mut O,
) where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    if end - start < 2 {
        return;
    }

    let mid = start + (end - start) / 2;
    sort_range(v, scratch, start, mid, is_less, observer);
    sort_range(v, scratch, mid, end, is_less, observer);

    merge_with_scratch(&mut v[start..end], mid - start, scratch, is_less);
    observer.observe(Event::Merge { start, mid, end }, v);
}

fn bottom_up<T, F, O>(v: &mut [T], is_less: &mut F, observer: &mut O)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut scratch = v.to_vec();
    let mut width = 1;

    while width < len {
        let mut start = 0;
        // Only pairs with a non-empty right run need merging.
        while start < len - width {
            let mid = start + width;
            let end = cmp::min(start + 2 * width, len);

            merge_with_scratch(&mut v[start..end], width, &mut scratch, is_less);
            observer.observe(Event::Merge { start, mid, end }, v);

            start += 2 * width;
        }

        width *= 2;
    }
}
