//! Heap sort over an implicit binary max-heap.

use crate::heap::{build_max_heap, sift_down};
use crate::observe::{Event, NoObserver, Observer};
use crate::primitives::lt;

/// Sorts the slice.
///
/// This sort is unstable and *O*(*n* \* log(*n*)) worst-case. It doesn't allocate and the sift
/// loop doesn't recurse, so stack use is constant.
///
/// # Current implementation
///
/// The whole slice is turned into a max-heap first. Then the root, which is the maximum of the
/// remaining heap, is swapped with the last heap element and the heap shrinks by one. The
/// element that took the root's place is sifted down before the next extraction.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: PartialOrd,
{
    heapsort(v, &mut lt, &mut NoObserver);
}

/// Same as [`sort`], reporting [`Event::Heapified`] once the heap is built and
/// [`Event::Extract`] after every extracted maximum.
pub fn sort_observed<T, O>(v: &mut [T], observer: &mut O)
where
    T: PartialOrd,
    O: Observer<T>,
{
    heapsort(v, &mut lt, observer);
}

fn heapsort<T, F, O>(v: &mut [T], is_less: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    build_max_heap(v, is_less);
    observer.observe(Event::Heapified, v);

    for end in (1..len).rev() {
        v.swap(0, end);
        observer.observe(Event::Extract { end }, v);
        sift_down(&mut v[..end], 0, is_less);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::Recorder;

    #[test]
    fn extracts_maximum_each_round() {
        let mut v = [3, 9, 1, 7];
        let mut rec = Recorder::<i32>::new();
        sort_observed(&mut v, &mut rec);
        assert_eq!(v, [1, 3, 7, 9]);

        let steps = rec.into_steps();
        assert_eq!(steps[0].0, Event::Heapified);
        assert_eq!(steps[0].1[0], 9);

        let extracted: Vec<_> = steps[1..]
            .iter()
            .map(|(event, state)| match event {
                Event::Extract { end } => state[*end],
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(extracted, [9, 7, 3]);
    }
}
