//! Low-level building blocks shared by the comparison sorts.

/// `a < b` under the natural order.
#[inline(always)]
pub(crate) fn lt<T: PartialOrd>(a: &T, b: &T) -> bool {
    a.lt(b)
}

/// `a > b` under the natural order, used to drive the ascending cores in descending order.
#[inline(always)]
pub(crate) fn gt<T: PartialOrd>(a: &T, b: &T) -> bool {
    b.lt(a)
}

/// Midpoint of `lo..hi` without the `lo + hi` overflow.
#[inline(always)]
pub(crate) fn midpoint(lo: usize, hi: usize) -> usize {
    lo + (hi - lo) / 2
}

/// Moves `v[tail]` down in steps of `gap` until the element `gap` positions before it is not
/// greater. The elements `v[tail % gap], v[tail % gap + gap], .., v[tail - gap]` must already be
/// sorted. Returns the final position of the element.
///
/// Equal elements are never passed over, which keeps the plain (`gap == 1`) insertion stable.
#[inline]
pub(crate) fn insert_tail<T, F>(v: &mut [T], tail: usize, gap: usize, is_less: &mut F) -> usize
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(gap > 0 && tail < v.len());

    let tmp = v[tail];
    let mut hole = tail;
    while hole >= gap && is_less(&tmp, &v[hole - gap]) {
        v[hole] = v[hole - gap];
        hole -= gap;
    }
    v[hole] = tmp;

    hole
}

/// Index of the first element in the sorted `v` that is greater than `x`, i.e. one past the last
/// element equal to `x`. Inserting there keeps equal elements in arrival order.
pub(crate) fn upper_bound<T, F>(v: &[T], x: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut lo = 0;
    let mut hi = v.len();
    while lo < hi {
        let mid = midpoint(lo, hi);
        if is_less(x, &v[mid]) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    lo
}
