//! Two-pointer stable merge of sorted runs.

/// Merges the sorted runs `left` and `right` into a new vector.
///
/// On ties the element from `left` is taken first, which is what makes merge sort stable. Once one
/// side is exhausted the rest of the other side is appended in bulk.
pub(crate) fn merge_into_vec<T, F>(left: &[T], right: &[T], is_less: &mut F) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if is_less(&right[j], &left[i]) {
            out.push(right[j]);
            j += 1;
        } else {
            out.push(left[i]);
            i += 1;
        }
    }

    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);

    out
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` in place, using `scratch` as temporary storage.
///
/// The whole range is copied into `scratch` and interleaved back into `v`. If the left run runs
/// out first, the rest of the right run is already sitting at its final position, so only a left
/// remainder ever needs an explicit copy.
///
/// `scratch` must be at least `v.len()` long. It is reused across calls to avoid allocating per
/// merge.
pub(crate) fn merge_with_scratch<T, F>(v: &mut [T], mid: usize, scratch: &mut [T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid <= len && scratch.len() >= len);

    if mid == 0 || mid == len {
        return;
    }

    let scratch = &mut scratch[..len];
    scratch.copy_from_slice(v);

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < len {
        if is_less(&scratch[j], &scratch[i]) {
            v[k] = scratch[j];
            j += 1;
        } else {
            v[k] = scratch[i];
            i += 1;
        }
        k += 1;
    }

    // Copy the left remainder, a right remainder is already in place.
    let rest = mid - i;
    v[k..k + rest].copy_from_slice(&scratch[i..mid]);
}
