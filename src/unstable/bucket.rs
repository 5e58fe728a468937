//! Bucket sort for bounded floats and for integer ranges.
//!
//! Both variants scatter the input into buckets covering consecutive sub-ranges in one scan, sort
//! every bucket on its own and concatenate the buckets in order. They are fast when the input is
//! spread evenly over the buckets and degrade to the cost of the bucket sorter when it isn't.

use num_traits::Float;

use crate::error::SortError;
use crate::histogram::{span, MAX_TABLE_LEN};
use crate::key::{key_bounds, Key};
use crate::observe::{Event, NoObserver, Observer};
use crate::primitives::lt;
use crate::stable::insertion::insertion_sort;

/// Sorts a slice of floats expected to lie in `[0, 1)`.
///
/// Uses one bucket per element, so uniformly distributed input costs *O*(*n*) on average. If
/// everything lands in the same bucket it is *O*(*n*^2). Buckets are insertion sorted, which
/// currently keeps equal values in input order, but that is not part of the contract.
///
/// Values outside `[0, 1)` are clamped into the boundary buckets instead of being rejected: an
/// input of exactly `1.0` goes to the last bucket, negative values go to the first. The result is
/// still fully sorted, only the running time suffers. NaN is not supported.
#[inline]
pub fn sort_unit<F: Float>(v: &mut [F]) {
    unit_buckets(v, &mut NoObserver);
}

/// Same as [`sort_unit`], reporting [`Event::Bucket`] with the sorted contents of every non-empty
/// bucket.
pub fn sort_unit_observed<F, O>(v: &mut [F], observer: &mut O)
where
    F: Float,
    O: Observer<F>,
{
    unit_buckets(v, observer);
}

/// Sorts the slice by key, using buckets that each cover `width` consecutive keys.
///
/// Uses `(max - min) / width + 1` buckets. Each bucket is sorted with the standard library's
/// unstable sort, so equal keys may be reordered.
///
/// Fails with [`SortError::ZeroBucketWidth`] if `width` is zero, checked before anything else, and
/// with [`SortError::RangeTooLarge`] if more than [`MAX_TABLE_LEN`] buckets would be needed. `v`
/// is left untouched on error.
pub fn sort_range<T>(v: &mut [T], width: u64) -> Result<(), SortError>
where
    T: Key,
{
    if width == 0 {
        return Err(SortError::ZeroBucketWidth);
    }

    let Some((min, max)) = key_bounds(v) else {
        return Ok(());
    };

    let width = width as u128;
    let count = (span(min, max) / width).saturating_add(1);
    if count > MAX_TABLE_LEN as u128 {
        return Err(SortError::RangeTooLarge {
            span: count,
            limit: MAX_TABLE_LEN,
        });
    }

    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); count as usize];
    for elem in v.iter() {
        buckets[(span(min, elem.key()) / width) as usize].push(*elem);
    }

    let mut pos = 0;
    for bucket in buckets.iter_mut() {
        bucket.sort_unstable_by_key(|elem| elem.key());
        v[pos..pos + bucket.len()].copy_from_slice(bucket);
        pos += bucket.len();
    }

    Ok(())
}

fn unit_buckets<F, O>(v: &mut [F], observer: &mut O)
where
    F: Float,
    O: Observer<F>,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut buckets: Vec<Vec<F>> = vec![Vec::new(); len];
    for &x in v.iter() {
        buckets[unit_bucket(x, len)].push(x);
    }

    let mut pos = 0;
    for (index, bucket) in buckets.iter_mut().enumerate() {
        if bucket.is_empty() {
            continue;
        }

        insertion_sort(bucket, &mut lt, &mut NoObserver);
        observer.observe(
            Event::Bucket {
                index,
                len: bucket.len(),
            },
            bucket,
        );

        v[pos..pos + bucket.len()].copy_from_slice(bucket);
        pos += bucket.len();
    }
}

/// `floor(x * len)` clamped to `0..len`. Negative values and NaN map to 0.
#[inline]
fn unit_bucket<F: Float>(x: F, len: usize) -> usize {
    let Some(scale) = F::from(len) else {
        return 0;
    };

    match (x * scale).floor().to_usize() {
        Some(index) => index.min(len - 1),
        // Above `usize::MAX`, or negative, or NaN.
        None if x > F::zero() => len - 1,
        None => 0,
    }
}
