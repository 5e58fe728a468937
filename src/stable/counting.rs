//! Stable counting sort.

use crate::error::SortError;
use crate::histogram::Histogram;
use crate::key::{key_bounds, Key};

/// Sorts the slice by key without comparing elements.
///
/// This sort is stable and *O*(*n* + *k*), where *k* is `max - min + 1` of the keys. It allocates
/// a count table of *k* slots and an output buffer of *n* elements.
///
/// Fails with [`SortError::RangeTooLarge`] if *k* exceeds [`MAX_TABLE_LEN`], in which case `v` is
/// left untouched. Negative keys are fine, every key is offset by the minimum.
///
/// # Current implementation
///
/// The count table is turned into prefix sums, so each slot knows where its run of equal keys
/// ends. The input is then walked from last to first and every element goes to the end of its
/// run, which is then shrunk by one. Filling runs back to front while reading the input back to
/// front keeps equal keys in input order.
///
/// [`MAX_TABLE_LEN`]: crate::MAX_TABLE_LEN
pub fn sort<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: Key,
{
    if v.len() < 2 {
        return Ok(());
    }

    let Some((min, max)) = key_bounds(v) else {
        return Ok(());
    };

    let hist = Histogram::build(v, min, max)?;

    let mut out = v.to_vec();
    hist.scatter_stable(v, &mut out);
    v.copy_from_slice(&out);

    Ok(())
}
