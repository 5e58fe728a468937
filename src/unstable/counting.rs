//! Basic counting sort.

use crate::error::SortError;
use crate::histogram::Histogram;
use crate::key::{key_bounds, FromKey};

/// Sorts the slice by rebuilding it from a count table.
///
/// This sort is *O*(*n* + *k*), where *k* is `max - min + 1` of the keys, and allocates a count
/// table of *k* slots. Negative keys are fine, every key is offset by the minimum.
///
/// The output is written from the table rather than moved from the input, which only works for
/// types whose key is the whole value. It counts as unstable: nothing ties an output element to
/// the input element it came from. Use [`crate::stable::counting::sort`] to sort keyed records.
///
/// Fails with [`SortError::RangeTooLarge`] if *k* exceeds [`MAX_TABLE_LEN`], in which case `v` is
/// left untouched.
///
/// [`MAX_TABLE_LEN`]: crate::MAX_TABLE_LEN
pub fn sort<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: FromKey,
{
    if v.len() < 2 {
        return Ok(());
    }

    let Some((min, max)) = key_bounds(v) else {
        return Ok(());
    };

    Histogram::build(v, min, max)?.emit(v);
    Ok(())
}
