//! Counting engine shared by counting sort and radix sort.
//!
//! A pass maps every element to a slot (`key - min`, or one decimal digit of the key), counts slot
//! occurrences, and then rebuilds the order from the counts alone. No element is ever compared
//! with another.

use crate::error::SortError;
use crate::key::{FromKey, Key};

/// Maximum number of slots a count table or bucket vector may have.
pub const MAX_TABLE_LEN: usize = 1 << 24;

/// Number of slots needed to cover `min..=max`.
///
/// Fails without allocating if the range can't be covered within [`MAX_TABLE_LEN`].
pub(crate) fn table_len(min: i128, max: i128) -> Result<usize, SortError> {
    debug_assert!(min <= max);

    // `max - min` may not fit `i128`, but it always fits `u128`. Only the full `i128` range
    // saturates, and that is rejected anyway.
    let slots = span(min, max).saturating_add(1);
    if slots > MAX_TABLE_LEN as u128 {
        return Err(SortError::RangeTooLarge {
            span: slots,
            limit: MAX_TABLE_LEN,
        });
    }

    Ok(slots as usize)
}

/// `max - min` as an unsigned distance, exact for any pair of `i128` with `min <= max`.
#[inline(always)]
pub(crate) fn span(min: i128, max: i128) -> u128 {
    max.wrapping_sub(min) as u128
}

/// Occurrence counts of every key in `base..base + counts.len()`.
pub(crate) struct Histogram {
    base: i128,
    counts: Vec<usize>,
}

impl Histogram {
    /// Counts the keys of `v`, which must all lie in `min..=max`.
    pub(crate) fn build<T: Key>(v: &[T], min: i128, max: i128) -> Result<Self, SortError> {
        let len = table_len(min, max)?;

        let mut hist = Histogram {
            base: min,
            counts: vec![0; len],
        };
        count_into(&mut hist.counts, v, |elem| (elem.key() - min) as usize);

        Ok(hist)
    }

    /// Writes every key back in ascending order, each repeated as often as it was counted.
    ///
    /// The origin of a value is lost, so this is only meaningful when the key is the whole value.
    pub(crate) fn emit<T: FromKey>(&self, out: &mut [T]) {
        let mut pos = 0;
        for (slot, &count) in self.counts.iter().enumerate() {
            if count == 0 {
                continue;
            }

            let value = T::from_key(self.base + slot as i128);
            out[pos..pos + count].fill(value);
            pos += count;
        }

        debug_assert_eq!(pos, out.len());
    }

    /// Places every element of `input` into its final position in `out`, preserving the input
    /// order of equal keys.
    pub(crate) fn scatter_stable<T: Key>(mut self, input: &[T], out: &mut [T]) {
        let base = self.base;
        prefix_sums(&mut self.counts);
        scatter_stable(input, out, &mut self.counts, |elem| {
            (elem.key() - base) as usize
        });
    }
}

/// Adds one to `counts[slot(elem)]` for every element.
#[inline]
pub(crate) fn count_into<T, S>(counts: &mut [usize], v: &[T], mut slot: S)
where
    S: FnMut(&T) -> usize,
{
    for elem in v {
        counts[slot(elem)] += 1;
    }
}

/// Turns counts into cumulative counts, after which `counts[s]` is one past the last output
/// position of slot `s`.
#[inline]
pub(crate) fn prefix_sums(counts: &mut [usize]) {
    let mut sum = 0;
    for count in counts.iter_mut() {
        sum += *count;
        *count = sum;
    }
}

/// Walks `input` from last to first and writes each element to `counts[slot] - 1`, decrementing
/// the slot. Walking backwards while filling each slot from its end is what keeps equal keys in
/// input order.
///
/// `counts` must hold the prefix sums of the slot counts of `input`.
#[inline]
pub(crate) fn scatter_stable<T, S>(input: &[T], out: &mut [T], counts: &mut [usize], mut slot: S)
where
    T: Copy,
    S: FnMut(&T) -> usize,
{
    debug_assert_eq!(input.len(), out.len());

    for elem in input.iter().rev() {
        let s = slot(elem);
        counts[s] -= 1;
        out[counts[s]] = *elem;
    }
}

/// Digit base used by radix sort.
pub(crate) const RADIX: usize = 10;

/// Decimal digit of `key - offset` with weight `exp`. `offset` must not exceed any key.
#[inline(always)]
pub(crate) fn digit<T: Key>(elem: &T, offset: i128, exp: u128) -> usize {
    ((span(offset, elem.key()) / exp) % RADIX as u128) as usize
}

/// One stable counting pass keyed on the digit with weight `exp`.
///
/// `buf` is scratch space of the same length as `v`. After the call `v` is ordered by that digit
/// and equal digits keep their previous relative order.
pub(crate) fn digit_pass<T: Key>(v: &mut [T], buf: &mut [T], offset: i128, exp: u128) {
    let mut counts = [0usize; RADIX];

    count_into(&mut counts, v, |elem| digit(elem, offset, exp));
    prefix_sums(&mut counts);
    scatter_stable(v, buf, &mut counts, |elem| digit(elem, offset, exp));

    v.copy_from_slice(buf);
}
