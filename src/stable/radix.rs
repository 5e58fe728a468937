//! Decimal radix sort.
//!
//! The LSD variants run one stable counting pass per decimal digit, least significant first. Each
//! pass orders by its digit and, being stable, keeps the order the previous passes established
//! among elements with the same digit, so after the last pass the keys are fully ordered.

use crate::error::SortError;
use crate::histogram::{digit, digit_pass, span, RADIX};
use crate::key::{key_bounds, Key};
use crate::observe::{Event, NoObserver, Observer};

/// Sorts the slice of non-negative keys, least significant digit first.
///
/// This sort is stable and *O*(*d* \* *n*), where *d* is the number of decimal digits of the
/// largest key. It allocates one scratch buffer of *n* elements.
///
/// Fails with [`SortError::NegativeKey`] if any key is negative, in which case `v` is left
/// untouched. See [`sort_signed`] for inputs with negative keys.
#[inline]
pub fn sort<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: Key,
{
    lsd_unsigned(v, &mut NoObserver)
}

/// Same as [`sort`], reporting [`Event::Digit`] after every digit pass.
pub fn sort_observed<T, O>(v: &mut [T], observer: &mut O) -> Result<(), SortError>
where
    T: Key,
    O: Observer<T>,
{
    lsd_unsigned(v, observer)
}

/// Sorts the slice, allowing negative keys.
///
/// Every key is offset by the minimum key before its digits are taken, which maps the input onto
/// non-negative keys without changing their order. Stable, same cost as [`sort`].
///
/// Accepts the full `i128` key range and never fails, it returns a `Result` like the other radix
/// entry points.
pub fn sort_signed<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: Key,
{
    let Some((min, max)) = key_bounds(v) else {
        return Ok(());
    };

    lsd(v, min, span(min, max), &mut NoObserver);
    Ok(())
}

/// Sorts the slice of non-negative keys, most significant digit first.
///
/// Distributes the elements into ten buckets by their leading digit and recurses into every
/// bucket with the next digit. Buckets are filled in input order, so this is stable too. Memory
/// use grows with the recursion, roughly *O*(*d* \* *n*) worst-case.
///
/// Fails with [`SortError::NegativeKey`] if any key is negative.
pub fn sort_msd<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: Key,
{
    let Some((min, max)) = key_bounds(v) else {
        return Ok(());
    };

    if min < 0 {
        return Err(SortError::NegativeKey { value: min });
    }

    msd(v, leading_exp(max as u128));
    Ok(())
}

fn lsd_unsigned<T, O>(v: &mut [T], observer: &mut O) -> Result<(), SortError>
where
    T: Key,
    O: Observer<T>,
{
    let Some((min, max)) = key_bounds(v) else {
        return Ok(());
    };

    if min < 0 {
        return Err(SortError::NegativeKey { value: min });
    }

    lsd(v, 0, max as u128, observer);
    Ok(())
}

/// Runs the digit passes over `key - offset`, `max` is the largest offset key.
fn lsd<T, O>(v: &mut [T], offset: i128, max: u128, observer: &mut O)
where
    T: Key,
    O: Observer<T>,
{
    if v.len() < 2 {
        return;
    }

    let mut buf = v.to_vec();
    let mut exp: u128 = 1;

    while max / exp > 0 {
        digit_pass(v, &mut buf, offset, exp);
        observer.observe(Event::Digit { exp }, v);

        // The next weight doesn't fit, so `max` has no digit left.
        let Some(next) = exp.checked_mul(RADIX as u128) else {
            break;
        };
        exp = next;
    }
}

/// Weight of the most significant decimal digit of `max`.
fn leading_exp(mut max: u128) -> u128 {
    let mut exp = 1;
    while max >= RADIX as u128 {
        max /= RADIX as u128;
        exp *= RADIX as u128;
    }

    exp
}

fn msd<T: Key>(v: &mut [T], exp: u128) {
    if v.len() < 2 || exp == 0 {
        return;
    }

    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); RADIX];
    for elem in v.iter() {
        buckets[digit(elem, 0, exp)].push(*elem);
    }

    let mut pos = 0;
    for bucket in buckets.iter_mut() {
        msd(bucket, exp / RADIX as u128);
        v[pos..pos + bucket.len()].copy_from_slice(bucket);
        pos += bucket.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_digit_weight() {
        assert_eq!(leading_exp(0), 1);
        assert_eq!(leading_exp(9), 1);
        assert_eq!(leading_exp(10), 10);
        assert_eq!(leading_exp(802), 100);
        assert_eq!(leading_exp(u64::MAX as u128), 10_000_000_000_000_000_000);
        assert_eq!(leading_exp(u128::MAX), 10u128.pow(38));
    }

    #[test]
    fn msd_matches_lsd() {
        let mut a = [170u32, 45, 75, 90, 802, 24, 2, 66, 0, 1000];
        let mut b = a;
        sort(&mut a).unwrap();
        sort_msd(&mut b).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, [0, 2, 24, 45, 66, 75, 90, 170, 802, 1000]);
    }
}
