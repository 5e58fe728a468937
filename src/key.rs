//! Integer keys for the distribution sorts.
//!
//! Counting, radix and bucket sort never compare elements, they index tables with a normalized
//! key. Primitive integers are widened to `i128`. Distances between keys are taken as `u128`, so
//! any `i128` is a valid key, and a range that is too wide for a table is rejected with
//! [`SortError::RangeTooLarge`](crate::SortError::RangeTooLarge).

/// An element with an integer sort key.
///
/// Stable counting sort, radix sort and integer bucket sort only need the key and move whole
/// elements around, so anything carrying a key can be sorted by them.
pub trait Key: Copy {
    /// The sort key. Any value is allowed, it must be the same every time it is asked for.
    fn key(&self) -> i128;
}

/// An element that can be rebuilt from its key alone.
///
/// Basic counting sort reconstructs its output from the count table and doesn't track where a
/// value came from, which is only sound if the key is the whole value.
pub trait FromKey: Key {
    /// `key` is always one that `Key::key` produced for this type.
    fn from_key(key: i128) -> Self;
}

macro_rules! impl_key {
    ($($t:ty),*) => {
        $(
            impl Key for $t {
                #[inline(always)]
                fn key(&self) -> i128 {
                    *self as i128
                }
            }

            impl FromKey for $t {
                #[inline(always)]
                fn from_key(key: i128) -> Self {
                    key as $t
                }
            }
        )*
    };
}

impl_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Smallest and largest key in `v`, `None` if `v` is empty.
pub(crate) fn key_bounds<T: Key>(v: &[T]) -> Option<(i128, i128)> {
    let (first, rest) = v.split_first()?;
    let first = first.key();

    Some(rest.iter().fold((first, first), |(min, max), elem| {
        let k = elem.key();
        (min.min(k), max.max(k))
    }))
}
