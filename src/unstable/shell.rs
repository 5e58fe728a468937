//! Shell sort with selectable increment sequences.

use crate::observe::{Event, NoObserver, Observer};
use crate::primitives::{insert_tail, lt};

/// Gap sequence used by [`sort`].
///
/// The policy only decides how the gap shrinks from round to round, the gapped insertion pass is
/// the same for all of them. Every sequence ends with gap 1, which is a plain insertion sort over
/// an almost sorted slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gaps {
    /// Shell's original: `n / 2`, halved every round. *O*(*n*^2) worst-case.
    Shell,
    /// Knuth: `1, 4, 13, 40, …` (`h = 3h + 1`), starting below `n / 3`.
    Knuth,
    /// Hibbard: `1, 3, 7, 15, …` (`2^k - 1`), *O*(*n*^1.5) worst-case.
    Hibbard,
    /// Sedgewick: `1, 5, 19, 41, 109, …`, *O*(*n*^4/3) worst-case.
    Sedgewick,
}

impl Gaps {
    pub const ALL: [Gaps; 4] = [Gaps::Shell, Gaps::Knuth, Gaps::Hibbard, Gaps::Sedgewick];

    /// The gaps applied to a slice of length `len`, largest first, ending with 1.
    ///
    /// Empty for `len < 2`, there is nothing to sort.
    pub fn sequence(self, len: usize) -> Vec<usize> {
        if len < 2 {
            return Vec::new();
        }

        match self {
            Gaps::Shell => {
                let mut gaps = Vec::new();
                let mut gap = len / 2;
                while gap > 0 {
                    gaps.push(gap);
                    gap /= 2;
                }
                gaps
            }
            Gaps::Knuth => {
                let mut gap = 1;
                while gap < len / 3 {
                    gap = 3 * gap + 1;
                }
                shrinking(gap, |g| g / 3)
            }
            Gaps::Hibbard => {
                let mut gap = 1;
                while gap < len / 3 {
                    gap = 2 * gap + 1;
                }
                shrinking(gap, |g| (g - 1) / 2)
            }
            Gaps::Sedgewick => {
                let mut gaps = vec![1];
                for k in 1.. {
                    let gap = sedgewick_term(k);
                    if gap >= len {
                        break;
                    }
                    gaps.push(gap);
                }
                gaps.reverse();
                gaps
            }
        }
    }
}

/// Term `k` of Sedgewick's interleaved sequence, `sedgewick_term(0) == 1`.
fn sedgewick_term(k: u32) -> usize {
    if k % 2 == 0 {
        9 * (1 << k) - 9 * (1 << (k / 2)) + 1
    } else {
        8 * (1 << k) - 6 * (1 << ((k + 1) / 2)) + 1
    }
}

/// Collects `start, next(start), …` while the gap stays positive.
fn shrinking(start: usize, mut next: impl FnMut(usize) -> usize) -> Vec<usize> {
    let mut gaps = Vec::new();
    let mut gap = start;
    while gap > 0 {
        gaps.push(gap);
        gap = next(gap);
    }
    gaps
}

/// Sorts the slice using the given gap sequence.
///
/// This sort is unstable: elements jump over equal elements of other interleaved chains. It
/// doesn't allocate beyond the gap sequence itself.
///
/// # Current implementation
///
/// For every gap `g`, largest first, each of the `g` interleaved chains `v[i], v[i + g], …` is
/// insertion sorted. Large gaps move elements far with few shifts, so by the time gap 1 runs the
/// slice is nearly sorted and insertion sort is cheap.
#[inline]
pub fn sort<T>(v: &mut [T], gaps: Gaps)
where
    T: PartialOrd + Copy,
{
    shell_sort(v, gaps, &mut lt, &mut NoObserver);
}

/// Same as [`sort`], reporting [`Event::Gap`] after every round.
pub fn sort_observed<T, O>(v: &mut [T], gaps: Gaps, observer: &mut O)
where
    T: PartialOrd + Copy,
    O: Observer<T>,
{
    shell_sort(v, gaps, &mut lt, observer);
}

fn shell_sort<T, F, O>(v: &mut [T], gaps: Gaps, is_less: &mut F, observer: &mut O)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    let len = v.len();

    for gap in gaps.sequence(len) {
        // Walking `i` upwards interleaves the chains, each `v[i]` lands in its own chain's
        // sorted prefix.
        for i in gap..len {
            insert_tail(v, i, gap, is_less);
        }

        observer.observe(Event::Gap { gap }, v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_sequence() {
        assert_eq!(Gaps::Shell.sequence(10), [5, 2, 1]);
        assert_eq!(Gaps::Shell.sequence(2), [1]);
        assert!(Gaps::Shell.sequence(1).is_empty());
    }

    #[test]
    fn knuth_sequence() {
        assert_eq!(Gaps::Knuth.sequence(10), [4, 1]);
        assert_eq!(Gaps::Knuth.sequence(100), [40, 13, 4, 1]);
        assert_eq!(Gaps::Knuth.sequence(5), [1]);
    }

    #[test]
    fn hibbard_sequence() {
        assert_eq!(Gaps::Hibbard.sequence(10), [3, 1]);
        assert_eq!(Gaps::Hibbard.sequence(20), [7, 3, 1]);
        assert_eq!(Gaps::Hibbard.sequence(100), [63, 31, 15, 7, 3, 1]);
    }

    #[test]
    fn sedgewick_sequence() {
        let terms: Vec<_> = (0..8).map(sedgewick_term).collect();
        assert_eq!(terms, [1, 5, 19, 41, 109, 209, 505, 929]);

        assert_eq!(Gaps::Sedgewick.sequence(7), [5, 1]);
        assert_eq!(Gaps::Sedgewick.sequence(5), [1]);
        assert_eq!(Gaps::Sedgewick.sequence(110), [109, 41, 19, 5, 1]);
    }

    #[test]
    fn every_sequence_ends_with_one() {
        for gaps in Gaps::ALL {
            for len in 2..300 {
                let seq = gaps.sequence(len);
                assert_eq!(seq.last(), Some(&1), "{gaps:?} {len}");
                assert!(seq.windows(2).all(|w| w[0] > w[1]), "{gaps:?} {len}");
                assert!(seq[0] < len, "{gaps:?} {len}");
            }
        }
    }
}
