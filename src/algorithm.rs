//! The closed set of entry points, selectable by value.

use crate::error::SortError;
use crate::stable;
use crate::unstable;
use crate::unstable::quicksort::Scheme;
use crate::unstable::shell::Gaps;

/// One sorting entry point together with its policy parameters.
///
/// Float bucket sort is left out, it only accepts floats. Everything else can be run over `i64`
/// through [`Algorithm::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    SelectionDescending,
    SelectionBidirectional,
    Insertion,
    BinaryInsertion,
    Shell(Gaps),
    MergeTopDown,
    MergeInPlace,
    MergeBottomUp,
    Quick(Scheme),
    QuickIterative(Scheme),
    Heap,
    Counting,
    CountingStable,
    Radix,
    RadixSigned,
    RadixMsd,
    BucketRange { width: u64 },
}

impl Algorithm {
    pub const ALL: [Algorithm; 29] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::SelectionDescending,
        Algorithm::SelectionBidirectional,
        Algorithm::Insertion,
        Algorithm::BinaryInsertion,
        Algorithm::Shell(Gaps::Shell),
        Algorithm::Shell(Gaps::Knuth),
        Algorithm::Shell(Gaps::Hibbard),
        Algorithm::Shell(Gaps::Sedgewick),
        Algorithm::MergeTopDown,
        Algorithm::MergeInPlace,
        Algorithm::MergeBottomUp,
        Algorithm::Quick(Scheme::Lomuto),
        Algorithm::Quick(Scheme::Hoare),
        Algorithm::Quick(Scheme::ThreeWay),
        Algorithm::Quick(Scheme::Randomized),
        Algorithm::QuickIterative(Scheme::Lomuto),
        Algorithm::QuickIterative(Scheme::Hoare),
        Algorithm::QuickIterative(Scheme::ThreeWay),
        Algorithm::QuickIterative(Scheme::Randomized),
        Algorithm::Heap,
        Algorithm::Counting,
        Algorithm::CountingStable,
        Algorithm::Radix,
        Algorithm::RadixSigned,
        Algorithm::RadixMsd,
        Algorithm::BucketRange { width: 10 },
        Algorithm::BucketRange { width: 1 << 16 },
    ];

    /// Short snake case name, unique within [`Algorithm::ALL`] except for the bucket width.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::SelectionDescending => "selection_descending",
            Algorithm::SelectionBidirectional => "selection_bidirectional",
            Algorithm::Insertion => "insertion",
            Algorithm::BinaryInsertion => "binary_insertion",
            Algorithm::Shell(gaps) => match gaps {
                Gaps::Shell => "shell_shell",
                Gaps::Knuth => "shell_knuth",
                Gaps::Hibbard => "shell_hibbard",
                Gaps::Sedgewick => "shell_sedgewick",
            },
            Algorithm::MergeTopDown => "merge_top_down",
            Algorithm::MergeInPlace => "merge_in_place",
            Algorithm::MergeBottomUp => "merge_bottom_up",
            Algorithm::Quick(scheme) => match scheme {
                Scheme::Lomuto => "quick_lomuto",
                Scheme::Hoare => "quick_hoare",
                Scheme::ThreeWay => "quick_three_way",
                Scheme::Randomized => "quick_randomized",
            },
            Algorithm::QuickIterative(scheme) => match scheme {
                Scheme::Lomuto => "quick_iterative_lomuto",
                Scheme::Hoare => "quick_iterative_hoare",
                Scheme::ThreeWay => "quick_iterative_three_way",
                Scheme::Randomized => "quick_iterative_randomized",
            },
            Algorithm::Heap => "heap",
            Algorithm::Counting => "counting",
            Algorithm::CountingStable => "counting_stable",
            Algorithm::Radix => "radix",
            Algorithm::RadixSigned => "radix_signed",
            Algorithm::RadixMsd => "radix_msd",
            Algorithm::BucketRange { .. } => "bucket_range",
        }
    }

    /// Whether equal elements keep their input order.
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            Algorithm::Bubble
                | Algorithm::Insertion
                | Algorithm::BinaryInsertion
                | Algorithm::MergeTopDown
                | Algorithm::MergeInPlace
                | Algorithm::MergeBottomUp
                | Algorithm::CountingStable
                | Algorithm::Radix
                | Algorithm::RadixSigned
                | Algorithm::RadixMsd
        )
    }

    /// Whether the output is in descending order.
    pub fn is_descending(&self) -> bool {
        matches!(self, Algorithm::SelectionDescending)
    }

    /// Whether [`Algorithm::run`] can fail for some input, see [`SortError`].
    pub fn is_fallible(&self) -> bool {
        matches!(
            self,
            Algorithm::Counting
                | Algorithm::CountingStable
                | Algorithm::Radix
                | Algorithm::RadixMsd
                | Algorithm::BucketRange { .. }
        )
    }

    /// Sorts `v` with this algorithm. Errors are those of the underlying entry point, `v` is
    /// untouched in that case.
    pub fn run(&self, v: &mut [i64]) -> Result<(), SortError> {
        match *self {
            Algorithm::Bubble => stable::bubble::sort(v),
            Algorithm::Selection => unstable::selection::sort(v),
            Algorithm::SelectionDescending => unstable::selection::sort_descending(v),
            Algorithm::SelectionBidirectional => unstable::selection::sort_bidirectional(v),
            Algorithm::Insertion => stable::insertion::sort(v),
            Algorithm::BinaryInsertion => stable::insertion::sort_binary(v),
            Algorithm::Shell(gaps) => unstable::shell::sort(v, gaps),
            Algorithm::MergeTopDown => {
                let sorted = stable::merge::sort_top_down(v);
                v.copy_from_slice(&sorted);
            }
            Algorithm::MergeInPlace => stable::merge::sort_in_place(v),
            Algorithm::MergeBottomUp => stable::merge::sort_bottom_up(v),
            Algorithm::Quick(scheme) => unstable::quicksort::sort(v, scheme),
            Algorithm::QuickIterative(scheme) => unstable::quicksort::sort_iterative(v, scheme),
            Algorithm::Heap => unstable::heapsort::sort(v),
            Algorithm::Counting => return unstable::counting::sort(v),
            Algorithm::CountingStable => return stable::counting::sort(v),
            Algorithm::Radix => return stable::radix::sort(v),
            Algorithm::RadixSigned => return stable::radix::sort_signed(v),
            Algorithm::RadixMsd => return stable::radix::sort_msd(v),
            Algorithm::BucketRange { width } => return unstable::bucket::sort_range(v, width),
        }

        Ok(())
    }
}
