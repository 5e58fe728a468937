//! Sorts that may reorder equal elements.

pub mod selection;

pub mod shell;

pub mod quicksort;

pub mod heapsort;

// Reconstructs values from the count table, the origin of equal keys is lost.
pub mod counting;

// Bounded-float and integer-range bucket sort. Only as stable as the bucket sorter, which for
// integer ranges is the standard library's unstable sort.
pub mod bucket;
