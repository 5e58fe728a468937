//! Sorts that keep equal elements in their input order.

pub mod bubble;

pub mod insertion;

pub mod merge;

// Prefix-sum counting sort, the stable sibling of `unstable::counting`.
pub mod counting;

// LSD radix sort is stable because every digit pass is.
pub mod radix;
