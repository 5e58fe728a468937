//! Reference implementations of the classic in-memory sorting algorithms.
//!
//! The entry points are split by their guarantee. Everything under [`stable`] keeps equal
//! elements in input order, everything under [`unstable`] makes no such promise.
//!
//! Comparison sorts work on any `T: PartialOrd + Copy`, which covers all fixed-width integers and
//! floats (NaN is not supported). Distribution sorts work on integer keys, see [`Key`], and
//! reject inputs whose key range they can't handle with a [`SortError`] instead of producing
//! garbage.
//!
//! Each algorithm body exists once and reports its progress to an [`Observer`]. The plain entry
//! points pass [`NoObserver`], the `*_observed` ones let the caller trace every pass.

pub mod algorithm;
pub mod error;
pub mod key;
pub mod observe;
pub mod stable;
pub mod unstable;

mod heap;
mod histogram;
mod merge;
mod partition;
mod primitives;

pub use algorithm::Algorithm;
pub use error::SortError;
pub use histogram::MAX_TABLE_LEN;
pub use key::{FromKey, Key};
pub use observe::{Event, NoObserver, Observer, Recorder};
