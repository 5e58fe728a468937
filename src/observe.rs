//! Step tracing for the sorting algorithms.
//!
//! Every algorithm body takes an observer and reports at fixed points: after an outer pass, after
//! a partition, after a merge and so on. The plain entry points pass [`NoObserver`], which the
//! optimizer removes entirely, so there is only one copy of each algorithm.

use std::ops::Range;

/// A point of interest inside a sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Bubble sort finished outer pass `round`, `swapped` is false for the terminating pass.
    Pass { round: usize, swapped: bool },

    /// Selection sort settled `position`, taking the element found at `from`.
    Select { position: usize, from: usize },

    /// Insertion sort moved the element at `from` down to `to`.
    Insert { from: usize, to: usize },

    /// Shell sort finished the gapped insertion round for `gap`.
    Gap { gap: usize },

    /// The runs `start..mid` and `mid..end` were merged.
    Merge { start: usize, mid: usize, end: usize },

    /// `range` was partitioned, `pivot` holds the elements equal to the pivot in their final
    /// position. For Hoare partitioning `pivot` is the empty split point.
    Partition {
        range: Range<usize>,
        pivot: Range<usize>,
    },

    /// Heap sort finished building the max-heap.
    Heapified,

    /// Heap sort moved the current maximum to `end`.
    Extract { end: usize },

    /// Radix sort finished the counting pass for the digit with weight `exp`.
    Digit { exp: u128 },

    /// Bucket sort finished sorting bucket `index`, which holds `len` elements.
    Bucket { index: usize, len: usize },
}

/// Receives [`Event`]s together with the state they refer to.
///
/// For in-place algorithms `state` is the whole sequence. Top-down merge sort works on fresh
/// vectors and reports the merged run covering `start..end`, bucket sort reports the sorted bucket.
pub trait Observer<T> {
    fn observe(&mut self, event: Event, state: &[T]);
}

impl<T, F> Observer<T> for F
where
    F: FnMut(Event, &[T]),
{
    #[inline(always)]
    fn observe(&mut self, event: Event, state: &[T]) {
        self(event, state)
    }
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoObserver;

impl<T> Observer<T> for NoObserver {
    #[inline(always)]
    fn observe(&mut self, _event: Event, _state: &[T]) {}
}

/// Observer that keeps a snapshot of the state for every event.
#[derive(Debug, Clone)]
pub struct Recorder<T> {
    steps: Vec<(Event, Vec<T>)>,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn steps(&self) -> &[(Event, Vec<T>)] {
        &self.steps
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.steps.iter().map(|(event, _)| event)
    }

    pub fn into_steps(self) -> Vec<(Event, Vec<T>)> {
        self.steps
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Observer<T> for Recorder<T> {
    fn observe(&mut self, event: Event, state: &[T]) {
        self.steps.push((event, state.to_vec()));
    }
}
