//! Implicit binary max-heap over a slice.
//!
//! The children of node `i` live at `2 * i + 1` and `2 * i + 2`. The heap respects the invariant
//! `parent >= child`.

/// Restores the heap invariant for the subtree rooted at `node`, assuming both child subtrees
/// already satisfy it.
///
/// Compares the node against the greater of its children and keeps sinking it while it is
/// smaller. Each step goes one level down, so this takes at most `log2(v.len())` swaps.
pub(crate) fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Choose the greater child.
        if child + 1 < len && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}

/// Builds a max-heap in linear time by sifting down every non-leaf, last one first.
pub(crate) fn build_max_heap<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for node in (0..v.len() / 2).rev() {
        sift_down(v, node, is_less);
    }
}
