use std::cmp::Ordering;

pub trait Sort {
    fn name() -> String;

    /// Whether the sort promises to keep equal elements in input order. The stability check only
    /// runs for sorts that do.
    fn is_stable() -> bool;

    fn sort<T>(arr: &mut [T])
    where
        T: PartialOrd + Copy;
}

/// Element ordered by `key` alone, `idx` remembers where it started.
#[derive(Debug, Clone, Copy)]
pub struct Tagged {
    pub key: i32,
    pub idx: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

/// Tags `keys` with their index.
pub fn tag(keys: &[i32]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(idx, &key)| Tagged { key, idx })
        .collect()
}

/// True if elements with the same key are in ascending `idx` order.
pub fn is_stable_order(v: &[Tagged]) -> bool {
    v.windows(2)
        .all(|w| w[0].key != w[1].key || w[0].idx < w[1].idx)
}

#[doc(hidden)]
pub use paste;

pub mod patterns;
pub mod tests;
