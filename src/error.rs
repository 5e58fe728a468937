//! Error type for the distribution sorts.
//!
//! Comparison sorts are total over any input and never fail. Counting, radix and integer bucket
//! sort need a bounded, known key range and reject inputs that fall outside it before touching the
//! sequence, so an `Err` always leaves the input exactly as it was passed in.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for the range-bound sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// Integer bucket sort was asked to use buckets of width 0.
    ZeroBucketWidth,

    /// Radix sort only handles non-negative keys, use `radix::sort_signed` for the rest.
    NegativeKey {
        /// The offending key, the smallest one found in the input.
        value: i128,
    },

    /// The count table or bucket vector for this input would exceed the allowed size.
    RangeTooLarge {
        /// Number of slots the input would need.
        span: u128,
        /// Maximum number of slots allowed.
        limit: usize,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SortError::ZeroBucketWidth => write!(f, "Bucket width must be greater than zero"),
            SortError::NegativeKey { value } => {
                write!(f, "Negative key {value} is not supported by this radix sort")
            }
            SortError::RangeTooLarge { span, limit } => write!(
                f,
                "Key range needs {span} slots, which exceeds the limit of {limit}"
            ),
        }
    }
}

impl Error for SortError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let msg = SortError::RangeTooLarge {
            span: 1 << 40,
            limit: 16,
        }
        .to_string();
        assert!(msg.contains("1099511627776"));
        assert!(msg.contains("16"));

        assert_eq!(
            SortError::NegativeKey { value: -3 }.to_string(),
            "Negative key -3 is not supported by this radix sort"
        );
    }
}
