//! Interchangeable sorting algorithms.
//!
//! Every algorithm is available twice: as a [`SortStrategy`] implementation
//! that a [`Sorter`](crate::Sorter) can hold, and as a free `sort_by`
//! function taking an explicit comparator.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub mod bubble;
pub mod merge;
pub mod quick;

pub use bubble::BubbleSort;
pub use merge::MergeSort;
pub use quick::QuickSort;

/// A sorting algorithm that can be swapped in and out of a [`Sorter`](crate::Sorter).
///
/// Implementations must not mutate the input: `sort` returns a new sequence
/// holding the same elements in non-decreasing order.
pub trait SortStrategy<T> {
    /// Human readable label, used for display and logging only.
    fn name(&self) -> &'static str;

    fn sort(&self, data: &[T]) -> Vec<T>;
}

/// The built-in strategies, as a plain tag.
///
/// This is what configs and command-line flags name. Use
/// [`Algorithm::strategy`] to turn it into something a sorter can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Quick,
    Merge,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Quick, Algorithm::Merge];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
        }
    }

    pub fn strategy<T: Ord + Clone>(&self) -> Box<dyn SortStrategy<T>> {
        match self {
            Algorithm::Bubble => Box::new(BubbleSort),
            Algorithm::Quick => Box::new(QuickSort),
            Algorithm::Merge => Box::new(MergeSort),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        let algorithm = match normalized.trim_end_matches(" sort").trim() {
            "bubble" => Algorithm::Bubble,
            "quick" => Algorithm::Quick,
            "merge" => Algorithm::Merge,
            _ => anyhow::bail!(
                "invalid strategy `{}`; expected one of: bubble, quick, merge",
                s
            ),
        };
        Ok(algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_display_names() -> anyhow::Result<()> {
        assert_eq!("bubble".parse::<Algorithm>()?, Algorithm::Bubble);
        assert_eq!("Quick Sort".parse::<Algorithm>()?, Algorithm::Quick);
        assert_eq!("merge-sort".parse::<Algorithm>()?, Algorithm::Merge);
        assert_eq!(" MERGE_SORT ".parse::<Algorithm>()?, Algorithm::Merge);
        Ok(())
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "heap".parse::<Algorithm>().unwrap_err();
        assert!(err.to_string().starts_with("invalid strategy `heap`"));
        assert!("".parse::<Algorithm>().is_err());
        assert!("sort".parse::<Algorithm>().is_err());
    }

    #[test]
    fn display_matches_strategy_name() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string(), algorithm.strategy::<i32>().name());
        }
    }
}
