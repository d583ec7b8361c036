use std::cmp::Ordering;

use super::SortStrategy;

/// Repeated adjacent compare-and-swap passes. O(n²), stable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BubbleSort;

impl<T: Ord + Clone> SortStrategy<T> for BubbleSort {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn sort(&self, data: &[T]) -> Vec<T> {
        sort_by(data, |a, b| a.cmp(b))
    }
}

/// Bubble sort a copy of `data` using `compare`.
///
/// Only strictly out-of-order pairs are swapped, so equal elements keep
/// their relative order.
pub fn sort_by<T, F>(data: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut items = data.to_vec();
    let n = items.len();
    for i in 0..n {
        // After pass `i` the last `i + 1` slots hold their final values.
        for j in 0..n - i - 1 {
            if compare(&items[j], &items[j + 1]) == Ordering::Greater {
                items.swap(j, j + 1);
            }
        }
    }
    items
}
