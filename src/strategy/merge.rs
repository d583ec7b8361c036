use std::cmp::Ordering;

use super::SortStrategy;

/// Top-down merge sort. O(n log n) in every case, stable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeSort;

impl<T: Ord + Clone> SortStrategy<T> for MergeSort {
    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn sort(&self, data: &[T]) -> Vec<T> {
        sort_by(data, |a, b| a.cmp(b))
    }
}

/// Merge sort a copy of `data` using `compare`.
pub fn sort_by<T, F>(data: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(data, &mut compare)
}

fn merge_sort<T, F>(items: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }
    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid], compare);
    let right = merge_sort(&items[mid..], compare);
    merge(left, right, compare)
}

/// Merge two sorted runs. Ties are taken from `left`.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let take_left = compare(l, r) != Ordering::Greater;
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
