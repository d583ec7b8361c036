use std::cmp::Ordering;

use super::SortStrategy;

/// Three-way partitioning quicksort around the middle element.
///
/// The pivot is always `items[len / 2]`. That avoids the classic
/// first/last-element blowup on sorted input, but a crafted input can still
/// drive it to O(n²) comparisons and O(n) recursion depth.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuickSort;

impl<T: Ord + Clone> SortStrategy<T> for QuickSort {
    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn sort(&self, data: &[T]) -> Vec<T> {
        sort_by(data, |a, b| a.cmp(b))
    }
}

/// Quicksort a copy of `data` using `compare`.
pub fn sort_by<T, F>(data: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(data.to_vec(), &mut compare)
}

fn quicksort<T, F>(items: Vec<T>, compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let pivot = items[items.len() / 2].clone();
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    // Each group keeps the original relative order of its members.
    for item in items {
        match compare(&item, &pivot) {
            Ordering::Less => less.push(item),
            Ordering::Equal => equal.push(item),
            Ordering::Greater => greater.push(item),
        }
    }
    let mut sorted = quicksort(less, compare);
    sorted.extend(equal);
    sorted.extend(quicksort(greater, compare));
    sorted
}
