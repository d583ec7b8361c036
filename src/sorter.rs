use std::fmt;

use crate::strategy::{Algorithm, SortStrategy};

/// Sorts data with whichever strategy it currently holds.
///
/// The sorter owns exactly one strategy at a time. It can be replaced at any
/// point with [`Sorter::set_strategy`]; the change applies to the next call
/// to [`Sorter::sort_data`].
///
/// ```
/// use sort_strategy::{BubbleSort, QuickSort, Sorter};
///
/// let mut sorter = Sorter::new(BubbleSort);
/// sorter.set_strategy(QuickSort);
/// assert_eq!(sorter.sort_data(&[3, 1, 2]), vec![1, 2, 3]);
/// assert_eq!(sorter.strategy_name(), "Quick Sort");
/// ```
pub struct Sorter<T> {
    strategy: Box<dyn SortStrategy<T>>,
}

impl<T> Sorter<T> {
    pub fn new(strategy: impl SortStrategy<T> + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub fn set_strategy(&mut self, strategy: impl SortStrategy<T> + 'static) {
        self.replace(Box::new(strategy));
    }

    /// Sort `data` with the current strategy. The input is left untouched.
    pub fn sort_data(&self, data: &[T]) -> Vec<T> {
        log::trace!(
            "sorting {} elements with {}",
            data.len(),
            self.strategy.name()
        );
        self.strategy.sort(data)
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn strategy(&self) -> &dyn SortStrategy<T> {
        self.strategy.as_ref()
    }

    fn replace(&mut self, strategy: Box<dyn SortStrategy<T>>) {
        log::debug!(
            "switching sort strategy: {} -> {}",
            self.strategy.name(),
            strategy.name()
        );
        self.strategy = strategy;
    }
}

impl<T: Ord + Clone> Sorter<T> {
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self {
            strategy: algorithm.strategy(),
        }
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.replace(algorithm.strategy());
    }
}

impl<T: Ord + Clone> From<Algorithm> for Sorter<T> {
    fn from(algorithm: Algorithm) -> Self {
        Self::with_algorithm(algorithm)
    }
}

impl<T> fmt::Debug for Sorter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sorter")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
