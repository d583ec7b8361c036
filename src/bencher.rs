//! Side-by-side timing of the built-in strategies.

use std::{
    cell::Cell,
    hint::black_box,
    ops::Range,
    time::{Duration, Instant},
};

use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{strategy::Algorithm, utils::is_sorted, Sorter};

const VALUE_RANGE: Range<i64> = -10000..10000;

/// Records the duration of a single timed region per iteration.
pub struct Bencher {
    elapsed: Cell<Option<Duration>>,
}

/// Measures from creation until drop.
pub struct BenchTimer<'a> {
    start_time: Instant,
    bencher: &'a Bencher,
}

impl<'a> Drop for BenchTimer<'a> {
    fn drop(&mut self) {
        let elapsed = self.start_time.elapsed();
        let previous = self.bencher.elapsed.replace(Some(elapsed));
        assert!(previous.is_none(), "More than one benchmark timer detected");
    }
}

impl Bencher {
    pub fn new() -> Self {
        Self {
            elapsed: Cell::new(None),
        }
    }

    pub fn start_timing(&self) -> BenchTimer<'_> {
        BenchTimer {
            start_time: Instant::now(),
            bencher: self,
        }
    }

    pub fn time<R>(&self, f: impl FnOnce() -> R) -> R {
        let _timer = self.start_timing();
        f()
    }

    /// Take the recorded duration, resetting the bencher for the next iteration.
    pub fn take_elapsed(&self) -> Option<Duration> {
        self.elapsed.take()
    }
}

impl Default for Bencher {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing of one strategy over one input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub len: usize,
    /// Wall time of the final (non-warmup) iteration
    pub elapsed_ms: f64,
}

/// A reproducible input of `len` integers.
pub fn random_input(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(VALUE_RANGE)).collect()
}

/// Sort `input` with every algorithm in `algorithms` and time it.
///
/// The first `iterations - 1` runs of each algorithm are warmups; only the
/// last one is reported. Every output must be sorted and identical to the
/// output of the first algorithm.
pub fn compare(
    algorithms: &[Algorithm],
    input: &[i64],
    iterations: usize,
) -> anyhow::Result<Vec<Measurement>> {
    if iterations == 0 {
        anyhow::bail!("At least one iteration is required");
    }
    let bencher = Bencher::new();
    let mut expected: Option<Vec<i64>> = None;
    let mut measurements = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        let sorter = Sorter::with_algorithm(algorithm);
        let mut output = Vec::new();
        let mut elapsed = Duration::ZERO;
        for i in 0..iterations {
            let is_timing_iteration = i == iterations - 1;
            output = bencher.time(|| sorter.sort_data(black_box(input)));
            let Some(time) = bencher.take_elapsed() else {
                anyhow::bail!("No benchmark timer detected");
            };
            if is_timing_iteration {
                elapsed = time;
            } else {
                log::debug!(
                    "{} completed warmup {} in {:.3} msec",
                    algorithm,
                    i + 1,
                    to_msec(time)
                );
            }
        }
        if !is_sorted(&output) {
            anyhow::bail!("{} produced unsorted output", algorithm);
        }
        if expected.is_none() {
            expected = Some(output);
        } else if expected.as_ref() != Some(&output) {
            anyhow::bail!("{} disagrees with {}", algorithm, algorithms[0]);
        }
        log::info!(
            "{} sorted {} elements in {:.3} msec",
            algorithm,
            input.len(),
            to_msec(elapsed)
        );
        measurements.push(Measurement {
            algorithm,
            len: input.len(),
            elapsed_ms: to_msec(elapsed),
        });
    }
    Ok(measurements)
}

fn to_msec(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_records_once_per_iteration() {
        let bencher = Bencher::new();
        let value = bencher.time(|| 40 + 2);
        assert_eq!(value, 42);
        assert!(bencher.take_elapsed().is_some());
        assert!(bencher.take_elapsed().is_none());
    }

    #[test]
    #[should_panic(expected = "More than one benchmark timer detected")]
    fn second_timer_panics() {
        let bencher = Bencher::new();
        bencher.time(|| ());
        bencher.time(|| ());
    }

    #[test]
    fn random_input_is_reproducible() {
        assert_eq!(random_input(100, 7), random_input(100, 7));
        assert_ne!(random_input(100, 7), random_input(100, 8));
        assert!(random_input(500, 1)
            .iter()
            .all(|v| VALUE_RANGE.contains(v)));
    }

    #[test]
    fn zero_iterations_is_an_error() {
        assert!(compare(&Algorithm::ALL, &[1, 2, 3], 0).is_err());
    }
}
