//! Counting Engine Module
//!
//! Applies a property checker across a slice and reports counts, details,
//! partitions and transformed counts.

use std::any::Any;
use std::borrow::Borrow;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, warn};

use crate::checker::{all_of, PropertyChecker};
use crate::config::Config;
use crate::counter::{CountResult, FailureSink, Partition, ResultCache, TracingSink};
use crate::error::{CounterError, Result};

// == Property Counter ==
/// Counts, partitions and transforms slices using property checkers.
///
/// A checker that fails or panics on an element never aborts the scan: the
/// element is treated as a non-match and the failure is sent to the
/// configured [`FailureSink`].
///
/// Slices at or above the parallel threshold are evaluated with rayon on a
/// pool sized from `worker_threads`. Verdicts come back in input order, so
/// every operation returns exactly what a sequential scan would.
pub struct PropertyCounter {
    /// Minimum slice length before scans go parallel
    parallel_threshold: usize,
    /// Pool for parallel scans; `None` keeps every scan sequential
    pool: Option<ThreadPool>,
    /// Named counts for `count_with_cache`
    results: ResultCache,
    /// Destination for per-element evaluation failures
    sink: Arc<dyn FailureSink>,
}

impl PropertyCounter {
    // == Constructor ==
    /// Creates a counter using [`Config::default`].
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Creates a counter from loaded configuration.
    ///
    /// A worker pool is only built for `worker_threads > 1`. If the pool
    /// cannot be built the counter logs a warning and scans sequentially.
    pub fn from_config(config: &Config) -> Self {
        Self {
            parallel_threshold: config.parallel_threshold,
            pool: build_pool(config.worker_threads),
            results: ResultCache::new(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Replaces the failure sink.
    pub fn with_sink(mut self, sink: Arc<dyn FailureSink>) -> Self {
        self.sink = sink;
        self
    }

    // == Count ==
    /// Counts elements that have the property.
    pub fn count<T, E>(&self, items: &[E], checker: &PropertyChecker<T>) -> usize
    where
        T: ?Sized + 'static,
        E: Borrow<T> + Debug + Sync,
    {
        self.verdicts(items, |item| self.check(item, item.borrow(), checker))
            .into_iter()
            .filter(|&hit| hit)
            .count()
    }

    // == Count With Cache ==
    /// Counts elements, reusing the count previously stored under `key`.
    ///
    /// The key must identify the same logical query every time it is used;
    /// nothing verifies that the slice or checker match the cached entry.
    pub fn count_with_cache<T, E>(
        &self,
        items: &[E],
        checker: &PropertyChecker<T>,
        key: &str,
    ) -> usize
    where
        T: ?Sized + 'static,
        E: Borrow<T> + Debug + Sync,
    {
        if let Some(count) = self.results.get(key) {
            debug!("Result cache hit for key '{}'", key);
            return count;
        }

        debug!("Result cache miss for key '{}'", key);
        let count = self.count(items, checker);
        self.results.insert(key, count);
        count
    }

    // == Count With Details ==
    /// Counts elements and returns the sorted matches with summary figures.
    pub fn count_with_details<T, E>(
        &self,
        items: &[E],
        checker: &PropertyChecker<T>,
    ) -> CountResult<E>
    where
        T: ?Sized + 'static,
        E: Borrow<T> + Debug + Ord + Clone + Sync,
    {
        let verdicts = self.verdicts(items, |item| self.check(item, item.borrow(), checker));
        let mut matches: Vec<E> = items
            .iter()
            .zip(verdicts)
            .filter(|(_, hit)| *hit)
            .map(|(item, _)| item.clone())
            .collect();
        matches.sort();

        CountResult::new(matches, items.len())
    }

    // == Partition ==
    /// Splits the slice into elements with and without the property.
    pub fn partition_by_property<T, E>(
        &self,
        items: &[E],
        checker: &PropertyChecker<T>,
    ) -> Partition<E>
    where
        T: ?Sized + 'static,
        E: Borrow<T> + Debug + Clone + Sync,
    {
        let verdicts = self.verdicts(items, |item| self.check(item, item.borrow(), checker));
        let mut partition = Partition {
            matches: Vec::new(),
            non_matches: Vec::new(),
        };

        for (item, hit) in items.iter().zip(verdicts) {
            if hit {
                partition.matches.push(item.clone());
            } else {
                partition.non_matches.push(item.clone());
            }
        }
        partition
    }

    // == Count Multiple Properties ==
    /// Counts elements that satisfy every checker.
    ///
    /// Returns `InvalidArgument` when `checkers` is empty.
    pub fn count_multiple_properties<T, E>(
        &self,
        items: &[E],
        checkers: &[PropertyChecker<T>],
    ) -> Result<usize>
    where
        T: ?Sized + 'static,
        E: Borrow<T> + Debug + Sync,
    {
        if checkers.is_empty() {
            return Err(CounterError::invalid(
                "At least one property checker must be provided",
            ));
        }
        Ok(self.count(items, &all_of(checkers)))
    }

    // == Count After Transform ==
    /// Maps each element through `transformer`, then counts mapped values
    /// that have the property.
    pub fn count_after_transform<T, E, R, F>(
        &self,
        items: &[E],
        transformer: F,
        checker: &PropertyChecker<T>,
    ) -> usize
    where
        T: ?Sized + 'static,
        E: Debug + Sync,
        R: Borrow<T>,
        F: Fn(&E) -> R + Sync,
    {
        self.verdicts(items, |item| {
            let mapped = transformer(item);
            self.check(item, mapped.borrow(), checker)
        })
        .into_iter()
        .filter(|&hit| hit)
        .count()
    }

    // == Result Cache Management ==
    /// Drops every named count.
    pub fn clear_cache(&self) {
        let removed = self.results.clear();
        debug!("Result cache cleared: removed {} entries", removed);
    }

    /// Returns the number of named counts currently stored.
    pub fn cache_size(&self) -> usize {
        self.results.len()
    }

    // == Internals ==
    /// Evaluates one value, reporting and swallowing failures and panics.
    fn check<T, D>(&self, element: &D, value: &T, checker: &PropertyChecker<T>) -> bool
    where
        T: ?Sized + 'static,
        D: Debug + ?Sized,
    {
        match panic::catch_unwind(AssertUnwindSafe(|| checker.evaluate(value))) {
            Ok(Ok(hit)) => hit,
            Ok(Err(err)) => {
                self.sink.log(&format!(
                    "Property check failed for element {:?}: {}",
                    element, err
                ));
                false
            }
            Err(payload) => {
                self.sink.log(&format!(
                    "Property check panicked for element {:?}: {}",
                    element,
                    panic_message(payload.as_ref())
                ));
                false
            }
        }
    }

    /// Runs `test` over every element, on the worker pool for large slices.
    /// The returned verdicts line up with `items`.
    fn verdicts<E, F>(&self, items: &[E], test: F) -> Vec<bool>
    where
        E: Sync,
        F: Fn(&E) -> bool + Sync,
    {
        match &self.pool {
            Some(pool) if items.len() >= self.parallel_threshold && items.len() > 1 => {
                debug!(
                    "Parallel scan: {} elements across {} workers",
                    items.len(),
                    pool.current_num_threads()
                );
                pool.install(|| items.par_iter().map(&test).collect())
            }
            _ => items.iter().map(&test).collect(),
        }
    }
}

fn build_pool(worker_threads: usize) -> Option<ThreadPool> {
    if worker_threads < 2 {
        return None;
    }

    ThreadPoolBuilder::new()
        .num_threads(worker_threads)
        .thread_name(|index| format!("property-counter-{}", index))
        .build()
        .map_err(|err| warn!("Falling back to sequential scans: {}", err))
        .ok()
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

impl Default for PropertyCounter {
    fn default() -> Self {
        Self::new()
    }
}
