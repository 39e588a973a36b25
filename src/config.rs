//! Configuration Module
//!
//! Handles loading counter and demo settings from environment variables.

use std::env;
use std::thread;

/// Counter configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum slice length before a scan is split across worker threads
    pub parallel_threshold: usize,
    /// Number of worker threads used for parallel scans
    pub worker_threads: usize,
    /// Upper bound of the numeric range used by the demo binary
    pub demo_size: i64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PARALLEL_THRESHOLD` - Minimum elements for a parallel scan (default: 10000)
    /// - `WORKER_THREADS` - Worker threads for parallel scans (default: available cores)
    /// - `DEMO_SIZE` - Upper bound of the demo range (default: 1000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            parallel_threshold: env::var("PARALLEL_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.parallel_threshold),
            worker_threads: env::var("WORKER_THREADS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.worker_threads),
            demo_size: env::var("DEMO_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.demo_size),
        }
    }

    /// Returns a sequential-only configuration.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            worker_threads: 1,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parallel_threshold: 10_000,
            worker_threads: thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            demo_size: 1000,
        }
    }
}
