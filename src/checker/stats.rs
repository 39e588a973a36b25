//! Cache Statistics Module
//!
//! Reports memo cache sizes and lookup outcomes for observability.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of the number memo cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Confirmed primes currently memoized
    pub primes: usize,
    /// Confirmed perfect numbers currently memoized
    pub perfect_numbers: usize,
    /// Lookups answered from the memo sets
    pub hits: u64,
    /// Lookups that had to be computed
    pub misses: u64,
}

impl CacheStats {
    // == Total Entries ==
    /// Returns the combined size of both memo sets.
    pub fn total_entries(&self) -> usize {
        self.primes + self.perfect_numbers
    }

    // == Hit Rate ==
    /// Calculates the memo hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache Stats - Primes: {}, Perfect Numbers: {}",
            self.primes, self.perfect_numbers
        )
    }
}
