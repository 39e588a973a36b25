//! Number Memo Module
//!
//! Primality and perfect-number tests plus a shared cache of confirmed results.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::checker::CacheStats;

// == Public Constants ==
/// Primes below 100, seeded into every new [`NumberCache`].
pub const SEED_PRIMES: [i64; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

// == Primality ==
/// Trial division over divisors of the form 6k ± 1 up to √n.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i: i64 = 5;
    // `i <= n / i` is `i * i <= n` without overflow
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

// == Perfect Numbers ==
/// Returns true when `n` equals the sum of its proper divisors.
///
/// 1 is not perfect. Divisors are found in pairs `(i, n / i)` up to √n.
pub fn is_perfect(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut sum: i128 = 1;
    let mut i: i64 = 2;
    while i <= n / i {
        if n % i == 0 {
            sum += i as i128;
            let pair = n / i;
            if pair != i {
                sum += pair as i128;
            }
        }
        i += 1;
    }
    sum == n as i128
}

#[derive(Debug, Default)]
struct MemoSets {
    primes: HashSet<i64>,
    perfect: HashSet<i64>,
}

// == Number Cache ==
/// Shared memo of confirmed primes and perfect numbers.
///
/// Both sets live under one lock so [`clear`](Self::clear) is atomic for
/// readers. Entries only ever speed up lookups; dropping them changes latency,
/// never answers.
#[derive(Debug)]
pub struct NumberCache {
    sets: RwLock<MemoSets>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl NumberCache {
    // == Constructor ==
    /// Creates a cache pre-seeded with [`SEED_PRIMES`].
    pub fn new() -> Self {
        let cache = Self::empty();
        cache.sets.write().primes.extend(SEED_PRIMES);
        cache
    }

    /// Creates a cache with no entries.
    pub fn empty() -> Self {
        Self {
            sets: RwLock::new(MemoSets::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    // == Cached Primality ==
    /// Primality test that consults and feeds the memo.
    pub fn is_prime(&self, n: i64) -> bool {
        // Cheap rejections never touch the lock
        if n < 2 {
            return false;
        }
        if n == 2 {
            return true;
        }
        if n % 2 == 0 {
            return false;
        }

        if self.sets.read().primes.contains(&n) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return true;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let prime = is_prime(n);
        if prime {
            self.sets.write().primes.insert(n);
            debug!("Memoized prime {}", n);
        }
        prime
    }

    // == Cached Perfect Numbers ==
    /// Perfect-number test that consults and feeds the memo.
    pub fn is_perfect(&self, n: i64) -> bool {
        if n <= 1 {
            return false;
        }

        if self.sets.read().perfect.contains(&n) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return true;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let perfect = is_perfect(n);
        if perfect {
            self.sets.write().perfect.insert(n);
            debug!("Memoized perfect number {}", n);
        }
        perfect
    }

    // == Clear ==
    /// Empties both memo sets under a single write lock.
    pub fn clear(&self) {
        let mut sets = self.sets.write();
        let removed = sets.primes.len() + sets.perfect.len();
        sets.primes.clear();
        sets.perfect.clear();
        info!("Number cache cleared: removed {} entries", removed);
    }

    // == Stats ==
    /// Returns current memo sizes and lookup counters.
    pub fn stats(&self) -> CacheStats {
        let sets = self.sets.read();
        CacheStats {
            primes: sets.primes.len(),
            perfect_numbers: sets.perfect.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for NumberCache {
    fn default() -> Self {
        Self::new()
    }
}
