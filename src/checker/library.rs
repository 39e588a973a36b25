//! Checker Library Module
//!
//! Ready-made checkers for numeric, string and collection properties, plus
//! variadic composition.

use std::sync::{Arc, OnceLock};

use regex::Regex;

use crate::checker::{CacheStats, NumberCache, PropertyChecker};
use crate::error::{CounterError, Result};

/// Shape heuristic for `local@domain.tld`, not RFC 5322 validation.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email regex must compile"))
}

// == Numeric Checkers ==

/// Odd integers.
pub fn odd_numbers() -> PropertyChecker<i64> {
    PropertyChecker::new(|n: &i64| n % 2 != 0)
}

/// Even integers.
pub fn even_numbers() -> PropertyChecker<i64> {
    PropertyChecker::new(|n: &i64| n % 2 == 0)
}

/// Values strictly greater than `T::default()`.
pub fn positive_numbers<T>() -> PropertyChecker<T>
where
    T: PartialOrd + Default + 'static,
{
    PropertyChecker::new(|n: &T| *n > T::default())
}

/// Values strictly less than `T::default()`.
pub fn negative_numbers<T>() -> PropertyChecker<T>
where
    T: PartialOrd + Default + 'static,
{
    PropertyChecker::new(|n: &T| *n < T::default())
}

/// Values within `[min, max]`.
///
/// Fails when `min > max` or when the bounds cannot be ordered against each
/// other (a NaN bound, for instance).
pub fn in_range<T>(min: T, max: T) -> Result<PropertyChecker<T>>
where
    T: PartialOrd + Send + Sync + 'static,
{
    match min.partial_cmp(&max) {
        None => Err(CounterError::invalid("Range bounds must be comparable")),
        Some(std::cmp::Ordering::Greater) => Err(CounterError::invalid(
            "Minimum value cannot be greater than maximum value",
        )),
        Some(_) => Ok(PropertyChecker::new(move |n: &T| *n >= min && *n <= max)),
    }
}

// == String Checkers ==

/// Strings that read the same both ways, ignoring whitespace and case.
///
/// An empty (or all-whitespace) string counts as a palindrome.
pub fn palindromes() -> PropertyChecker<str> {
    PropertyChecker::new(|s: &str| {
        let normalized: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        let (mut left, mut right) = (0, normalized.len());
        while left + 1 < right {
            right -= 1;
            if normalized[left] != normalized[right] {
                return false;
            }
            left += 1;
        }
        true
    })
}

/// Strings containing `pattern` as a substring.
pub fn contains_pattern(pattern: &str, ignore_case: bool) -> PropertyChecker<str> {
    if ignore_case {
        let needle = pattern.to_lowercase();
        PropertyChecker::new(move |s: &str| s.to_lowercase().contains(&needle))
    } else {
        let needle = pattern.to_owned();
        PropertyChecker::new(move |s: &str| s.contains(&needle))
    }
}

/// Strings of exactly `length` characters.
pub fn has_length(length: i64) -> Result<PropertyChecker<str>> {
    let length =
        usize::try_from(length).map_err(|_| CounterError::invalid("Length cannot be negative"))?;
    Ok(PropertyChecker::new(move |s: &str| s.chars().count() == length))
}

/// Strings shaped like an email address. See [`EMAIL_PATTERN`].
pub fn valid_emails() -> PropertyChecker<str> {
    let re = email_re();
    PropertyChecker::new(move |s: &str| re.is_match(s))
}

// == Collection Checkers ==

/// Empty collections.
pub fn empty_collections<U: 'static>() -> PropertyChecker<Vec<U>> {
    PropertyChecker::new(|items: &Vec<U>| items.is_empty())
}

/// Collections holding exactly `size` elements.
pub fn has_size<U: 'static>(size: i64) -> Result<PropertyChecker<Vec<U>>> {
    let size = usize::try_from(size).map_err(|_| CounterError::invalid("Size cannot be negative"))?;
    Ok(PropertyChecker::new(move |items: &Vec<U>| items.len() == size))
}

// == Composition ==

/// Passes when every checker passes. An empty slice accepts everything.
pub fn all_of<T: ?Sized + 'static>(checkers: &[PropertyChecker<T>]) -> PropertyChecker<T> {
    if checkers.is_empty() {
        return PropertyChecker::always_true();
    }
    let checkers = checkers.to_vec();
    PropertyChecker::fallible(move |element| {
        for checker in &checkers {
            if !checker.evaluate(element)? {
                return Ok(false);
            }
        }
        Ok(true)
    })
}

/// Passes when any checker passes. An empty slice rejects everything.
pub fn any_of<T: ?Sized + 'static>(checkers: &[PropertyChecker<T>]) -> PropertyChecker<T> {
    if checkers.is_empty() {
        return PropertyChecker::always_false();
    }
    let checkers = checkers.to_vec();
    PropertyChecker::fallible(move |element| {
        for checker in &checkers {
            if checker.evaluate(element)? {
                return Ok(true);
            }
        }
        Ok(false)
    })
}

// == Checker Library ==
/// Hands out checkers that memoize through a shared [`NumberCache`].
#[derive(Debug, Clone, Default)]
pub struct CheckerLibrary {
    cache: Arc<NumberCache>,
}

impl CheckerLibrary {
    /// Creates a library with its own seeded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a library that shares an existing cache.
    pub fn with_cache(cache: Arc<NumberCache>) -> Self {
        Self { cache }
    }

    /// Returns the shared cache.
    pub fn cache(&self) -> &Arc<NumberCache> {
        &self.cache
    }

    /// Prime integers, memoized.
    pub fn prime_numbers(&self) -> PropertyChecker<i64> {
        let cache = Arc::clone(&self.cache);
        PropertyChecker::new(move |n: &i64| cache.is_prime(*n))
    }

    /// Perfect integers, memoized.
    pub fn perfect_numbers(&self) -> PropertyChecker<i64> {
        let cache = Arc::clone(&self.cache);
        PropertyChecker::new(move |n: &i64| cache.is_perfect(*n))
    }

    /// Empties both memo sets.
    pub fn clear_caches(&self) {
        self.cache.clear();
    }

    /// Reports memo sizes and lookup counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
