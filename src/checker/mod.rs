//! Checker Module
//!
//! Composable property checkers, the ready-made checker library, and the
//! number memo cache backing the expensive ones.

mod library;
mod memo;
mod property;
mod stats;

// Re-export public types
pub use library::{
    all_of, any_of, contains_pattern, empty_collections, even_numbers, has_length, has_size,
    in_range, negative_numbers, odd_numbers, palindromes, positive_numbers, valid_emails,
    CheckerLibrary, EMAIL_PATTERN,
};
pub use memo::{is_perfect, is_prime, NumberCache, SEED_PRIMES};
pub use property::PropertyChecker;
pub use stats::CacheStats;
