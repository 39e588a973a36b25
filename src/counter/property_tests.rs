//! Property-Based Tests for the Counter Module
//!
//! Uses proptest to check the algebraic laws every counting operation obeys.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

use crate::checker::{
    even_numbers, in_range, odd_numbers, palindromes, CheckerLibrary, PropertyChecker,
};
use crate::config::Config;
use crate::counter::{MemorySink, PropertyCounter};
use crate::error::CounterError;

// == Strategies ==
/// Non-negative integer sequences
fn naturals_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..10_000, 0..200)
}

/// Arbitrary integer sequences, negatives included
fn integers_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-10_000i64..10_000, 0..200)
}

/// Picks one of several integer checkers
fn checker_strategy() -> impl Strategy<Value = PropertyChecker<i64>> {
    prop_oneof![
        Just(odd_numbers()),
        Just(even_numbers()),
        Just(CheckerLibrary::new().prime_numbers()),
        Just(CheckerLibrary::new().perfect_numbers()),
        (-100i64..100, 0i64..200).prop_map(|(lo, span)| in_range(lo, lo + span).unwrap()),
    ]
}

fn sequential() -> PropertyCounter {
    PropertyCounter::from_config(&Config::sequential())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Odd and even counts add up to the sequence length
    #[test]
    fn prop_parity_counts_cover_sequence(numbers in naturals_strategy()) {
        let counter = sequential();
        let odd = counter.count(&numbers, &odd_numbers());
        let even = counter.count(&numbers, &even_numbers());
        prop_assert_eq!(odd + even, numbers.len());
    }

    // Every element lands in exactly one side of the partition
    #[test]
    fn prop_partition_is_complete_and_disjoint(
        numbers in integers_strategy(),
        checker in checker_strategy()
    ) {
        let counter = sequential();
        let partition = counter.partition_by_property(&numbers, &checker);
        prop_assert_eq!(partition.len(), numbers.len());

        let mut expected: HashMap<i64, usize> = HashMap::new();
        for n in &numbers {
            *expected.entry(*n).or_default() += 1;
        }
        let mut seen: HashMap<i64, usize> = HashMap::new();
        for n in partition.matches.iter().chain(&partition.non_matches) {
            *seen.entry(*n).or_default() += 1;
        }
        prop_assert_eq!(seen, expected);

        prop_assert!(partition.matches.iter().all(|n| checker.has_property(n)));
        prop_assert!(partition.non_matches.iter().all(|n| !checker.has_property(n)));
    }

    // Double negation is the identity
    #[test]
    fn prop_double_negation(numbers in integers_strategy(), checker in checker_strategy()) {
        let counter = sequential();
        prop_assert_eq!(
            counter.count(&numbers, &checker),
            counter.count(&numbers, &checker.negate().negate())
        );
    }

    // Multiple properties behave like a single AND-composed checker
    #[test]
    fn prop_multiple_properties_equals_and(
        numbers in integers_strategy(),
        first in checker_strategy(),
        second in checker_strategy()
    ) {
        let counter = sequential();
        let multiple = counter
            .count_multiple_properties(&numbers, &[first.clone(), second.clone()])
            .unwrap();
        prop_assert_eq!(multiple, counter.count(&numbers, &first.and(&second)));
    }

    // Details agree with the plain count and stay within bounds
    #[test]
    fn prop_details_consistent_with_count(
        numbers in integers_strategy(),
        checker in checker_strategy()
    ) {
        let counter = sequential();
        let details = counter.count_with_details(&numbers, &checker);

        prop_assert_eq!(details.match_count(), counter.count(&numbers, &checker));
        prop_assert!(details.match_count() <= details.total_count());
        prop_assert!((0.0..=100.0).contains(&details.percentage()));
        prop_assert!(details.matching_elements().windows(2).all(|w| w[0] <= w[1]));
    }

    // The named cache returns the same count before and after clearing
    #[test]
    fn prop_cache_idempotent(numbers in naturals_strategy(), checker in checker_strategy()) {
        let counter = sequential();
        let first = counter.count_with_cache(&numbers, &checker, "k");
        let second = counter.count_with_cache(&numbers, &checker, "k");
        prop_assert_eq!(first, second);

        counter.clear_cache();
        let third = counter.count_with_cache(&numbers, &checker, "k");
        prop_assert_eq!(first, third);
    }

    // Clearing the number memo never changes an answer
    #[test]
    fn prop_memo_clear_preserves_results(numbers in naturals_strategy()) {
        let counter = sequential();
        let library = CheckerLibrary::new();
        let primes = library.prime_numbers();

        let before = counter.count(&numbers, &primes);
        library.clear_caches();
        prop_assert_eq!(counter.count(&numbers, &primes), before);
    }

    // Parallel scans return exactly what sequential scans return
    #[test]
    fn prop_parallel_equals_sequential(
        numbers in integers_strategy(),
        checker in checker_strategy(),
        workers in 2usize..8
    ) {
        let parallel = PropertyCounter::from_config(&Config {
            parallel_threshold: 1,
            worker_threads: workers,
            ..Config::default()
        });
        let counter = sequential();

        prop_assert_eq!(
            parallel.partition_by_property(&numbers, &checker),
            counter.partition_by_property(&numbers, &checker)
        );
        prop_assert_eq!(
            parallel.count_with_details(&numbers, &checker),
            counter.count_with_details(&numbers, &checker)
        );
    }

    // A failing element is excluded and reported, never fatal
    #[test]
    fn prop_failures_only_exclude_failing_elements(numbers in integers_strategy()) {
        let sink = Arc::new(MemorySink::new());
        let counter = sequential().with_sink(sink.clone());
        let checker = PropertyChecker::fallible(|n: &i64| {
            if *n < 0 {
                Err(CounterError::evaluation("negative input"))
            } else {
                Ok(true)
            }
        });

        let negatives = numbers.iter().filter(|n| **n < 0).count();
        prop_assert_eq!(counter.count(&numbers, &checker), numbers.len() - negatives);
        prop_assert_eq!(sink.len(), negatives);
    }

    // Palindromes survive reversal
    #[test]
    fn prop_palindrome_reversal(word in "[a-zA-Z ]{0,20}") {
        let reversed: String = word.chars().rev().collect();
        let checker = palindromes();
        prop_assert_eq!(checker.has_property(&word), checker.has_property(&reversed));

        let mirrored = format!("{}{}", word, reversed);
        prop_assert!(checker.has_property(&mirrored));
    }
}
