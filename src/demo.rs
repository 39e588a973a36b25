//! Demo Scenarios
//!
//! Walkthrough of the counting engine used by the binary. Each section
//! exercises one family of checkers and records its results in the report.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::checker::{
    any_of, contains_pattern, empty_collections, even_numbers, has_length, has_size, in_range,
    odd_numbers, palindromes, positive_numbers, valid_emails, CheckerLibrary, PropertyChecker,
};
use crate::config::Config;
use crate::counter::PropertyCounter;
use crate::models::{DemoReport, Finding, SectionReport};

#[derive(Debug, Clone)]
struct Product {
    name: &'static str,
    price: f64,
    rating: f64,
    in_stock: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
struct Student {
    name: &'static str,
    grade: u32,
    major: &'static str,
}

#[derive(Debug, Clone)]
struct Transaction {
    date: &'static str,
    amount: f64,
}

impl Product {
    fn new(name: &'static str, price: f64, rating: f64, in_stock: bool) -> Self {
        Self {
            name,
            price,
            rating,
            in_stock,
        }
    }
}

impl Student {
    fn new(name: &'static str, grade: u32, major: &'static str) -> Self {
        Self { name, grade, major }
    }
}

impl Transaction {
    fn new(date: &'static str, amount: f64) -> Self {
        Self { date, amount }
    }
}

/// Runs every section and returns the assembled report.
///
/// Both caches are cleared before returning; the report captures their state
/// just before that.
pub fn run(config: &Config) -> Result<DemoReport> {
    let counter = PropertyCounter::from_config(config);
    let library = CheckerLibrary::new();

    let sections = vec![
        basic_counting(&counter, &library),
        numerical_properties(&counter, &library, config.demo_size)?,
        string_operations(&counter)?,
        collection_operations(&counter)?,
        composition(&counter, &library)?,
        caching(&counter, &library),
        real_world(&counter)?,
    ];

    let report = DemoReport::new(sections, library.cache_stats(), counter.cache_size());

    counter.clear_cache();
    library.clear_caches();
    Ok(report)
}

fn one_to(n: i64) -> Vec<i64> {
    (1..=n).collect()
}

fn basic_counting(counter: &PropertyCounter, library: &CheckerLibrary) -> SectionReport {
    info!("Section: basic counting");
    let numbers = one_to(100);
    let words = [
        "radar", "hello", "madam", "world", "level", "java", "noon", "generics", "racecar",
        "algorithm", "palindrome", "civic", "refer", "stats",
    ];

    SectionReport::new("Basic Counting")
        .with(Finding::count("odd numbers in 1..=100", counter.count(&numbers, &odd_numbers())))
        .with(Finding::count("even numbers in 1..=100", counter.count(&numbers, &even_numbers())))
        .with(Finding::count(
            "primes in 1..=100",
            counter.count(&numbers, &library.prime_numbers()),
        ))
        .with(Finding::count("palindromic words", counter.count(&words, &palindromes())))
}

fn numerical_properties(
    counter: &PropertyCounter,
    library: &CheckerLibrary,
    demo_size: i64,
) -> Result<SectionReport> {
    info!("Section: numerical properties up to {}", demo_size);
    let numbers = one_to(demo_size);
    let perfect = library.perfect_numbers();

    let perfect_split = counter.partition_by_property(&numbers, &perfect);
    let odd_primes =
        counter.count_multiple_properties(&numbers, &[odd_numbers(), library.prime_numbers()])?;
    let prime_analysis = counter.count_with_details(&numbers, &library.prime_numbers());

    Ok(SectionReport::new("Numerical Properties")
        .with(Finding::count("perfect numbers", perfect_split.matches.len()))
        .with(Finding::json("perfect numbers found", &perfect_split.matches)?)
        .with(Finding::count(
            "numbers in [100, 200]",
            counter.count(&numbers, &in_range(100i64, 200)?),
        ))
        .with(Finding::count("odd primes", odd_primes))
        .with(Finding::text(
            "prime analysis",
            format!(
                "{} primes out of {} numbers ({:.2}%)",
                prime_analysis.match_count(),
                prime_analysis.total_count(),
                prime_analysis.percentage()
            ),
        )))
}

fn string_operations(counter: &PropertyCounter) -> Result<SectionReport> {
    info!("Section: string operations");
    let strings = [
        "radar",
        "Madam",
        "A man a plan a canal Panama",
        "hello world",
        "racecar",
        "java@example.com",
        "test@domain.org",
        "invalid-email",
        "noon",
        "Level",
        "programming",
        "user@company.com",
    ];

    let five_chars = counter.partition_by_property(&strings, &has_length(5)?);

    Ok(SectionReport::new("String Operations")
        .with(Finding::count("palindromes", counter.count(&strings, &palindromes())))
        .with(Finding::count("valid emails", counter.count(&strings, &valid_emails())))
        .with(Finding::count(
            "containing 'java' (any case)",
            counter.count(&strings, &contains_pattern("java", true)),
        ))
        .with(Finding::count("exactly 5 characters", five_chars.matches.len()))
        .with(Finding::json("5-character examples", &five_chars.matches)?))
}

fn collection_operations(counter: &PropertyCounter) -> Result<SectionReport> {
    info!("Section: collection operations");
    let collections: Vec<Vec<i64>> = vec![
        vec![1, 2, 3, 4, 5],
        Vec::new(),
        vec![42],
        (1..11).collect(),
        vec![1, 2, 3],
        vec![10, 20, 30, 40, 50, 60],
    ];

    let positive_size = counter.count_after_transform(
        &collections,
        |collection| collection.len() as i64,
        &positive_numbers::<i64>(),
    );

    Ok(SectionReport::new("Collection Operations")
        .with(Finding::count(
            "empty collections",
            counter.count(&collections, &empty_collections::<i64>()),
        ))
        .with(Finding::count(
            "collections of size 5",
            counter.count(&collections, &has_size::<i64>(5)?),
        ))
        .with(Finding::count("collections with positive size", positive_size)))
}

fn composition(counter: &PropertyCounter, library: &CheckerLibrary) -> Result<SectionReport> {
    info!("Section: composition");
    let numbers = one_to(200);

    let complex = any_of(&[odd_numbers(), even_numbers()])
        .and(&library.prime_numbers())
        .and(&in_range(10, 100)?);
    let not_prime = library.prime_numbers().negate();
    let chained = positive_numbers::<i64>()
        .and(&in_range(1, 50)?)
        .or(&library.perfect_numbers());

    Ok(SectionReport::new("Composition")
        .with(Finding::count(
            "(odd or even) and prime and in [10, 100]",
            counter.count(&numbers, &complex),
        ))
        .with(Finding::count("non-primes", counter.count(&numbers, &not_prime)))
        .with(Finding::text(
            "positive and in [1, 50], or perfect",
            counter.count_with_details(&numbers, &chained),
        )))
}

fn caching(counter: &PropertyCounter, library: &CheckerLibrary) -> SectionReport {
    info!("Section: caching");
    let dataset = one_to(10_000);
    let primes = library.prime_numbers();

    let started = Instant::now();
    let first = counter.count_with_cache(&dataset, &primes, "large_prime_test");
    let first_elapsed = started.elapsed();

    let started = Instant::now();
    let second = counter.count_with_cache(&dataset, &primes, "large_prime_test");
    let second_elapsed = started.elapsed();

    info!(
        "Prime count: first run {:?}, cached run {:?}",
        first_elapsed, second_elapsed
    );

    SectionReport::new("Caching")
        .with(Finding::count("primes in 1..=10000 (first run)", first))
        .with(Finding::count("primes in 1..=10000 (cached run)", second))
        .with(Finding::text("number cache", library.cache_stats()))
        .with(Finding::count("named result entries", counter.cache_size()))
}

fn real_world(counter: &PropertyCounter) -> Result<SectionReport> {
    info!("Section: real-world records");
    let products = [
        Product::new("Laptop", 1299.99, 4.5, true),
        Product::new("Phone", 899.99, 4.2, true),
        Product::new("Tablet", 599.99, 3.8, false),
        Product::new("Watch", 399.99, 4.7, true),
        Product::new("Headphones", 199.99, 4.1, false),
    ];
    let students = [
        Student::new("Alice", 95, "Computer Science"),
        Student::new("Bob", 87, "Mathematics"),
        Student::new("Charlie", 76, "Computer Science"),
        Student::new("Diana", 92, "Mathematics"),
        Student::new("Eve", 89, "Physics"),
    ];
    let transactions = [
        Transaction::new("2024-01-15", 1500.00),
        Transaction::new("2024-01-16", -300.50),
        Transaction::new("2024-01-17", 2200.00),
        Transaction::new("2024-01-18", -150.75),
        Transaction::new("2024-01-19", -1000.00),
    ];

    let premium =
        PropertyChecker::new(|p: &Product| p.price > 500.0 && p.rating > 4.0 && p.in_stock);
    let top_cs =
        PropertyChecker::new(|s: &Student| s.grade >= 90 && s.major == "Computer Science");
    let large = PropertyChecker::new(|t: &Transaction| t.amount.abs() > 1000.0);

    let premium_names: Vec<&str> = counter
        .partition_by_property(&products, &premium)
        .matches
        .iter()
        .map(|p| p.name)
        .collect();
    let top_students = counter.count_with_details(&students, &top_cs);
    let large_dates: Vec<&str> = counter
        .partition_by_property(&transactions, &large)
        .matches
        .iter()
        .map(|t| t.date)
        .collect();

    Ok(SectionReport::new("Real-World Records")
        .with(Finding::count("premium products in stock", premium_names.len()))
        .with(Finding::json("premium products", &premium_names)?)
        .with(Finding::json("top computer science students", &top_students)?)
        .with(Finding::count("large transactions", large_dates.len()))
        .with(Finding::json("large transaction dates", &large_dates)?))
}
