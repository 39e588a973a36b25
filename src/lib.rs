//! Property Counter - count collections by composable properties
//!
//! Provides pluggable property checkers, a library of ready-made checkers with
//! memoized number tests, and an engine that counts, partitions and transforms
//! slices while tolerating per-element checker failures.

pub mod checker;
pub mod config;
pub mod counter;
pub mod demo;
pub mod error;
pub mod models;

pub use checker::{CheckerLibrary, NumberCache, PropertyChecker};
pub use config::Config;
pub use counter::{CountResult, FailureSink, Partition, PropertyCounter};
pub use error::{CounterError, Result};
