//! Counter Module
//!
//! The counting engine plus its result types, named-result cache and failure
//! reporting.

mod engine;
mod report;
mod results;
mod sink;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use engine::PropertyCounter;
pub use report::{CountResult, Partition};
pub use results::ResultCache;
pub use sink::{FailureSink, MemorySink, TracingSink};
