//! Report models for the demo binary
//!
//! Serializable DTOs describing the outcome of a demo run.

pub mod report;

// Re-export commonly used types
pub use report::{DemoReport, Finding, SectionReport};
