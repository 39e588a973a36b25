//! Report DTOs for the demo binary
//!
//! Defines the JSON document printed after a demo run.

use serde::Serialize;
use serde_json::Value;

use crate::checker::CacheStats;

/// One labelled observation inside a section.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// What was measured
    pub label: String,
    /// The measured value
    pub value: Value,
}

impl Finding {
    /// A numeric count.
    pub fn count(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            value: Value::from(count),
        }
    }

    /// A free-form rendering, e.g. a `CountResult` display string.
    pub fn text(label: impl Into<String>, text: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: Value::String(text.to_string()),
        }
    }

    /// Any serializable value.
    pub fn json(label: impl Into<String>, value: &impl Serialize) -> serde_json::Result<Self> {
        Ok(Self {
            label: label.into(),
            value: serde_json::to_value(value)?,
        })
    }
}

/// A titled group of findings.
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub title: String,
    pub findings: Vec<Finding>,
}

impl SectionReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            findings: Vec::new(),
        }
    }

    /// Appends a finding and returns the section for chaining.
    pub fn with(mut self, finding: Finding) -> Self {
        self.findings.push(finding);
        self
    }
}

/// Full output of a demo run.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    /// Generation timestamp in RFC 3339 format
    pub generated_at: String,
    pub sections: Vec<SectionReport>,
    /// Number memo state at the end of the run, before clearing
    pub cache_stats: CacheStats,
    /// Named counts held by the counter at the end of the run
    pub result_cache_entries: usize,
}

impl DemoReport {
    /// Creates a report stamped with the current time.
    pub fn new(
        sections: Vec<SectionReport>,
        cache_stats: CacheStats,
        result_cache_entries: usize,
    ) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            sections,
            cache_stats,
            result_cache_entries,
        }
    }
}
