//! Count Report Module
//!
//! Immutable result types returned by the counting engine.

use std::fmt;

use serde::Serialize;

// == Count Result ==
/// Detailed outcome of a single counting pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountResult<T> {
    match_count: usize,
    total_count: usize,
    matching_elements: Vec<T>,
    percentage: f64,
}

impl<T> CountResult<T> {
    /// Builds a result from the matching elements and the scanned total.
    ///
    /// Percentage is 0.0 when nothing was scanned.
    pub(crate) fn new(matching_elements: Vec<T>, total_count: usize) -> Self {
        let match_count = matching_elements.len();
        let percentage = if total_count == 0 {
            0.0
        } else {
            match_count as f64 * 100.0 / total_count as f64
        };

        Self {
            match_count,
            total_count,
            matching_elements,
            percentage,
        }
    }

    pub fn match_count(&self) -> usize {
        self.match_count
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Matching elements in ascending order.
    pub fn matching_elements(&self) -> &[T] {
        &self.matching_elements
    }

    /// Share of matching elements, in `[0, 100]`.
    pub fn percentage(&self) -> f64 {
        self.percentage
    }
}

impl<T: fmt::Debug> fmt::Display for CountResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CountResult{{matches={}, total={}, percentage={:.2}%, elements={:?}}}",
            self.match_count, self.total_count, self.percentage, self.matching_elements
        )
    }
}

// == Partition ==
/// Complete, disjoint split of a sequence. Both sides keep input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition<T> {
    pub matches: Vec<T>,
    pub non_matches: Vec<T>,
}

impl<T> Partition<T> {
    /// Number of elements across both sides.
    pub fn len(&self) -> usize {
        self.matches.len() + self.non_matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.non_matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_result_percentage() {
        let result = CountResult::new(vec![2, 3, 5], 12);
        assert_eq!(result.match_count(), 3);
        assert_eq!(result.total_count(), 12);
        assert_eq!(result.matching_elements(), &[2, 3, 5]);
        assert_eq!(result.percentage(), 25.0);
    }

    #[test]
    fn test_count_result_empty_input() {
        let result: CountResult<i64> = CountResult::new(Vec::new(), 0);
        assert_eq!(result.match_count(), 0);
        assert_eq!(result.percentage(), 0.0);
    }

    #[test]
    fn test_count_result_display() {
        let result = CountResult::new(vec![6, 28], 3);
        assert_eq!(
            result.to_string(),
            "CountResult{matches=2, total=3, percentage=66.67%, elements=[6, 28]}"
        );
    }

    #[test]
    fn test_count_result_serializes() {
        let result = CountResult::new(vec!["noon"], 2);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["match_count"], 1);
        assert_eq!(json["percentage"], 50.0);
        assert_eq!(json["matching_elements"][0], "noon");
    }

    #[test]
    fn test_partition_len() {
        let partition = Partition {
            matches: vec![1, 3],
            non_matches: vec![2],
        };
        assert_eq!(partition.len(), 3);
        assert!(!partition.is_empty());
    }
}
