//! Calendar validity spans for events.
//!
//! Two events may legally share grid slots when their date spans are
//! disjoint: they occupy the same weekly time but never run concurrently in
//! calendar time (e.g. first-half and second-half semester sections).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive calendar date range `[from, to]`.
///
/// The invariant `from <= to` is checked by [`crate::validation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// First day the event runs.
    pub from: NaiveDate,
    /// Last day the event runs.
    pub to: NaiveDate,
}

impl DateSpan {
    /// Creates a span from two dates.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Whether two spans share at least one calendar day.
    ///
    /// Inclusive on both ends: spans that touch on a single day overlap.
    /// Co-location in the grid is allowed only for spans where this
    /// returns `false`.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    /// Number of calendar days covered, inclusive.
    pub fn len_days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn span(from: &str, to: &str) -> DateSpan {
        DateSpan::new(d(from), d(to))
    }

    #[test]
    fn test_overlapping_spans() {
        let full = span("2024-01-15", "2024-05-10");
        let first_half = span("2024-01-15", "2024-03-01");
        assert!(full.overlaps(&first_half));
        assert!(first_half.overlaps(&full));
    }

    #[test]
    fn test_sequential_spans_do_not_overlap() {
        let first_half = span("2024-01-15", "2024-03-01");
        let second_half = span("2024-03-02", "2024-05-10");
        assert!(!first_half.overlaps(&second_half));
        assert!(!second_half.overlaps(&first_half));
    }

    #[test]
    fn test_touching_endpoint_overlaps() {
        // Inclusive ends: sharing a single day counts as concurrent.
        let a = span("2024-01-01", "2024-02-01");
        let b = span("2024-02-01", "2024-03-01");
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_contained_span_overlaps() {
        let outer = span("2024-01-01", "2024-12-31");
        let inner = span("2024-06-01", "2024-06-30");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_len_days() {
        assert_eq!(span("2024-01-01", "2024-01-01").len_days(), 1);
        assert_eq!(span("2024-01-01", "2024-01-31").len_days(), 31);
    }
}
