//! Input validation for placement runs.
//!
//! Checks structural integrity of events and locations before scheduling.
//! Detects:
//! - Duplicate event codes and location names
//! - Inverted meeting windows (begin >= end)
//! - Empty weekday sets
//! - Inverted date spans (from > to)
//!
//! All problems are accumulated and reported together; the caller decides
//! whether to refuse the run or repair the input.

use std::collections::HashSet;

use crate::models::{Event, Location};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same identifier.
    DuplicateId,
    /// A meeting window does not begin before it ends.
    InvalidTimeWindow,
    /// A meeting window has no active weekdays.
    EmptyDaySet,
    /// A date span ends before it begins.
    InvalidDateSpan,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a placement run.
///
/// Checks:
/// 1. No duplicate location names
/// 2. No duplicate event codes
/// 3. Every meeting window has `begin < end`
/// 4. Every meeting window has at least one active weekday
/// 5. Every date span has `from <= to`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(events: &[Event], locations: &[Location]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut location_names = HashSet::new();
    for loc in locations {
        if !location_names.insert(loc.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate location name: {}", loc.name),
            ));
        }
    }

    let mut event_codes = HashSet::new();
    for event in events {
        if !event_codes.insert(event.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate event code: {}", event.code),
            ));
        }

        if event.window.begin_minute >= event.window.end_minute {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeWindow,
                format!(
                    "Event '{}' has window {}-{} (must begin before it ends)",
                    event.code, event.window.begin_minute, event.window.end_minute
                ),
            ));
        }

        if event.window.days().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyDaySet,
                format!("Event '{}' has no active weekdays", event.code),
            ));
        }

        if event.dates.from > event.dates.to {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDateSpan,
                format!(
                    "Event '{}' runs {} to {} (must not end before it begins)",
                    event.code, event.dates.from, event.dates.to
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
