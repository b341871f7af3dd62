//! Error taxonomy for the placement engine.
//!
//! Only genuinely fatal conditions are errors. A placement that fails a
//! capacity, gap, or collision check is a normal negative result
//! ([`PlacementOutcome::Rejected`](crate::models::PlacementOutcome)) that the
//! phase scheduler consumes to try the next candidate room.

use thiserror::Error;

/// Errors produced by grid construction and slot indexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// An event's meeting window falls outside the grid's configured day
    /// bounds. Fatal for that event: it is logged and never placed.
    #[error(
        "meeting window {begin_minute}-{end_minute} falls outside the grid day \
         {day_start}-{day_end}"
    )]
    TimeOutOfRange {
        begin_minute: u32,
        end_minute: u32,
        day_start: u32,
        day_end: u32,
    },

    /// Invalid grid or matrix dimensions. Fatal at construction.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A placement was requested against a room name the grid does not hold.
    #[error("unknown location '{0}'")]
    UnknownLocation(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;
