//! Domain models for weekly room placement.
//!
//! Provides the entity model (events, locations, meeting windows, date
//! spans) and the weekly slot grid that owns the single-event placement
//! operation. The phase orchestration that drives placement lives in
//! [`crate::scheduler`].

mod dates;
mod distance;
mod event;
mod grid;
mod location;
mod preferences;
mod window;

pub use dates::DateSpan;
pub use distance::DistanceMatrix;
pub use event::{department_code, Event, HistoricalLocation};
pub(crate) use event::normalize_room;
pub use grid::{EventId, Grid, GridConfig, PlacementOutcome, RejectReason, Slot, SlotRange};
pub use location::{Location, LocationKind};
pub use preferences::PreferenceMap;
pub use window::{minute_of_day, MeetingWindow, Weekday};
