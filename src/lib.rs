//! Weekly room-assignment engine.
//!
//! Places a set of recurring weekly events (class sections, meetings) into
//! rooms and time slots on a bounded weekly grid, honoring seat capacity,
//! historical-location affinity, inter-event time gaps, and date-range
//! overlap rules. Produces a fully placed grid plus quality metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Event`, `Location`, `MeetingWindow`,
//!   `DateSpan`, `Grid` (slot arrays + placement engine), `PreferenceMap`,
//!   `DistanceMatrix`
//! - **`scheduler`**: Multi-phase greedy placement (`GreedyScheduler`) and
//!   quality tiers (`PlacementTier`, `TierCounts`)
//! - **`validation`**: Input integrity checks (duplicate names, inverted
//!   windows and date spans, empty day sets)
//! - **`error`**: Error taxonomy (`ScheduleError`)
//!
//! # Design
//!
//! The engine is greedy, not a solver: four ordered phases try historical
//! rooms first, then same-building rooms, then preference-ranked buildings,
//! and finally lazily created overflow rooms. A seeded shuffle makes runs
//! reproducible bit-for-bit for a given seed. Ingestion (CSV/JSON) and
//! presentation are external adapters; this crate owns only the placement
//! logic and its data model.

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
