//! Multi-phase greedy placement and quality metrics.
//!
//! [`GreedyScheduler`] drives the four placement phases over a grid and an
//! event set; [`assign_tiers`] classifies the result into quality tiers.

mod metrics;
mod phases;

pub use metrics::{assign_tiers, PlacementTier, TierCounts};
pub use phases::{GreedyScheduler, RunReport};
