//! Placement quality metrics.
//!
//! Post-hoc classification of every event into exactly one quality tier,
//! by comparing its final room against its historical room and the
//! department building preferences.
//!
//! # Tier ladder (first match wins)
//!
//! 1. No historical building, or same building and same room, or same
//!    building with no historical room → `Desired`
//! 2. Same building, different room → `SameBuilding`
//! 3. Different building listed in the department's preferences →
//!    `PreferredBuilding`
//! 4. Everything else → `Unpreferred`

use serde::{Deserialize, Serialize};

use crate::models::{normalize_room, Event, PreferenceMap};

/// Quality tier of one placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementTier {
    /// Historical room honored (or there was nothing to honor).
    Desired,
    /// Same building as the historical room, different room.
    SameBuilding,
    /// A building from the department's preference list.
    PreferredBuilding,
    /// None of the above.
    Unpreferred,
}

/// Aggregate tier counts for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub desired: usize,
    pub same_building: usize,
    pub preferred_building: usize,
    pub unpreferred: usize,
}

impl TierCounts {
    /// Total events classified.
    pub fn total(&self) -> usize {
        self.desired + self.same_building + self.preferred_building + self.unpreferred
    }

    /// Count for one tier.
    pub fn count(&self, tier: PlacementTier) -> usize {
        match tier {
            PlacementTier::Desired => self.desired,
            PlacementTier::SameBuilding => self.same_building,
            PlacementTier::PreferredBuilding => self.preferred_building,
            PlacementTier::Unpreferred => self.unpreferred,
        }
    }

    /// Fraction of the total in one tier (0.0 when nothing is classified).
    pub fn share(&self, tier: PlacementTier) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(tier) as f64 / total as f64
        }
    }

    fn record(&mut self, tier: PlacementTier) {
        match tier {
            PlacementTier::Desired => self.desired += 1,
            PlacementTier::SameBuilding => self.same_building += 1,
            PlacementTier::PreferredBuilding => self.preferred_building += 1,
            PlacementTier::Unpreferred => self.unpreferred += 1,
        }
    }
}

/// Classifies every event and writes its tier, returning the aggregate
/// counts.
///
/// Runs over the complete original event list, placed or not: an event
/// with no historical building is `Desired` wherever it landed, and an
/// unplaced event with one can only reach `PreferredBuilding` or
/// `Unpreferred`.
pub fn assign_tiers(events: &mut [Event], preferences: &PreferenceMap) -> TierCounts {
    let mut counts = TierCounts::default();
    for event in events.iter_mut() {
        let tier = classify(event, preferences);
        event.tier = Some(tier);
        counts.record(tier);
    }
    counts
}

fn classify(event: &Event, preferences: &PreferenceMap) -> PlacementTier {
    let historical_building = match event.historical.building() {
        None => return PlacementTier::Desired,
        Some(b) => b,
    };
    let placed = event.placed_location.as_deref();
    // First whitespace token, matching the historical-location parse.
    let placed_building = placed.and_then(|name| name.split_whitespace().next());
    let placed_room = placed.and_then(|name| name.split_whitespace().nth(1));

    if placed_building == Some(historical_building) {
        return match event.historical.room().map(normalize_room) {
            None => PlacementTier::Desired,
            Some(room) if Some(room) == placed_room => PlacementTier::Desired,
            Some(_) => PlacementTier::SameBuilding,
        };
    }

    let preferred = match (&event.department, placed_building) {
        (Some(dept), Some(building)) => preferences.prefers(dept, building),
        _ => false,
    };
    if preferred {
        PlacementTier::PreferredBuilding
    } else {
        PlacementTier::Unpreferred
    }
}
