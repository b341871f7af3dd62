//! Location (room) model.
//!
//! Real rooms are loaded once from ingestion. Two synthetic kinds exist:
//! overflow rooms (`"UN n"`) for events no real room accepts, and arranged
//! rooms (`"AR n"`) for events whose historical building is the arranged
//! marker. Both are created lazily by the grid, append-only.

use serde::{Deserialize, Serialize};

/// Feature string given to lazily created overflow rooms.
const OVERFLOW_FEATURES: &str = "Desks/Tables/Chairs/TV/Podium/White Board Projector";

/// Capacity assigned to synthetic rooms; large enough that only gap and
/// date-collision rules can reject a placement there.
pub(crate) const SYNTHETIC_CAPACITY: u32 = 500;

/// A room events can be placed into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Room name, `"BLDG ROOM"`.
    pub name: String,
    /// Seat capacity.
    pub capacity: u32,
    /// Furnishing/equipment features, in input order.
    pub features: Vec<String>,
    /// Real room or one of the synthetic kinds.
    pub kind: LocationKind,
}

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationKind {
    /// A real room loaded from input.
    Standard,
    /// Synthetic `"UN n"` room created when no real room accepts an event.
    Overflow,
    /// Synthetic `"AR n"` room for arranged-marker events.
    Arranged,
}

impl Location {
    /// Creates a standard room.
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
            features: Vec::new(),
            kind: LocationKind::Standard,
        }
    }

    /// Creates the `n`-th overflow room.
    pub fn overflow(n: usize) -> Self {
        Self {
            name: format!("UN {n}"),
            capacity: SYNTHETIC_CAPACITY,
            features: OVERFLOW_FEATURES.split('/').map(str::to_owned).collect(),
            kind: LocationKind::Overflow,
        }
    }

    /// Creates the `n`-th arranged room.
    pub fn arranged(n: usize) -> Self {
        Self {
            name: format!("AR {n}"),
            capacity: SYNTHETIC_CAPACITY,
            features: Vec::new(),
            kind: LocationKind::Arranged,
        }
    }

    /// Sets the feature list.
    pub fn with_features(mut self, features: impl IntoIterator<Item = String>) -> Self {
        self.features = features.into_iter().collect();
        self
    }

    /// Building code: the first whitespace-separated token of the room
    /// name. Derived the same way as
    /// [`HistoricalLocation::building`](super::HistoricalLocation::building),
    /// so codes containing digits (`"B10"`) compare correctly.
    pub fn building(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_location() {
        let loc = Location::new("MTH 100", 30)
            .with_features(["Desks".to_owned(), "Projector".to_owned()]);
        assert_eq!(loc.building(), Some("MTH"));
        assert_eq!(loc.kind, LocationKind::Standard);
        assert_eq!(loc.features.len(), 2);
    }

    #[test]
    fn test_building_code_with_digits() {
        assert_eq!(Location::new("B10 140", 30).building(), Some("B10"));
        assert_eq!(Location::arranged(0).building(), Some("AR"));
    }

    #[test]
    fn test_overflow_location() {
        let loc = Location::overflow(0);
        assert_eq!(loc.name, "UN 0");
        assert_eq!(loc.capacity, 500);
        assert_eq!(loc.kind, LocationKind::Overflow);
        assert!(loc.features.contains(&"Desks".to_owned()));
    }

    #[test]
    fn test_arranged_location() {
        let loc = Location::arranged(2);
        assert_eq!(loc.name, "AR 2");
        assert_eq!(loc.capacity, 500);
        assert_eq!(loc.kind, LocationKind::Arranged);
        assert!(loc.features.is_empty());
    }
}
