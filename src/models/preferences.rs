//! Department building preferences.
//!
//! Maps a department code to an ordered list of preferred building codes.
//! Optional: an empty map means phase 3 simply tries every room by name
//! order. The ingestion layer deserializes this straight from its JSON
//! contract.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Department code → ordered preferred-building list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceMap {
    map: HashMap<String, Vec<String>>,
}

impl PreferenceMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the preference list for a department.
    pub fn with_preference(
        mut self,
        department: impl Into<String>,
        buildings: impl IntoIterator<Item = String>,
    ) -> Self {
        self.map
            .insert(department.into(), buildings.into_iter().collect());
        self
    }

    /// Preferred buildings for a department, in preference order.
    pub fn buildings_for(&self, department: &str) -> &[String] {
        self.map.get(department).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a building appears in a department's preference list.
    pub fn prefers(&self, department: &str, building: &str) -> bool {
        self.buildings_for(department).iter().any(|b| b == building)
    }

    /// Whether any department has preferences.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
