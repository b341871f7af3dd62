//! Weekly slot grid and the single-event placement engine.
//!
//! The grid maps each room name to a fixed-length array of weekly time
//! slots. Every slot is either empty or references the event occupying it;
//! one event may own one contiguous range per active weekday. The grid owns
//! the placement operation [`Grid::try_place`] and the lazily created
//! synthetic rooms (overflow and arranged buckets).
//!
//! # Slot indexing
//!
//! `slots_per_day = (day_end - day_start) / slot_minutes`, and a day's
//! slots start at `index_of(day) * slots_per_day`. A window scheduled
//! 09:00–09:50 on a 06:00-start grid with 10-minute slots occupies
//! `[18, 23)` plus the day offset.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Event, Location, MeetingWindow, Weekday};
use crate::error::{Result, ScheduleError};

/// Index of an event in the caller's event slice.
///
/// Slots reference events by stable index rather than name so the grid
/// never parses identity out of strings.
pub type EventId = usize;

/// One weekly time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// Nothing scheduled.
    Empty,
    /// Occupied by the referenced event.
    Occupied(EventId),
}

impl Slot {
    /// Whether the slot holds an event.
    #[inline]
    pub fn is_occupied(self) -> bool {
        matches!(self, Slot::Occupied(_))
    }
}

/// A half-open range of slot indices `[start, end)` within the week array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRange {
    /// First slot, inclusive.
    pub start: usize,
    /// One past the last slot.
    pub end: usize,
}

impl SlotRange {
    /// Creates a range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of slots covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Whether two ranges share at least one slot.
    #[inline]
    pub fn intersects(&self, other: &SlotRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Grid configuration: which days exist, how fine the slots are, and the
/// minimum gap enforced between events in the same room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Modeled weekdays, in display order. Window days outside this set
    /// are silently dropped from placement.
    pub weekdays: Vec<Weekday>,
    /// Slot granularity in minutes.
    pub slot_minutes: u32,
    /// Minimum gap required before and after each placement, in minutes.
    pub min_gap_minutes: u32,
    /// First modeled minute of day.
    pub day_start: u32,
    /// Last modeled minute of day (exclusive).
    pub day_end: u32,
}

impl Default for GridConfig {
    /// Mon–Fri, 06:00–24:00, 10-minute slots, 10-minute gap.
    fn default() -> Self {
        Self {
            weekdays: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            slot_minutes: 10,
            min_gap_minutes: 10,
            day_start: 6 * 60,
            day_end: 24 * 60,
        }
    }
}

impl GridConfig {
    /// Checks the construction invariants.
    pub fn validate(&self) -> Result<()> {
        if self.weekdays.is_empty() {
            return Err(ScheduleError::Configuration(
                "weekday set is empty".into(),
            ));
        }
        for (i, day) in self.weekdays.iter().enumerate() {
            if self.weekdays[..i].contains(day) {
                return Err(ScheduleError::Configuration(format!(
                    "duplicate weekday '{}'",
                    day.code()
                )));
            }
        }
        if self.slot_minutes == 0 {
            return Err(ScheduleError::Configuration(
                "slot interval must be positive".into(),
            ));
        }
        if self.day_start >= self.day_end {
            return Err(ScheduleError::Configuration(format!(
                "day start {} is not before day end {}",
                self.day_start, self.day_end
            )));
        }
        if (self.day_end - self.day_start) % self.slot_minutes != 0 {
            return Err(ScheduleError::Configuration(format!(
                "day length {} is not a multiple of the slot interval {}",
                self.day_end - self.day_start,
                self.slot_minutes
            )));
        }
        Ok(())
    }

    /// Slots in one day.
    #[inline]
    pub fn slots_per_day(&self) -> usize {
        ((self.day_end - self.day_start) / self.slot_minutes) as usize
    }

    /// Slots in the whole week array.
    #[inline]
    pub fn slots_per_week(&self) -> usize {
        self.slots_per_day() * self.weekdays.len()
    }

    /// Offset of a day's first slot, or `None` for unmodeled days.
    pub fn day_offset(&self, day: Weekday) -> Option<usize> {
        self.weekdays
            .iter()
            .position(|&d| d == day)
            .map(|i| i * self.slots_per_day())
    }

    /// Rejects windows that fall outside the modeled day or end before
    /// they begin.
    ///
    /// Checked once per event before any slot math.
    pub fn check_bounds(&self, window: &MeetingWindow) -> Result<()> {
        if window.begin_minute < self.day_start
            || window.end_minute > self.day_end
            || window.end_minute < window.begin_minute
        {
            return Err(ScheduleError::TimeOutOfRange {
                begin_minute: window.begin_minute,
                end_minute: window.end_minute,
                day_start: self.day_start,
                day_end: self.day_end,
            });
        }
        Ok(())
    }

    /// Converts a window into one slot range per modeled active day.
    ///
    /// Days the grid does not model are dropped without error — the event
    /// is simply not scheduled on them.
    pub fn slot_ranges(&self, window: &MeetingWindow) -> Result<Vec<SlotRange>> {
        self.check_bounds(window)?;
        let start = ((window.begin_minute - self.day_start) / self.slot_minutes) as usize;
        let end = ((window.end_minute - self.day_start) / self.slot_minutes) as usize;
        Ok(window
            .days()
            .iter()
            .filter_map(|&day| self.day_offset(day))
            .map(|offset| SlotRange::new(start + offset, end + offset))
            .collect())
    }
}

/// Outcome of a placement attempt.
///
/// Rejection is a normal negative result, not an error: the phase
/// scheduler consumes it to move on to the next candidate room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// The event was written into the grid.
    Placed,
    /// No slots were written.
    Rejected(RejectReason),
}

/// Why a placement attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The event already owns slot ranges; ranges are write-once.
    AlreadyPlaced,
    /// Enrollment exceeds the room's capacity.
    OverCapacity,
    /// An occupied slot sits within the minimum gap of the range.
    GapTooSmall,
    /// An event placed on intersecting slots in this room has a date span
    /// overlapping the candidate's.
    DateOverlap,
}

/// The weekly schedule: one slot array per room, plus the placement engine
/// and the counters for lazily created synthetic rooms.
#[derive(Debug, Clone)]
pub struct Grid {
    config: GridConfig,
    locations: Vec<Location>,
    slots: HashMap<String, Vec<Slot>>,
    overflow_created: usize,
    arranged_created: usize,
    arranged_names: Vec<String>,
}

impl Grid {
    /// Builds a grid over the given rooms.
    ///
    /// Fails with [`ScheduleError::Configuration`] on invalid dimensions or
    /// duplicate room names.
    pub fn new(config: GridConfig, locations: Vec<Location>) -> Result<Self> {
        config.validate()?;
        let per_week = config.slots_per_week();
        let mut slots = HashMap::with_capacity(locations.len());
        for loc in &locations {
            if slots.insert(loc.name.clone(), vec![Slot::Empty; per_week]).is_some() {
                return Err(ScheduleError::Configuration(format!(
                    "duplicate location name '{}'",
                    loc.name
                )));
            }
        }
        Ok(Self {
            config,
            locations,
            slots,
            overflow_created: 0,
            arranged_created: 0,
            arranged_names: Vec::new(),
        })
    }

    /// The grid configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// All rooms, including any synthetic ones created so far.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Looks up a room by exact name.
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// Rooms whose building code equals `building`, sorted by name.
    pub fn locations_in_building(&self, building: &str) -> Vec<&Location> {
        let mut found: Vec<&Location> = self
            .locations
            .iter()
            .filter(|l| l.building() == Some(building))
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found
    }

    /// The slot array for a room.
    pub fn slots(&self, name: &str) -> Option<&[Slot]> {
        self.slots.get(name).map(Vec::as_slice)
    }

    /// Names of arranged rooms created so far, in creation order.
    pub fn arranged_names(&self) -> &[String] {
        &self.arranged_names
    }

    /// Creates the next overflow room (`"UN n"`) and returns its name.
    pub fn add_overflow_location(&mut self) -> String {
        let loc = Location::overflow(self.overflow_created);
        self.overflow_created += 1;
        self.register(loc)
    }

    /// Creates the next arranged room (`"AR n"`) and returns its name.
    pub fn add_arranged_location(&mut self) -> String {
        let loc = Location::arranged(self.arranged_created);
        self.arranged_created += 1;
        let name = self.register(loc);
        self.arranged_names.push(name.clone());
        name
    }

    fn register(&mut self, loc: Location) -> String {
        let name = loc.name.clone();
        self.slots
            .insert(name.clone(), vec![Slot::Empty; self.config.slots_per_week()]);
        self.locations.push(loc);
        name
    }

    /// Attempts to write one event into one room, atomically.
    ///
    /// Either every computed day range is written or nothing is. Unless
    /// `force` is set, the attempt is rejected when enrollment exceeds the
    /// room's capacity, when an occupied slot sits within the minimum gap
    /// on either side of any range (skipped entirely for ranges starting
    /// at slot 0), or when any event already placed in this room on
    /// intersecting slots has a date span overlapping the candidate's. An
    /// event that already owns ranges is always rejected; ranges are
    /// write-once.
    ///
    /// `force` skips every check and overwrites occupied slots. It exists
    /// for synthetic rooms whose nominal capacity is not meaningful.
    pub fn try_place(
        &mut self,
        events: &mut [Event],
        id: EventId,
        location_name: &str,
        force: bool,
    ) -> Result<PlacementOutcome> {
        let capacity = self
            .location(location_name)
            .ok_or_else(|| ScheduleError::UnknownLocation(location_name.to_owned()))?
            .capacity;

        let event = &events[id];
        if event.is_placed() {
            return Ok(PlacementOutcome::Rejected(RejectReason::AlreadyPlaced));
        }
        let ranges = self.config.slot_ranges(&event.window)?;

        if !force {
            if event.enrollment > capacity {
                return Ok(PlacementOutcome::Rejected(RejectReason::OverCapacity));
            }
            let slots = match self.slots.get(location_name) {
                Some(s) => s,
                None => return Err(ScheduleError::UnknownLocation(location_name.to_owned())),
            };
            for range in &ranges {
                if range.start != 0
                    && gap_conflict(
                        slots,
                        *range,
                        self.config.slot_minutes,
                        self.config.min_gap_minutes,
                    )
                {
                    return Ok(PlacementOutcome::Rejected(RejectReason::GapTooSmall));
                }
            }
            // Collision is checked against every event placed in this
            // room, not just the current slot references: when date-
            // disjoint events co-locate, the later write overwrites the
            // slot ids but earlier occupants still hold their ranges.
            for (other_id, other) in events.iter().enumerate() {
                if other_id == id || other.placed_location.as_deref() != Some(location_name) {
                    continue;
                }
                if !other.dates.overlaps(&event.dates) {
                    continue;
                }
                let collides = other
                    .assigned_ranges
                    .iter()
                    .any(|held| ranges.iter().any(|r| r.intersects(held)));
                if collides {
                    return Ok(PlacementOutcome::Rejected(RejectReason::DateOverlap));
                }
            }
        }

        // All checks passed; commit every range.
        let slots = match self.slots.get_mut(location_name) {
            Some(s) => s,
            None => return Err(ScheduleError::UnknownLocation(location_name.to_owned())),
        };
        for range in &ranges {
            for slot in &mut slots[range.start..range.end] {
                *slot = Slot::Occupied(id);
            }
        }
        let event = &mut events[id];
        event.assigned_ranges = ranges;
        event.placed_location = Some(location_name.to_owned());
        Ok(PlacementOutcome::Placed)
    }
}

/// Scans outward from a range in slot-interval steps, up to the minimum
/// gap, on both sides. Returns `true` if any scanned slot is occupied.
/// Scans are clamped at the week-array edges.
fn gap_conflict(slots: &[Slot], range: SlotRange, slot_minutes: u32, gap_minutes: u32) -> bool {
    let mut step = slot_minutes;
    let mut back = range.start.checked_sub(1);
    let mut ahead = range.end;
    while step <= gap_minutes {
        if let Some(i) = back {
            if slots[i].is_occupied() {
                return true;
            }
            back = i.checked_sub(1);
        }
        if let Some(slot) = slots.get(ahead) {
            if slot.is_occupied() {
                return true;
            }
        }
        ahead += 1;
        step += slot_minutes;
    }
    false
}
