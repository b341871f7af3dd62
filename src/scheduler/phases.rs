//! Multi-phase greedy assignment.
//!
//! # Algorithm
//!
//! 0. Pre-pass: events whose windows fall outside the grid's day bounds
//!    are logged and excluded from the run.
//! 1. Historical exact match: arranged-marker events go straight into
//!    arranged rooms (creating one if needed); everything else tries its
//!    exact historical room. Events with no historical building defer to
//!    phase 3, events with a building but no room defer to phase 2.
//! 2. Same building: every room sharing the historical building code, in
//!    name order.
//! 3. Preferred buildings first, then every remaining non-arranged room in
//!    name order.
//! 4. Overflow: create `"UN n"` rooms one at a time until every remaining
//!    event is placed.
//!
//! The event order is shuffled with a seeded generator, re-seeded
//! identically before phases 1, 2, and 3, so runs with the same seed are
//! reproducible bit-for-bit. Greedy, not optimal: an event is never moved
//! once placed.

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::metrics::{assign_tiers, TierCounts};
use crate::models::{
    Event, EventId, Grid, LocationKind, PlacementOutcome, PreferenceMap,
};

/// Multi-phase greedy scheduler.
///
/// # Example
///
/// ```
/// use weekgrid::models::{
///     DateSpan, Event, Grid, GridConfig, Location, MeetingWindow, Weekday,
/// };
/// use weekgrid::scheduler::GreedyScheduler;
///
/// let mut grid = Grid::new(
///     GridConfig::default(),
///     vec![Location::new("MTH 100", 30)],
/// )
/// .unwrap();
/// let mut events = vec![Event::new(
///     "MTH 100 01",
///     MeetingWindow::new(540, 590).with_days([Weekday::Mon, Weekday::Wed]),
///     DateSpan::new(
///         "2024-01-15".parse().unwrap(),
///         "2024-05-10".parse().unwrap(),
///     ),
/// )
/// .with_seats(25, 30, 32)
/// .with_historical("MTH 100")];
///
/// let report = GreedyScheduler::new().run(&mut grid, &mut events);
/// assert_eq!(report.placed, 1);
/// assert_eq!(events[0].placed_location.as_deref(), Some("MTH 100"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    seed: u64,
    preferences: PreferenceMap,
}

/// Diagnostic totals and quality metrics for one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Events successfully placed.
    pub placed: usize,
    /// Rejected placement attempts across all phases.
    pub failures: usize,
    /// Placement attempts across all phases.
    pub attempts: usize,
    /// Codes of events excluded for out-of-range meeting windows.
    pub dropped: Vec<String>,
    /// Quality tier counts over the complete event list.
    pub tiers: TierCounts,
}

#[derive(Default)]
struct Tally {
    placed: usize,
    failures: usize,
    attempts: usize,
}

impl GreedyScheduler {
    /// Creates a scheduler with seed 0 and no preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the department building preferences.
    pub fn with_preferences(mut self, preferences: PreferenceMap) -> Self {
        self.preferences = preferences;
        self
    }

    /// Runs all four phases, then classifies every event into its quality
    /// tier.
    ///
    /// Never aborts for a single event: placement failures route the event
    /// to the next phase, and the overflow phase guarantees every
    /// in-bounds event ends up somewhere.
    pub fn run(&self, grid: &mut Grid, events: &mut [Event]) -> RunReport {
        let mut tally = Tally::default();
        let mut dropped = Vec::new();

        // Out-of-range windows are fatal per event: checked once, before
        // any phase sees them.
        let mut order: Vec<EventId> = Vec::new();
        for (id, event) in events.iter().enumerate() {
            match grid.config().check_bounds(&event.window) {
                Ok(()) => order.push(id),
                Err(err) => {
                    warn!("excluding '{}': {err}", event.code);
                    dropped.push(event.code.clone());
                }
            }
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        order.shuffle(&mut rng);

        let mut waiting: Vec<EventId> = Vec::new();
        let mut final_list: Vec<EventId> = Vec::new();

        // Phase 1: arranged events, then exact historical rooms.
        for &id in &order {
            if self.place_arranged(grid, events, id, &mut tally) {
                continue;
            }
            let historical = events[id].historical.clone();
            match (historical.building(), historical.room()) {
                (None, _) => final_list.push(id),
                (Some(_), None) => waiting.push(id),
                (Some(_), Some(_)) => {
                    let name = match historical.normalized_name() {
                        Some(n) => n,
                        // Unreachable with both tokens present; route to
                        // phase 2 rather than losing the event.
                        None => {
                            waiting.push(id);
                            continue;
                        }
                    };
                    if grid.location(&name).is_none() {
                        tally.failures += 1;
                        waiting.push(id);
                    } else if !attempt(grid, events, id, &name, &mut tally) {
                        waiting.push(id);
                    }
                }
            }
        }
        debug!(
            "phase 1 done: {} placed, {} waiting, {} deferred",
            tally.placed,
            waiting.len(),
            final_list.len()
        );

        // Phase 2: any room in the historical building.
        let mut rng = SmallRng::seed_from_u64(self.seed);
        waiting.shuffle(&mut rng);
        for &id in &waiting {
            let building = match events[id].historical.building() {
                Some(b) => b.to_owned(),
                // Unreachable: only building-bearing events reach the
                // waiting list. Defer to phase 3 rather than losing it.
                None => {
                    if !final_list.contains(&id) {
                        final_list.push(id);
                    }
                    continue;
                }
            };
            let candidates: Vec<String> = grid
                .locations_in_building(&building)
                .iter()
                .map(|l| l.name.clone())
                .collect();
            if candidates.is_empty() {
                if !final_list.contains(&id) {
                    final_list.push(id);
                }
                continue;
            }
            for name in &candidates {
                if attempt(grid, events, id, name, &mut tally) {
                    final_list.retain(|&x| x != id);
                    break;
                }
                if !final_list.contains(&id) {
                    final_list.push(id);
                }
            }
        }
        debug!(
            "phase 2 done: {} placed, {} remaining",
            tally.placed,
            final_list.len()
        );

        // Phase 3: preferred buildings, then everything else by name.
        final_list.sort_by(|&a, &b| events[a].display_name.cmp(&events[b].display_name));
        let mut rng = SmallRng::seed_from_u64(self.seed);
        final_list.shuffle(&mut rng);
        let mut unscheduled: Vec<EventId> = Vec::new();
        for &id in &final_list {
            let candidates = self.phase3_candidates(grid, &events[id]);
            if candidates.is_empty() {
                unscheduled.push(id);
                continue;
            }
            for name in &candidates {
                if attempt(grid, events, id, name, &mut tally) {
                    unscheduled.retain(|&x| x != id);
                    break;
                }
                if !unscheduled.contains(&id) {
                    unscheduled.push(id);
                }
            }
        }
        debug!(
            "phase 3 done: {} placed, {} unscheduled",
            tally.placed,
            unscheduled.len()
        );

        // Phase 4: overflow rooms, one per pass, until nothing is left.
        while !unscheduled.is_empty() {
            let bucket = grid.add_overflow_location();
            debug!(
                "overflow room {bucket} created for {} events",
                unscheduled.len()
            );
            let mut still: Vec<EventId> = Vec::new();
            for &id in &unscheduled {
                if !attempt(grid, events, id, &bucket, &mut tally) {
                    still.push(id);
                }
            }
            if still.len() == unscheduled.len() {
                // The fresh room is still empty, so the only possible
                // rejection was capacity; force the head event in to
                // guarantee the set shrinks every pass.
                let id = still.remove(0);
                tally.attempts += 1;
                match grid.try_place(events, id, &bucket, true) {
                    Ok(PlacementOutcome::Placed) => tally.placed += 1,
                    other => {
                        warn!(
                            "could not place '{}' even when forced: {other:?}",
                            events[id].code
                        );
                        dropped.push(events[id].code.clone());
                    }
                }
            }
            unscheduled = still;
        }

        info!(
            "run complete: {}/{} placed, {} failures, {} attempts, {} dropped",
            tally.placed,
            events.len(),
            tally.failures,
            tally.attempts,
            dropped.len()
        );

        let tiers = assign_tiers(events, &self.preferences);
        RunReport {
            placed: tally.placed,
            failures: tally.failures,
            attempts: tally.attempts,
            dropped,
            tiers,
        }
    }

    /// Places an arranged-marker event into an arranged room, creating one
    /// if every existing room rejects it. Returns whether it was placed;
    /// `false` falls through to the normal phase-1 handling.
    fn place_arranged(
        &self,
        grid: &mut Grid,
        events: &mut [Event],
        id: EventId,
        tally: &mut Tally,
    ) -> bool {
        if !events[id].historical.is_arranged() {
            return false;
        }
        if let Some(name) = events[id].historical.normalized_name() {
            if grid.location(&name).is_some() && attempt(grid, events, id, &name, tally) {
                return true;
            }
        }
        let existing: Vec<String> = grid.arranged_names().to_vec();
        for name in &existing {
            if attempt(grid, events, id, name, tally) {
                return true;
            }
        }
        let fresh = grid.add_arranged_location();
        attempt(grid, events, id, &fresh, tally)
    }

    /// Candidate rooms for phase 3: the department's preferred buildings
    /// in preference order, then every remaining non-arranged room sorted
    /// by name.
    fn phase3_candidates(&self, grid: &Grid, event: &Event) -> Vec<String> {
        let mut candidates: Vec<String> = Vec::new();
        if let Some(dept) = event.department.as_deref() {
            for building in self.preferences.buildings_for(dept) {
                for loc in grid.locations_in_building(building) {
                    if !candidates.contains(&loc.name) {
                        candidates.push(loc.name.clone());
                    }
                }
            }
        }
        let mut rest: Vec<String> = grid
            .locations()
            .iter()
            .filter(|l| l.kind != LocationKind::Arranged && !candidates.contains(&l.name))
            .map(|l| l.name.clone())
            .collect();
        rest.sort();
        candidates.extend(rest);
        candidates
    }
}

/// One placement attempt with tally bookkeeping. Errors are logged and
/// treated as failures; they cannot occur for events that passed the
/// bounds pre-pass against rooms the grid owns.
fn attempt(
    grid: &mut Grid,
    events: &mut [Event],
    id: EventId,
    location_name: &str,
    tally: &mut Tally,
) -> bool {
    tally.attempts += 1;
    match grid.try_place(events, id, location_name, false) {
        Ok(PlacementOutcome::Placed) => {
            tally.placed += 1;
            true
        }
        Ok(PlacementOutcome::Rejected(reason)) => {
            tally.failures += 1;
            debug!(
                "'{}' rejected at {location_name}: {reason:?}",
                events[id].code
            );
            false
        }
        Err(err) => {
            tally.failures += 1;
            warn!("'{}' failed at {location_name}: {err}", events[id].code);
            false
        }
    }
}
