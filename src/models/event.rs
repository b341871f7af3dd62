//! Event model.
//!
//! An event is one recurring weekly occurrence to be placed: a class
//! section or meeting with enrollment numbers, a meeting window, a calendar
//! validity span, and at most one historical (preferred) room.

use serde::{Deserialize, Serialize};

use super::{DateSpan, MeetingWindow, SlotRange};
use crate::scheduler::PlacementTier;

/// Extracts the department code: the leading alphabetic run of a section
/// code (`"AAC 100 01"` → `"AAC"`).
///
/// Returns `None` when the code does not start with a letter; such events
/// simply never match the building-preference map.
pub fn department_code(code: &str) -> Option<&str> {
    let end = code
        .char_indices()
        .find(|(_, c)| !c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .unwrap_or(code.len());
    (end > 0).then(|| &code[..end])
}

/// The room an event met in historically, preserved verbatim from input.
///
/// The raw form is `"BLDG ROOM"`, where either token may be the sentinel
/// `"nan"` meaning "not specified". The raw string is never defaulted or
/// rewritten; accessors expose the parsed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalLocation {
    raw: String,
}

/// Building code that marks "place anywhere in an arranged-type room".
const ARRANGED_BUILDING: &str = "AR";

impl HistoricalLocation {
    /// Wraps a raw `"BLDG ROOM"` string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// A historical location with no preference at all.
    pub fn none() -> Self {
        Self::new("nan nan")
    }

    /// The verbatim input string.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Building code, or `None` for the `"nan"` sentinel.
    pub fn building(&self) -> Option<&str> {
        match self.raw.split_whitespace().next() {
            Some("nan") | None => None,
            Some(b) => Some(b),
        }
    }

    /// Room token, or `None` when missing or `"nan"`.
    pub fn room(&self) -> Option<&str> {
        match self.raw.split_whitespace().nth(1) {
            Some("nan") | None => None,
            Some(r) => Some(r),
        }
    }

    /// Whether the building code is the arranged marker.
    pub fn is_arranged(&self) -> bool {
        self.building() == Some(ARRANGED_BUILDING)
    }

    /// Full `"BLDG ROOM"` lookup name with the room token normalized, or
    /// `None` unless both tokens are present.
    ///
    /// Normalization mirrors the historical data's quirks: a fractional
    /// suffix from numeric ingestion is stripped (`"100.0"` → `"100"`) and
    /// the room tokens `"00"`/`"000"` collapse to `"0"`.
    pub fn normalized_name(&self) -> Option<String> {
        let building = self.building()?;
        let room = normalize_room(self.room()?);
        Some(format!("{building} {room}"))
    }
}

/// Normalizes a room token for lookup. See
/// [`HistoricalLocation::normalized_name`].
pub(crate) fn normalize_room(room: &str) -> &str {
    let room = room.split('.').next().unwrap_or(room);
    match room {
        "00" | "000" => "0",
        other => other,
    }
}

/// One recurring weekly occurrence to be placed.
///
/// Created once per input row. The placement engine writes
/// `assigned_ranges` and `placed_location` (write-once); the metrics
/// calculator writes `tier`. Nothing else mutates an event mid-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Section identifier, e.g. `"AAC 100 01"`.
    pub code: String,
    /// Department code derived from `code` (leading alphabetic run).
    pub department: Option<String>,
    /// Human-readable title.
    pub display_name: String,
    /// Seats currently enrolled.
    pub enrollment: u32,
    /// Seats offered this term.
    pub capacity: u32,
    /// Hard enrollment ceiling (may differ from `capacity`).
    pub max_capacity: u32,
    /// Weekly meeting window.
    pub window: MeetingWindow,
    /// Calendar validity span.
    pub dates: DateSpan,
    /// Historical room, verbatim from input.
    pub historical: HistoricalLocation,
    /// Slot ranges written by the placement engine. Empty until placed;
    /// write-once — a placed event is never re-indexed.
    pub assigned_ranges: Vec<SlotRange>,
    /// Name of the room the event was placed in.
    pub placed_location: Option<String>,
    /// Quality tier, assigned only by the metrics calculator.
    pub tier: Option<PlacementTier>,
}

impl Event {
    /// Creates an event; the department is derived from `code`.
    pub fn new(code: impl Into<String>, window: MeetingWindow, dates: DateSpan) -> Self {
        let code = code.into();
        let department = department_code(&code).map(str::to_owned);
        Self {
            code,
            department,
            display_name: String::new(),
            enrollment: 0,
            capacity: 0,
            max_capacity: 0,
            window,
            dates,
            historical: HistoricalLocation::none(),
            assigned_ranges: Vec::new(),
            placed_location: None,
            tier: None,
        }
    }

    /// Sets the display title.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Sets enrollment, capacity, and max capacity together.
    pub fn with_seats(mut self, enrollment: u32, capacity: u32, max_capacity: u32) -> Self {
        self.enrollment = enrollment;
        self.capacity = capacity;
        self.max_capacity = max_capacity;
        self
    }

    /// Sets the historical room from its raw `"BLDG ROOM"` string.
    pub fn with_historical(mut self, raw: impl Into<String>) -> Self {
        self.historical = HistoricalLocation::new(raw);
        self
    }

    /// Whether the placement engine has written this event into the grid.
    pub fn is_placed(&self) -> bool {
        !self.assigned_ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn sample_window() -> MeetingWindow {
        MeetingWindow::new(540, 590).with_days([Weekday::Mon, Weekday::Wed])
    }

    fn sample_dates() -> DateSpan {
        DateSpan::new(
            "2024-01-15".parse().unwrap(),
            "2024-05-10".parse().unwrap(),
        )
    }

    #[test]
    fn test_department_code() {
        assert_eq!(department_code("AAC 100 01"), Some("AAC"));
        assert_eq!(department_code("MTH100"), Some("MTH"));
        assert_eq!(department_code("100 01"), None);
        assert_eq!(department_code(""), None);
    }

    #[test]
    fn test_event_derives_department() {
        let e = Event::new("BIO 201 02", sample_window(), sample_dates());
        assert_eq!(e.department.as_deref(), Some("BIO"));
        assert!(!e.is_placed());

        let numeric = Event::new("999 01", sample_window(), sample_dates());
        assert_eq!(numeric.department, None);
    }

    #[test]
    fn test_historical_parsing() {
        let h = HistoricalLocation::new("MTH 100");
        assert_eq!(h.building(), Some("MTH"));
        assert_eq!(h.room(), Some("100"));
        assert!(!h.is_arranged());
        assert_eq!(h.normalized_name().as_deref(), Some("MTH 100"));
    }

    #[test]
    fn test_historical_nan_sentinels() {
        let none = HistoricalLocation::none();
        assert_eq!(none.building(), None);
        assert_eq!(none.room(), None);
        assert_eq!(none.normalized_name(), None);
        assert_eq!(none.raw(), "nan nan");

        let building_only = HistoricalLocation::new("SCI nan");
        assert_eq!(building_only.building(), Some("SCI"));
        assert_eq!(building_only.room(), None);
        assert_eq!(building_only.normalized_name(), None);
    }

    #[test]
    fn test_historical_arranged_marker() {
        assert!(HistoricalLocation::new("AR 0").is_arranged());
        // Exact code match only: ART is a real building, not the marker.
        assert!(!HistoricalLocation::new("ART 101").is_arranged());
    }

    #[test]
    fn test_room_normalization() {
        assert_eq!(
            HistoricalLocation::new("MTH 100.0").normalized_name().as_deref(),
            Some("MTH 100")
        );
        assert_eq!(
            HistoricalLocation::new("MTH 00").normalized_name().as_deref(),
            Some("MTH 0")
        );
        assert_eq!(
            HistoricalLocation::new("MTH 000").normalized_name().as_deref(),
            Some("MTH 0")
        );
        // Raw string stays verbatim regardless of normalization.
        assert_eq!(HistoricalLocation::new("MTH 100.0").raw(), "MTH 100.0");
    }

    #[test]
    fn test_event_builder() {
        let e = Event::new("CHM 110 01", sample_window(), sample_dates())
            .with_display_name("General Chemistry")
            .with_seats(25, 30, 32)
            .with_historical("SCI 140");
        assert_eq!(e.display_name, "General Chemistry");
        assert_eq!(e.enrollment, 25);
        assert_eq!(e.capacity, 30);
        assert_eq!(e.max_capacity, 32);
        assert_eq!(e.historical.building(), Some("SCI"));
        assert_eq!(e.placed_location, None);
        assert_eq!(e.tier, None);
    }
}
