//! Weekdays and weekly meeting windows.
//!
//! A [`MeetingWindow`] is a begin/end pair in minutes of day plus the set of
//! weekdays the event meets. The grid converts windows into slot-index
//! ranges; days the grid does not model are silently dropped from placement.

use serde::{Deserialize, Serialize};

/// A day of the week, with the single-letter codes used in section data
/// (`R` = Thursday, `U` = Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// Single-letter day code.
    pub fn code(self) -> char {
        match self {
            Weekday::Mon => 'M',
            Weekday::Tue => 'T',
            Weekday::Wed => 'W',
            Weekday::Thu => 'R',
            Weekday::Fri => 'F',
            Weekday::Sat => 'S',
            Weekday::Sun => 'U',
        }
    }

    /// Parses a single-letter day code.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'M' => Some(Weekday::Mon),
            'T' => Some(Weekday::Tue),
            'W' => Some(Weekday::Wed),
            'R' => Some(Weekday::Thu),
            'F' => Some(Weekday::Fri),
            'S' => Some(Weekday::Sat),
            'U' => Some(Weekday::Sun),
            _ => None,
        }
    }
}

/// A weekly meeting window: begin/end minute of day plus active weekdays.
///
/// Days are kept in insertion order (deduplicated) so every iteration over
/// them is deterministic. The invariant `begin_minute < end_minute` is
/// checked by [`crate::validation`], not at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingWindow {
    /// Start, in minutes of day (e.g. 09:00 = 540).
    pub begin_minute: u32,
    /// End, in minutes of day. `1440` = midnight at the end of the day.
    pub end_minute: u32,
    /// Active weekdays, deduplicated, iterated in insertion order.
    days: Vec<Weekday>,
}

impl MeetingWindow {
    /// Creates a window with no active days.
    pub fn new(begin_minute: u32, end_minute: u32) -> Self {
        Self {
            begin_minute,
            end_minute,
            days: Vec::new(),
        }
    }

    /// Adds an active day. Duplicates are ignored.
    pub fn with_day(mut self, day: Weekday) -> Self {
        if !self.days.contains(&day) {
            self.days.push(day);
        }
        self
    }

    /// Adds several active days, deduplicating.
    pub fn with_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        for day in days {
            if !self.days.contains(&day) {
                self.days.push(day);
            }
        }
        self
    }

    /// Active weekdays in deterministic (insertion) order.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// Meeting length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute.saturating_sub(self.begin_minute)
    }
}

/// Parses a clock string (`"H:MM"` or `"HH:MM"`) into minutes of day.
///
/// `"24:00"` parses to 1440 so it can express an end-of-day grid bound.
/// Returns `None` for anything else out of range or malformed.
pub fn minute_of_day(clock: &str) -> Option<u32> {
    let (h, m) = clock.trim().split_once(':')?;
    let hours: u32 = h.parse().ok()?;
    let minutes: u32 = m.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    let total = hours * 60 + minutes;
    (total <= 1440).then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_codes_round_trip() {
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert_eq!(Weekday::from_code(day.code()), Some(day));
        }
        assert_eq!(Weekday::from_code('X'), None);
        assert_eq!(Weekday::from_code('m'), Some(Weekday::Mon));
    }

    #[test]
    fn test_window_builder_dedups_days() {
        let w = MeetingWindow::new(540, 590)
            .with_day(Weekday::Mon)
            .with_day(Weekday::Wed)
            .with_day(Weekday::Mon);
        assert_eq!(w.days(), &[Weekday::Mon, Weekday::Wed]);
        assert_eq!(w.duration_minutes(), 50);
    }

    #[test]
    fn test_with_days_preserves_order() {
        let w = MeetingWindow::new(0, 60).with_days([
            Weekday::Wed,
            Weekday::Mon,
            Weekday::Wed,
            Weekday::Fri,
        ]);
        assert_eq!(w.days(), &[Weekday::Wed, Weekday::Mon, Weekday::Fri]);
    }

    #[test]
    fn test_minute_of_day() {
        assert_eq!(minute_of_day("6:00"), Some(360));
        assert_eq!(minute_of_day("09:50"), Some(590));
        assert_eq!(minute_of_day("24:00"), Some(1440));
        assert_eq!(minute_of_day("24:01"), None);
        assert_eq!(minute_of_day("9:60"), None);
        assert_eq!(minute_of_day("9.30"), None);
        assert_eq!(minute_of_day("nan"), None);
    }
}
