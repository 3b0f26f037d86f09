//! The normalized calendar event a status query operates on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single calendar event, resolved to concrete UTC instants.
///
/// Event times originating as all-day dates have already been anchored to
/// midnight boundaries by the provider layer; downstream code never sees
/// untyped or unresolved time data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Event title, when the calendar supplies one.
    pub summary: Option<String>,
    /// Start of the event (inclusive).
    pub start: DateTime<Utc>,
    /// End of the event (exclusive).
    pub end: DateTime<Utc>,
}

impl CalendarEvent {
    /// Creates a new event spanning `[start, end)`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            summary: None,
            start,
            end,
        }
    }

    /// Builder method to set the event summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Checks whether `now` falls inside this event.
    ///
    /// Uses half-open interval semantics: `start <= now < end`. A
    /// zero-duration event can never be current.
    pub fn is_current_at(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now < self.end
    }

    /// Returns `true` if the interval is inverted (`end` before `start`).
    ///
    /// Such events are malformed and excluded before classification.
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 5, h, min, 0).unwrap()
    }

    #[test]
    fn current_at_is_half_open() {
        let event = CalendarEvent::new(utc(9, 0), utc(10, 0));
        assert!(event.is_current_at(utc(9, 0))); // start inclusive
        assert!(event.is_current_at(utc(9, 30)));
        assert!(!event.is_current_at(utc(10, 0))); // end exclusive
        assert!(!event.is_current_at(utc(8, 59)));
    }

    #[test]
    fn zero_duration_is_never_current() {
        let event = CalendarEvent::new(utc(9, 0), utc(9, 0));
        assert!(!event.is_current_at(utc(9, 0)));
    }

    #[test]
    fn inverted_interval_detection() {
        assert!(CalendarEvent::new(utc(10, 0), utc(9, 0)).is_inverted());
        assert!(!CalendarEvent::new(utc(9, 0), utc(10, 0)).is_inverted());
        // Zero duration is degenerate but not inverted.
        assert!(!CalendarEvent::new(utc(9, 0), utc(9, 0)).is_inverted());
    }

    #[test]
    fn builder_sets_summary() {
        let event = CalendarEvent::new(utc(9, 0), utc(10, 0)).with_summary("standup");
        assert_eq!(event.summary.as_deref(), Some("standup"));
    }
}
