//! Time types for calendar events.
//!
//! This module provides [`EventTime`] for representing event start/end times
//! (which may be either a specific datetime or an all-day date), and
//! [`DayWindow`] for the local calendar-day boundaries a status query
//! considers.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How a date-only (all-day) event is anchored to concrete instants.
///
/// The calendar API reports all-day events as bare dates. Whether such a
/// date spans midnight-to-midnight in the deployment's local timezone or
/// in UTC is a deployment choice, so it is configurable rather than fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllDayMode {
    /// All-day dates occupy the full day in the local timezone.
    #[default]
    Local,
    /// All-day dates occupy the full day in UTC.
    Utc,
}

/// Represents the time of a calendar event.
///
/// Calendar events can have two types of times:
/// - **DateTime**: A specific point in time (with timezone, stored as UTC)
/// - **AllDay**: A date without a specific time (all-day events)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum EventTime {
    /// A specific datetime, stored in UTC.
    DateTime(DateTime<Utc>),
    /// An all-day event date (no specific time).
    AllDay(NaiveDate),
}

impl EventTime {
    /// Creates a new `EventTime::DateTime` from a UTC datetime.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }

    /// Creates a new `EventTime::AllDay` from a date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::AllDay(date)
    }

    /// Returns `true` if this is an all-day event time.
    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay(_))
    }

    /// Resolves this event time to a concrete UTC instant.
    ///
    /// Datetimes are already concrete. All-day dates resolve to midnight of
    /// that date according to `mode`.
    pub fn resolve(&self, mode: AllDayMode) -> DateTime<Utc> {
        match mode {
            AllDayMode::Local => self.resolve_in(&Local),
            AllDayMode::Utc => self.resolve_in(&Utc),
        }
    }

    /// Resolves this event time to a UTC instant, anchoring all-day dates
    /// to midnight in the given timezone.
    pub fn resolve_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Utc> {
        match self {
            Self::DateTime(dt) => *dt,
            Self::AllDay(date) => tz
                .from_local_datetime(&date.and_hms_opt(0, 0, 0).expect("valid time"))
                .single()
                .expect("unambiguous local midnight")
                .with_timezone(&Utc),
        }
    }

    /// Returns the date portion of this event time, in UTC for datetimes.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::DateTime(dt) => dt.date_naive(),
            Self::AllDay(date) => *date,
        }
    }
}

impl PartialOrd for EventTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EventTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.resolve(AllDayMode::Utc)
            .cmp(&other.resolve(AllDayMode::Utc))
    }
}

/// The calendar-day boundaries a status query runs against.
///
/// Represents a half-open interval `[start, end)` in UTC, normally the
/// local day containing "now".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    /// Start of the day (inclusive).
    pub start: DateTime<Utc>,
    /// End of the day (exclusive).
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// Creates a new day window.
    ///
    /// # Panics
    ///
    /// Panics if `start` is after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        assert!(start <= end, "DayWindow start must be <= end");
        Self { start, end }
    }

    /// Creates the window for a single calendar date in the given timezone.
    pub fn for_date<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Self {
        let midnight = |d: NaiveDate| {
            tz.from_local_datetime(&d.and_hms_opt(0, 0, 0).expect("valid time"))
                .single()
                .expect("unambiguous local midnight")
                .with_timezone(&Utc)
        };
        Self {
            start: midnight(date),
            end: midnight(date.succ_opt().expect("valid successor date")),
        }
    }

    /// Creates the window for the calendar day containing `now` in the
    /// given timezone.
    pub fn containing<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> Self {
        Self::for_date(now.with_timezone(tz).date_naive(), tz)
    }

    /// Returns the duration of this window.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Checks if an instant falls within this window.
    ///
    /// Uses half-open interval semantics: `[start, end)`.
    pub fn contains(&self, dt: DateTime<Utc>) -> bool {
        self.start <= dt && dt < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod event_time {
        use super::*;

        #[test]
        fn datetime_resolution_is_identity() {
            let dt = utc(2025, 2, 5, 10, 30, 0);
            let et = EventTime::from_utc(dt);
            assert!(!et.is_all_day());
            assert_eq!(et.resolve(AllDayMode::Utc), dt);
            assert_eq!(et.resolve(AllDayMode::Local), dt);
        }

        #[test]
        fn allday_resolves_to_utc_midnight() {
            let et = EventTime::from_date(date(2025, 2, 5));
            assert!(et.is_all_day());
            assert_eq!(et.resolve(AllDayMode::Utc), utc(2025, 2, 5, 0, 0, 0));
        }

        #[test]
        fn allday_resolves_to_zone_midnight() {
            // UTC+9: local midnight is 15:00 UTC the previous day.
            let jst = FixedOffset::east_opt(9 * 3600).unwrap();
            let et = EventTime::from_date(date(2025, 2, 5));
            assert_eq!(et.resolve_in(&jst), utc(2025, 2, 4, 15, 0, 0));
        }

        #[test]
        fn date_extraction() {
            let et = EventTime::from_utc(utc(2025, 2, 5, 23, 59, 0));
            assert_eq!(et.date(), date(2025, 2, 5));

            let et = EventTime::from_date(date(2025, 3, 15));
            assert_eq!(et.date(), date(2025, 3, 15));
        }

        #[test]
        fn ordering() {
            let et1 = EventTime::from_utc(utc(2025, 2, 5, 10, 0, 0));
            let et2 = EventTime::from_utc(utc(2025, 2, 5, 11, 0, 0));
            let et3 = EventTime::from_date(date(2025, 2, 5));

            assert!(et3 < et1); // midnight < 10:00
            assert!(et1 < et2);
        }

        #[test]
        fn serde_roundtrip() {
            let et = EventTime::from_utc(utc(2025, 2, 5, 10, 30, 0));
            let json = serde_json::to_string(&et).unwrap();
            let parsed: EventTime = serde_json::from_str(&json).unwrap();
            assert_eq!(et, parsed);

            let et = EventTime::from_date(date(2025, 2, 5));
            let json = serde_json::to_string(&et).unwrap();
            let parsed: EventTime = serde_json::from_str(&json).unwrap();
            assert_eq!(et, parsed);
        }
    }

    mod day_window {
        use super::*;

        #[test]
        fn creation() {
            let window = DayWindow::new(utc(2025, 2, 5, 0, 0, 0), utc(2025, 2, 6, 0, 0, 0));
            assert_eq!(window.duration(), Duration::hours(24));
        }

        #[test]
        #[should_panic(expected = "start must be <= end")]
        fn invalid_window() {
            DayWindow::new(utc(2025, 2, 6, 0, 0, 0), utc(2025, 2, 5, 0, 0, 0));
        }

        #[test]
        fn for_date_utc() {
            let window = DayWindow::for_date(date(2025, 2, 5), &Utc);
            assert_eq!(window.start, utc(2025, 2, 5, 0, 0, 0));
            assert_eq!(window.end, utc(2025, 2, 6, 0, 0, 0));
        }

        #[test]
        fn for_date_offset_zone() {
            let jst = FixedOffset::east_opt(9 * 3600).unwrap();
            let window = DayWindow::for_date(date(2025, 2, 5), &jst);
            assert_eq!(window.start, utc(2025, 2, 4, 15, 0, 0));
            assert_eq!(window.end, utc(2025, 2, 5, 15, 0, 0));
        }

        #[test]
        fn containing_now() {
            let jst = FixedOffset::east_opt(9 * 3600).unwrap();
            // 20:00 UTC on Feb 5 is already Feb 6 in JST.
            let now = utc(2025, 2, 5, 20, 0, 0);
            let window = DayWindow::containing(now, &jst);
            assert_eq!(window.start, utc(2025, 2, 5, 15, 0, 0));
            assert_eq!(window.end, utc(2025, 2, 6, 15, 0, 0));
            assert!(window.contains(now));
        }

        #[test]
        fn contains_is_half_open() {
            let window = DayWindow::for_date(date(2025, 2, 5), &Utc);
            assert!(window.contains(utc(2025, 2, 5, 0, 0, 0))); // start inclusive
            assert!(window.contains(utc(2025, 2, 5, 23, 59, 59)));
            assert!(!window.contains(utc(2025, 2, 6, 0, 0, 0))); // end exclusive
            assert!(!window.contains(utc(2025, 2, 4, 23, 59, 59)));
        }
    }
}
