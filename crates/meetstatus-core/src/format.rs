//! Rendering a [`MeetingStatus`] as human-readable text.
//!
//! The formatter, not the classifier, decides what to show: a fixed
//! "in a meeting" line, or a count header followed by one line per event
//! with start and end in 24-hour wall-clock time. Times carry no date and
//! no offset; local venue time is assumed.

use std::fmt::Write as _;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::event::CalendarEvent;
use crate::status::MeetingStatus;

/// Message phrasing to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Japanese phrasing (the original deployment's venue).
    #[default]
    Ja,
    /// English phrasing.
    En,
}

/// Formats meeting statuses into reply text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageFormatter {
    locale: Locale,
}

impl MessageFormatter {
    /// Creates a formatter with the given locale.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Renders a status, formatting event times as wall-clock times in `tz`.
    pub fn render<Tz: TimeZone>(&self, status: &MeetingStatus, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        match status {
            MeetingStatus::InMeeting => self.in_meeting_line().to_string(),
            MeetingStatus::Free(events) => self.free_message(events, tz),
        }
    }

    fn in_meeting_line(&self) -> &'static str {
        match self.locale {
            Locale::Ja => "ただいま会議中です。",
            Locale::En => "Currently in a meeting.",
        }
    }

    fn free_message<Tz: TimeZone>(&self, events: &[CalendarEvent], tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        let mut out = match self.locale {
            Locale::Ja => format!("本日の会議は{}件です。", events.len()),
            Locale::En => match events.len() {
                1 => "You have 1 meeting today.".to_string(),
                n => format!("You have {} meetings today.", n),
            },
        };

        for event in events {
            let start = clock_time(event.start, tz);
            let end = clock_time(event.end, tz);
            let line = match self.locale {
                Locale::Ja => format!("{} から {}", start, end),
                Locale::En => format!("{} to {}", start, end),
            };
            let _ = write!(out, "\n{}", line);
        }

        out
    }
}

/// 24-hour wall-clock rendering of an instant in the given timezone.
fn clock_time<Tz: TimeZone>(dt: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz).format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use insta::assert_snapshot;

    fn utc(h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 5, h, min, 0).unwrap()
    }

    fn event(start: (u32, u32), end: (u32, u32)) -> CalendarEvent {
        CalendarEvent::new(utc(start.0, start.1), utc(end.0, end.1))
    }

    #[test]
    fn in_meeting_is_a_fixed_line() {
        let formatter = MessageFormatter::default();
        assert_snapshot!(
            formatter.render(&MeetingStatus::InMeeting, &Utc),
            @"ただいま会議中です。"
        );
    }

    #[test]
    fn in_meeting_english() {
        let formatter = MessageFormatter::new(Locale::En);
        assert_snapshot!(
            formatter.render(&MeetingStatus::InMeeting, &Utc),
            @"Currently in a meeting."
        );
    }

    #[test]
    fn free_lists_events_in_order() {
        let formatter = MessageFormatter::default();
        let status = MeetingStatus::Free(vec![
            event((9, 0), (10, 0)),
            event((13, 0), (14, 0)),
        ]);
        assert_eq!(
            formatter.render(&status, &Utc),
            "本日の会議は2件です。\n09:00 から 10:00\n13:00 から 14:00"
        );
    }

    #[test]
    fn free_english_phrasing() {
        let formatter = MessageFormatter::new(Locale::En);
        let status = MeetingStatus::Free(vec![event((9, 0), (10, 0))]);
        assert_eq!(
            formatter.render(&status, &Utc),
            "You have 1 meeting today.\n09:00 to 10:00"
        );
    }

    #[test]
    fn empty_day_has_header_only() {
        let formatter = MessageFormatter::default();
        let rendered = formatter.render(&MeetingStatus::Free(Vec::new()), &Utc);
        assert_eq!(rendered, "本日の会議は0件です。");
        assert!(!rendered.contains('\n'));

        let formatter = MessageFormatter::new(Locale::En);
        assert_eq!(
            formatter.render(&MeetingStatus::Free(Vec::new()), &Utc),
            "You have 0 meetings today."
        );
    }

    #[test]
    fn times_are_rendered_in_the_given_zone() {
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();
        let formatter = MessageFormatter::default();
        // 00:00-01:00 UTC is 09:00-10:00 in JST.
        let status = MeetingStatus::Free(vec![event((0, 0), (1, 0))]);
        assert_eq!(
            formatter.render(&status, &jst),
            "本日の会議は1件です。\n09:00 から 10:00"
        );
    }
}
