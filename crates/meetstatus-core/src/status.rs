//! Meeting status classification.
//!
//! Compares "now" against the day's event intervals and produces a
//! [`MeetingStatus`]. Classification is a single pass with no local state;
//! what to render from the result is the formatter's decision, not ours.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::event::CalendarEvent;

/// The answer to "is the calendar owner in a meeting right now?".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingStatus {
    /// Some event contains the current instant.
    InMeeting,
    /// No event is current; carries the day's full event list unmodified.
    Free(Vec<CalendarEvent>),
}

impl MeetingStatus {
    /// Returns `true` if the owner is currently in a meeting.
    pub fn is_in_meeting(&self) -> bool {
        matches!(self, Self::InMeeting)
    }
}

/// Classifies `now` against the day's events.
///
/// Scans the sequence once and short-circuits on the first event whose
/// half-open interval `[start, end)` contains `now`. Intervals are treated
/// independently, so scan order never changes the outcome, only which
/// match is logged. When no event is current the full original sequence is
/// returned, past and future events included.
pub fn classify(now: DateTime<Utc>, events: &[CalendarEvent]) -> MeetingStatus {
    for event in events {
        if event.is_current_at(now) {
            debug!(
                start = %event.start,
                end = %event.end,
                "current instant falls inside an event"
            );
            return MeetingStatus::InMeeting;
        }
    }
    MeetingStatus::Free(events.to_vec())
}
