//! Core types: time, events, classification, formatting

pub mod event;
pub mod format;
pub mod status;
pub mod time;
pub mod tracing;

pub use event::CalendarEvent;
pub use format::{Locale, MessageFormatter};
pub use status::{MeetingStatus, classify};
pub use time::{AllDayMode, DayWindow, EventTime};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
