//! Google Calendar event-list client.
//!
//! Fetches the day's events with recurring events expanded
//! (`singleEvents=true`) and resolves each item's start and end to
//! concrete instants before anything downstream sees them.

use std::time::Duration;

use chrono::DateTime;
use serde::Deserialize;
use tracing::{debug, warn};

use meetstatus_core::{AllDayMode, CalendarEvent, DayWindow, EventTime};

use crate::error::{StatusError, StatusResult};
use crate::google::token::AccessToken;

/// Base URL for Google Calendar API v3.
const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Client for the calendar event-list endpoint.
#[derive(Debug)]
pub struct CalendarEventClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CalendarEventClient {
    /// Creates a new client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http_client,
            base_url: CALENDAR_API_BASE.to_string(),
        }
    }

    /// Overrides the API base URL (alternate deployments, local test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Lists the events of one calendar day, ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns a calendar fetch error on HTTP failure or an unparseable
    /// response (transport errors, 5xx and 429 are retryable), and a
    /// malformed event error for any item lacking a usable start or end.
    pub async fn list_day_events(
        &self,
        token: &AccessToken,
        calendar_id: &str,
        window: &DayWindow,
        all_day_mode: AllDayMode,
    ) -> StatusResult<Vec<CalendarEvent>> {
        let url = format!(
            "{}/calendars/{}/events",
            self.base_url,
            urlencoding::encode(calendar_id)
        );

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token.as_str())
            .query(&[
                ("timeMin", window.start.to_rfc3339()),
                ("timeMax", window.end.to_rfc3339()),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    "event list request timed out".to_string()
                } else {
                    format!("event list request failed: {}", e)
                };
                StatusError::calendar_fetch(message).with_source(e).retryable()
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(StatusError::calendar_fetch(
                "access token rejected by calendar API",
            ));
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(StatusError::calendar_fetch("access denied to calendar"));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err =
                StatusError::calendar_fetch(format!("calendar API error ({}): {}", status, body));
            return Err(
                if status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    err.retryable()
                } else {
                    err
                },
            );
        }

        let body = response.text().await.map_err(|e| {
            StatusError::calendar_fetch("failed to read event list response")
                .with_source(e)
                .retryable()
        })?;

        let list: EventListResponse = serde_json::from_str(&body).map_err(|e| {
            StatusError::calendar_fetch("failed to parse event list response").with_source(e)
        })?;

        let mut events = Vec::with_capacity(list.items.len());
        for item in list.items {
            if item.status.as_deref() == Some("cancelled") {
                continue;
            }
            if let Some(event) = convert_event(item, all_day_mode)? {
                events.push(event);
            }
        }

        // The API orders by start time; sort anyway so the contract holds
        // even if a page comes back unsorted.
        events.sort_by_key(|e| e.start);

        debug!(count = events.len(), calendar_id, "fetched day events");
        Ok(events)
    }
}

/// Converts one API item, resolving its times to instants.
///
/// Returns `Ok(None)` for events whose interval is inverted; those are
/// malformed upstream data and are excluded from classification.
fn convert_event(item: ApiEvent, all_day_mode: AllDayMode) -> StatusResult<Option<CalendarEvent>> {
    let start = parse_event_time(&item.start, "start")?.resolve(all_day_mode);
    let end = parse_event_time(&item.end, "end")?.resolve(all_day_mode);

    let mut event = CalendarEvent::new(start, end);
    if let Some(summary) = item.summary {
        event = event.with_summary(summary);
    }

    if event.is_inverted() {
        warn!(%start, %end, "dropping event with inverted interval");
        return Ok(None);
    }

    Ok(Some(event))
}

/// Reads an event boundary, preferring `dateTime` over `date`.
fn parse_event_time(time: &ApiEventTime, field: &str) -> StatusResult<EventTime> {
    if let Some(ref dt) = time.date_time {
        let parsed = DateTime::parse_from_rfc3339(dt).map_err(|e| {
            StatusError::malformed_event(format!("event {} has unparseable dateTime {:?}", field, dt))
                .with_source(e)
        })?;
        return Ok(EventTime::from_utc(parsed.with_timezone(&chrono::Utc)));
    }

    if let Some(ref date) = time.date {
        let parsed = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
            StatusError::malformed_event(format!("event {} has unparseable date {:?}", field, date))
                .with_source(e)
        })?;
        return Ok(EventTime::from_date(parsed));
    }

    Err(StatusError::malformed_event(format!(
        "event {} has neither dateTime nor date",
        field
    )))
}

/// Response from the events.list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventListResponse {
    #[serde(default)]
    items: Vec<ApiEvent>,
}

/// A single event from the Google Calendar API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEvent {
    summary: Option<String>,
    start: ApiEventTime,
    end: ApiEventTime,
    status: Option<String>,
}

/// Event boundary from the API: exactly one of the fields is populated.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEventTime {
    date: Option<String>,
    date_time: Option<String>,
}
