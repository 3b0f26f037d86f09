//! The end-to-end status query.
//!
//! One query is one strictly sequential pipeline: credentials, key parse,
//! assertion build and sign, token exchange, event fetch, classification.
//! Each stage's output is the next stage's only input, and nothing is
//! kept across invocations: every query re-mints its assertion and
//! access token. Concurrent queries run independent pipelines and share
//! no mutable state.

use std::time::Duration;

use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::debug;

use meetstatus_core::{AllDayMode, DayWindow, MeetingStatus, classify};

use crate::error::StatusResult;
use crate::google::client::CalendarEventClient;
use crate::google::credentials::CredentialProvider;
use crate::google::jwt::{build_unsigned_assertion, parse_private_key, sign_assertion};
use crate::google::token::TokenExchangeClient;
use crate::retry::{RetryPolicy, with_retry};

/// Read-only calendar scope requested by default.
pub const CALENDAR_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/calendar.readonly";

/// Settings for a status query.
#[derive(Debug, Clone)]
pub struct StatusQueryConfig {
    /// The calendar to read (e.g. `"primary"` or an address).
    pub calendar_id: String,
    /// OAuth scopes requested in the assertion.
    pub scopes: Vec<String>,
    /// How all-day dates are anchored to instants.
    pub all_day_mode: AllDayMode,
    /// Per-request HTTP timeout for both network stages.
    pub timeout: Duration,
    /// Retry budget for both network stages.
    pub retry: RetryPolicy,
}

impl StatusQueryConfig {
    /// Default per-request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Creates a config for the given calendar with defaults.
    pub fn new(calendar_id: impl Into<String>) -> Self {
        Self {
            calendar_id: calendar_id.into(),
            scopes: vec![CALENDAR_READONLY_SCOPE.to_string()],
            all_day_mode: AllDayMode::default(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        }
    }

    /// Builder: set the all-day anchoring mode.
    #[must_use]
    pub fn with_all_day_mode(mut self, mode: AllDayMode) -> Self {
        self.all_day_mode = mode;
        self
    }

    /// Builder: set the HTTP timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder: set the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

/// Runs the credential-minting and status-classification pipeline.
#[derive(Debug)]
pub struct StatusQuery<C> {
    credentials: C,
    config: StatusQueryConfig,
    token_client: TokenExchangeClient,
    event_client: CalendarEventClient,
}

impl<C: CredentialProvider> StatusQuery<C> {
    /// Creates a query over the given credential source.
    pub fn new(credentials: C, config: StatusQueryConfig) -> Self {
        let token_client = TokenExchangeClient::new(config.timeout);
        let event_client = CalendarEventClient::new(config.timeout);
        Self {
            credentials,
            config,
            token_client,
            event_client,
        }
    }

    /// Overrides the calendar API base URL (tests, alternate deployments).
    #[must_use]
    pub fn with_calendar_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.event_client = self.event_client.with_base_url(base_url);
        self
    }

    /// Answers "is the owner in a meeting right now?" for the local day.
    pub async fn run(&self) -> StatusResult<MeetingStatus> {
        self.run_at(Utc::now(), &Local).await
    }

    /// Runs the pipeline for an explicit instant and day timezone.
    pub async fn run_at<Tz: TimeZone>(
        &self,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> StatusResult<MeetingStatus> {
        let identity = self.credentials.service_identity()?;
        let signing_key = parse_private_key(&identity.private_key_pem)?;

        let unsigned = build_unsigned_assertion(&identity, &self.config.scopes, now);
        let assertion = sign_assertion(&unsigned, &signing_key)?;
        debug!(iss = %identity.client_email, "minted bearer assertion");

        let token = with_retry(&self.config.retry, || {
            self.token_client.exchange(&identity.token_uri, &assertion)
        })
        .await?;

        let window = DayWindow::containing(now, tz);
        let events = with_retry(&self.config.retry, || {
            self.event_client.list_day_events(
                &token,
                &self.config.calendar_id,
                &window,
                self.config.all_day_mode,
            )
        })
        .await?;

        Ok(classify(now, &events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = StatusQueryConfig::new("primary");
        assert_eq!(config.calendar_id, "primary");
        assert_eq!(config.scopes, vec![CALENDAR_READONLY_SCOPE.to_string()]);
        assert_eq!(config.all_day_mode, AllDayMode::Local);
        assert_eq!(
            config.timeout,
            Duration::from_secs(StatusQueryConfig::DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn config_builders() {
        let config = StatusQueryConfig::new("team@example.com")
            .with_all_day_mode(AllDayMode::Utc)
            .with_timeout(Duration::from_secs(5))
            .with_retry(RetryPolicy::none());

        assert_eq!(config.all_day_mode, AllDayMode::Utc);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.retry.max_attempts, 1);
    }
}
