//! Error types for the status-query pipeline.
//!
//! Every stage fails fast: an error anywhere aborts the whole query and
//! propagates to the caller of the pipeline. No stage recovers locally or
//! substitutes a fallback value.

use std::fmt;
use thiserror::Error;

/// The stage-level classification of a pipeline error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusErrorCode {
    /// Missing or empty credential or calendar-id configuration.
    Configuration,
    /// The private key string could not be turned into a signing key.
    KeyParsing,
    /// The cryptographic signing operation rejected the key or input.
    Signing,
    /// The token endpoint call failed or returned an unusable response.
    TokenExchange,
    /// The calendar event-list call failed or returned an unusable response.
    CalendarFetch,
    /// An individual event item had no usable start or end time.
    MalformedEvent,
}

impl StatusErrorCode {
    /// Returns a stable machine-readable name for this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration_error",
            Self::KeyParsing => "key_parsing_error",
            Self::Signing => "signing_error",
            Self::TokenExchange => "token_exchange_error",
            Self::CalendarFetch => "calendar_fetch_error",
            Self::MalformedEvent => "malformed_event_error",
        }
    }
}

impl fmt::Display for StatusErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error from one stage of the status-query pipeline.
#[derive(Debug, Error)]
pub struct StatusError {
    /// The stage that produced this error.
    code: StatusErrorCode,
    /// A human-readable message describing the error.
    message: String,
    /// Whether the failed operation is transient and may be retried.
    retryable: bool,
    /// The underlying cause, if any.
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StatusError {
    /// Creates a new error with the given code and message.
    pub fn new(code: StatusErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            retryable: false,
            source: None,
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(StatusErrorCode::Configuration, message)
    }

    /// Creates a key parsing error.
    pub fn key_parsing(message: impl Into<String>) -> Self {
        Self::new(StatusErrorCode::KeyParsing, message)
    }

    /// Creates a signing error.
    pub fn signing(message: impl Into<String>) -> Self {
        Self::new(StatusErrorCode::Signing, message)
    }

    /// Creates a token exchange error.
    pub fn token_exchange(message: impl Into<String>) -> Self {
        Self::new(StatusErrorCode::TokenExchange, message)
    }

    /// Creates a calendar fetch error.
    pub fn calendar_fetch(message: impl Into<String>) -> Self {
        Self::new(StatusErrorCode::CalendarFetch, message)
    }

    /// Creates a malformed event error.
    pub fn malformed_event(message: impl Into<String>) -> Self {
        Self::new(StatusErrorCode::MalformedEvent, message)
    }

    /// Marks this error as transient (a bounded retry may succeed).
    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }

    /// Sets the source error for this error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error code.
    pub fn code(&self) -> StatusErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this error is transient and may be retried.
    pub fn is_retryable(&self) -> bool {
        self.retryable
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A specialized Result type for pipeline operations.
pub type StatusResult<T> = Result<T, StatusError>;
