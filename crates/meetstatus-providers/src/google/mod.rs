//! Google-shaped calendar provider: service-account auth and event fetch.

pub mod client;
pub mod credentials;
pub mod jwt;
pub mod status;
pub mod token;

pub use client::CalendarEventClient;
pub use credentials::{
    CredentialProvider, DEFAULT_TOKEN_URI, ServiceAccountKey, ServiceIdentity, SplitCredentials,
};
pub use jwt::{ASSERTION_LIFETIME_SECS, build_unsigned_assertion, parse_private_key, sign_assertion};
pub use status::{CALENDAR_READONLY_SCOPE, StatusQuery, StatusQueryConfig};
pub use token::{AccessToken, TokenExchangeClient};
