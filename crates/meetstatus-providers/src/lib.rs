//! Credential minting and the meeting-status query pipeline.
//!
//! This crate owns everything between "a private key and a calendar id"
//! and "a [`MeetingStatus`](meetstatus_core::MeetingStatus)":
//!
//! - [`google::credentials`] - the two credential shapes behind
//!   [`CredentialProvider`]
//! - [`google::jwt`] - PEM key parsing, assertion construction, RS256
//!   signing
//! - [`google::token`] - the RFC 7523 JWT-bearer token exchange
//! - [`google::client`] - the event-list fetch
//! - [`google::status`] - the sequential pipeline tying them together
//! - [`retry`] - bounded backoff for the two network stages
//!
//! Errors carry a [`StatusErrorCode`] naming the stage that failed; every
//! stage fails fast and no partial result is ever returned.

pub mod error;
pub mod google;
pub mod retry;

pub use error::{StatusError, StatusErrorCode, StatusResult};
pub use google::{
    CredentialProvider, ServiceAccountKey, ServiceIdentity, SplitCredentials, StatusQuery,
    StatusQueryConfig,
};
pub use retry::{RetryPolicy, with_retry};
