//! Exchanging a signed assertion for a short-lived access token.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{StatusError, StatusResult};

/// The JWT-bearer grant type of RFC 7523.
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// A short-lived access token.
///
/// Used for exactly one calendar fetch, then discarded; expiry is the
/// provider's concern and is not inspected locally.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Returns the raw token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    // Token values never end up in logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// Response from the token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Client for the OAuth2 token endpoint.
#[derive(Debug)]
pub struct TokenExchangeClient {
    http_client: reqwest::Client,
}

impl TokenExchangeClient {
    /// Creates a new client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        Self { http_client }
    }

    /// Trades a signed assertion for an access token.
    ///
    /// Sends a form-encoded POST carrying the JWT-bearer grant type and
    /// the assertion, and reads `access_token` from the JSON response.
    ///
    /// # Errors
    ///
    /// Returns a token exchange error when the HTTP call fails (transient,
    /// retryable), the endpoint answers with a non-success status, the
    /// body is not parseable JSON, or `access_token` is absent.
    pub async fn exchange(&self, token_uri: &Url, assertion: &str) -> StatusResult<AccessToken> {
        let params = [("grant_type", JWT_BEARER_GRANT), ("assertion", assertion)];

        let response = self
            .http_client
            .post(token_uri.clone())
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    "token request timed out".to_string()
                } else {
                    format!("token request failed: {}", e)
                };
                StatusError::token_exchange(message).with_source(e).retryable()
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            StatusError::token_exchange("failed to read token response")
                .with_source(e)
                .retryable()
        })?;

        if !status.is_success() {
            let err = StatusError::token_exchange(format!(
                "token endpoint returned {}: {}",
                status, body
            ));
            // Overloaded or failing authorization servers are worth another try.
            return Err(if status.is_server_error() || status.as_u16() == 429 {
                err.retryable()
            } else {
                err
            });
        }

        let parsed: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            StatusError::token_exchange("token response is not valid JSON").with_source(e)
        })?;

        match parsed.access_token {
            Some(token) if !token.is_empty() => {
                debug!("obtained access token");
                Ok(AccessToken(token))
            }
            _ => Err(StatusError::token_exchange(
                "token response has no access_token",
            )),
        }
    }
}
