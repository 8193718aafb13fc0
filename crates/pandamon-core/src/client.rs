//! One-shot HTTP client for the status endpoint.
//!
//! The client issues exactly one GET per call, bypassing intermediate caches
//! (`Cache-Control: no-cache` plus a millisecond timestamp query parameter),
//! and folds every failure into a two-code taxonomy the view can render:
//! `unreachable` for transport failures, `bad_status` for completed requests
//! whose response is unusable.

use std::fmt;

use crate::status::RemoteStatus;

/// Standard User-Agent header for pandamon requests.
pub const USER_AGENT: &str = concat!("pandamon/", env!("CARGO_PKG_VERSION"));

/// Default status endpoint when neither env nor config provides one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/api/panda";

/// Why the single fetch for this visit could not produce a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    /// Transport-level failure, the request never completed.
    Unreachable,
    /// The request completed but the response was unusable: a non-success
    /// HTTP status, or a body that does not satisfy the payload shape.
    BadStatus,
}

impl FetchFailure {
    /// Stable machine-readable code, fed into the error-note derivation.
    pub fn code(&self) -> &'static str {
        match self {
            FetchFailure::Unreachable => "unreachable",
            FetchFailure::BadStatus => "bad_status",
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Client for the status endpoint.
#[derive(Debug, Clone)]
pub struct StatusClient {
    http: reqwest::Client,
    endpoint: String,
}

impl StatusClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the current status once.
    ///
    /// No retry is attempted; a single failed attempt is terminal for this
    /// visit. No explicit timeout is imposed beyond the transport default.
    pub async fn fetch(&self) -> Result<RemoteStatus, FetchFailure> {
        let cache_bust = chrono::Utc::now().timestamp_millis();
        tracing::debug!(endpoint = %self.endpoint, "fetching status");

        let response = self
            .http
            .get(&self.endpoint)
            .header("Cache-Control", "no-cache")
            .query(&[("t", cache_bust)])
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "status request failed to complete");
                FetchFailure::Unreachable
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "status endpoint returned failure");
            return Err(FetchFailure::BadStatus);
        }

        // A well-formed JSON body missing `live` fails here too; a payload
        // without the signal is treated the same as a bad HTTP response.
        response.json::<RemoteStatus>().await.map_err(|err| {
            tracing::warn!(error = %err, "status payload failed to parse");
            FetchFailure::BadStatus
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_codes_are_stable() {
        assert_eq!(FetchFailure::Unreachable.code(), "unreachable");
        assert_eq!(FetchFailure::BadStatus.code(), "bad_status");
        assert_eq!(FetchFailure::Unreachable.to_string(), "unreachable");
    }

    #[test]
    fn test_client_keeps_endpoint() {
        let client = StatusClient::new("http://example.invalid/api/panda");
        assert_eq!(client.endpoint(), "http://example.invalid/api/panda");
    }
}
