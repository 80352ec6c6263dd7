//! HTTP client wrapper for leaderboard page requests.
//!
//! This module provides the `LeaderboardClient` struct which builds the
//! paginated query string, applies the request timeout, and decodes the
//! response envelope into [`LeaderboardEntry`] values.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use super::constants::{DEFAULT_ENDPOINT, FIXED_QUERY, REQUEST_TIMEOUT_SECS};
use super::entry::{LeaderboardEntry, LeaderboardResponse};
use super::error::FetchError;
use crate::user_agent;

/// HTTP client for one leaderboard endpoint.
///
/// Create it once per run and reuse it for every page so the connection
/// pool is shared.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use plume_xp_core::fetch::LeaderboardClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = LeaderboardClient::new(
///     "https://portal-api.plume.org/api/v1/stats/leaderboard",
///     Duration::from_secs(10),
/// )?;
/// let entries = client.fetch_page(0, 10_000).await?;
/// println!("Fetched {} entries", entries.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LeaderboardClient {
    client: Client,
    endpoint: Url,
}

impl LeaderboardClient {
    /// Creates a client for `endpoint` with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if `endpoint` is not an absolute
    /// http(s) URL, or [`FetchError::Network`] if the underlying client
    /// cannot be built.
    #[instrument(level = "debug", skip(timeout), fields(timeout = ?timeout))]
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, FetchError> {
        let endpoint = parse_endpoint(endpoint)?;
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(user_agent::default_user_agent())
            .build()
            .map_err(|e| FetchError::network(endpoint.as_str(), e))?;
        Ok(Self { client, endpoint })
    }

    /// Creates a client for the public Plume endpoint with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the underlying client cannot be built.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(
            DEFAULT_ENDPOINT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        )
    }

    /// Returns the configured endpoint (without paging parameters).
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Builds the request URL for one page.
    #[must_use]
    pub fn page_url(&self, offset: u64, count: u64) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in FIXED_QUERY {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("count", &count.to_string());
            pairs.append_pair("offset", &offset.to_string());
        }
        url
    }

    /// Fetches one page of leaderboard entries in a single attempt.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if:
    /// - The request fails or times out
    /// - The server returns a non-success status (4xx, 5xx)
    /// - The body is not a JSON object
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch_page(
        &self,
        offset: u64,
        count: u64,
    ) -> Result<Vec<LeaderboardEntry>, FetchError> {
        let url = self.page_url(offset, count);
        let url_str = url.as_str().to_string();
        debug!(url = %url_str, "requesting page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_transport(&url_str, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(&url_str, status.as_u16()));
        }

        let body: LeaderboardResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::timeout(&url_str)
            } else {
                FetchError::decode(&url_str, e)
            }
        })?;

        let entries = body.into_entries();
        debug!(entries = entries.len(), "page decoded");
        Ok(entries)
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, FetchError> {
    let url = Url::parse(endpoint).map_err(|_| FetchError::invalid_url(endpoint))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::invalid_url(endpoint));
    }
    Ok(url)
}
