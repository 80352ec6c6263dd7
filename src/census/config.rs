//! Run configuration for a leaderboard census.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::fetch::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_ATTEMPTS, DEFAULT_PAGE_DELAY, DEFAULT_PAGE_SIZE,
    DEFAULT_RETRY_DELAY, DEFAULT_TOTAL_RECORDS, REQUEST_TIMEOUT_SECS, RetryPolicy,
};

/// Invalid configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Page size of zero would never advance the offset.
    #[error("invalid page size {value}: must be at least 1")]
    InvalidPageSize {
        /// The rejected value.
        value: u64,
    },

    /// Nothing to fetch.
    #[error("invalid total records {value}: must be at least 1")]
    InvalidTotalRecords {
        /// The rejected value.
        value: u64,
    },

    /// Requests would time out before connecting.
    #[error("invalid request timeout {value:?}: must be at least 1 second")]
    InvalidTimeout {
        /// The rejected value.
        value: Duration,
    },

    /// Endpoint is not an absolute http(s) URL.
    #[error("invalid endpoint {value}: expected an http(s) URL")]
    InvalidEndpoint {
        /// The rejected value.
        value: String,
    },
}

/// Everything a census run needs to know.
///
/// [`Default`] reproduces the public Plume run: 360.000 records in pages of
/// 10.000, three attempts per page five seconds apart, one second between
/// pages, ten second request timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusConfig {
    /// Leaderboard endpoint without paging parameters.
    pub endpoint: String,
    /// Records covered by the run; the page count is `ceil(total_records / page_size)`.
    pub total_records: u64,
    /// Records per page (`count` query parameter).
    pub page_size: u64,
    /// Attempts per page, initial request included.
    pub max_attempts: u32,
    /// Pause between attempts for the same page.
    pub retry_delay: Duration,
    /// Pause after each page that returned data.
    pub page_delay: Duration,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            total_records: DEFAULT_TOTAL_RECORDS,
            page_size: DEFAULT_PAGE_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            page_delay: DEFAULT_PAGE_DELAY,
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl CensusConfig {
    /// Checks the values against runtime constraints.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize {
                value: self.page_size,
            });
        }
        if self.total_records == 0 {
            return Err(ConfigError::InvalidTotalRecords {
                value: self.total_records,
            });
        }
        if self.request_timeout < Duration::from_secs(1) {
            return Err(ConfigError::InvalidTimeout {
                value: self.request_timeout,
            });
        }
        let endpoint_ok = Url::parse(&self.endpoint)
            .is_ok_and(|url| matches!(url.scheme(), "http" | "https"));
        if !endpoint_ok {
            return Err(ConfigError::InvalidEndpoint {
                value: self.endpoint.clone(),
            });
        }
        Ok(())
    }

    /// Number of pages in the run (ceiling division).
    #[must_use]
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_records.div_ceil(self.page_size)
    }

    /// Zero-based offsets of every page, in request order.
    pub fn offsets(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.page_count()).map(move |page| page.saturating_mul(self.page_size))
    }

    /// Retry policy derived from `max_attempts` and `retry_delay`.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, self.retry_delay)
    }
}
