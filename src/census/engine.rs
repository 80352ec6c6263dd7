//! Census engine: walks every leaderboard page in order and folds the XP.
//!
//! # Overview
//!
//! For each offset the engine asks the [`LeaderboardClient`] for one page,
//! retrying under the configured [`RetryPolicy`]. A page that still fails
//! after the last attempt is skipped: it contributes nothing and the loop moves
//! on. Pages that returned data are folded into an [`AggregationState`] and
//! followed by a courtesy pause. The summary is printed once every page has
//! been visited, even if none returned data.
//!
//! # Example
//!
//! ```no_run
//! use plume_xp_core::census::{CensusConfig, CensusEngine};
//! use plume_xp_core::report::Reporter;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = CensusEngine::new(CensusConfig::default())?;
//! let mut reporter = Reporter::new(std::io::stdout(), true);
//! let report = engine.run(&mut reporter).await?;
//! println!("{} wallets counted", report.state.entries());
//! # Ok(())
//! # }
//! ```

use std::io::{self, Write};

use tracing::{debug, info, instrument, warn};

use super::config::{CensusConfig, ConfigError};
use crate::aggregate::AggregationState;
use crate::fetch::{FetchError, LeaderboardClient, LeaderboardEntry, RetryDecision, RetryPolicy};
use crate::report::Reporter;

/// Error type for census runs.
///
/// Page fetch failures are not errors here; they are retried and then
/// skipped. Only setup problems and a broken output sink stop a run.
#[derive(Debug, thiserror::Error)]
pub enum CensusError {
    /// Configuration rejected before the run started.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP client could not be built.
    #[error("client setup failed: {0}")]
    Client(#[from] FetchError),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusReport {
    /// Final accumulators.
    pub state: AggregationState,
    /// Pages visited.
    pub pages_total: u64,
    /// Pages that returned at least one entry.
    pub pages_with_data: u64,
    /// Pages that returned an empty list.
    pub pages_empty: u64,
    /// Pages given up after the last attempt.
    pub pages_failed: u64,
}

/// How one page ended.
#[derive(Debug)]
enum PageOutcome {
    Fetched(Vec<LeaderboardEntry>),
    Abandoned,
}

/// Sequential page walker.
#[derive(Debug)]
pub struct CensusEngine {
    config: CensusConfig,
    client: LeaderboardClient,
    retry_policy: RetryPolicy,
}

impl CensusEngine {
    /// Validates `config` and builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Config`] for invalid values, or
    /// [`CensusError::Client`] if the HTTP client cannot be built.
    pub fn new(config: CensusConfig) -> Result<Self, CensusError> {
        config.validate()?;
        let client = LeaderboardClient::new(&config.endpoint, config.request_timeout)?;
        let retry_policy = config.retry_policy();
        Ok(Self {
            config,
            client,
            retry_policy,
        })
    }

    /// Returns the configuration this engine runs with.
    #[must_use]
    pub fn config(&self) -> &CensusConfig {
        &self.config
    }

    /// Visits every page, prints progress and the summary, and returns the totals.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Output`] if the reporter cannot write. Fetch
    /// failures never end the run.
    #[instrument(
        skip(self, reporter),
        fields(endpoint = %self.client.endpoint(), pages = self.config.page_count())
    )]
    pub async fn run<W: Write>(
        &self,
        reporter: &mut Reporter<W>,
    ) -> Result<CensusReport, CensusError> {
        let mut report = CensusReport {
            state: AggregationState::new(),
            pages_total: 0,
            pages_with_data: 0,
            pages_empty: 0,
            pages_failed: 0,
        };

        reporter.start()?;

        for offset in self.config.offsets() {
            report.pages_total += 1;
            reporter.page_start(offset, self.config.page_size)?;

            let entries = match self.fetch_with_retry(offset, reporter).await? {
                PageOutcome::Fetched(entries) => entries,
                PageOutcome::Abandoned => {
                    report.pages_failed += 1;
                    reporter.page_empty(offset)?;
                    continue;
                }
            };

            if entries.is_empty() {
                debug!(offset, "page returned no entries");
                report.pages_empty += 1;
                reporter.page_empty(offset)?;
                continue;
            }

            let tally = report.state.record_page(&entries);
            report.pages_with_data += 1;
            debug!(offset, entries = tally.entries, xp = %tally.xp, "page folded");
            reporter.page_partial(offset, tally)?;

            tokio::time::sleep(self.config.page_delay).await;
        }

        reporter.summary(self.config.total_records, &report.state)?;

        info!(
            pages = report.pages_total,
            with_data = report.pages_with_data,
            empty = report.pages_empty,
            failed = report.pages_failed,
            entries = report.state.entries(),
            "census complete"
        );

        Ok(report)
    }

    /// Fetches one page, retrying per policy; gives up without erroring.
    async fn fetch_with_retry<W: Write>(
        &self,
        offset: u64,
        reporter: &mut Reporter<W>,
    ) -> Result<PageOutcome, CensusError> {
        let mut attempt = 1;
        loop {
            match self.client.fetch_page(offset, self.config.page_size).await {
                Ok(entries) => return Ok(PageOutcome::Fetched(entries)),
                Err(error) => {
                    warn!(offset, attempt, error = %error, "page fetch failed");
                    reporter.attempt_failed(offset, &error)?;

                    match self.retry_policy.should_retry(attempt) {
                        RetryDecision::Retry {
                            delay,
                            attempt: next_attempt,
                        } => {
                            reporter.retry_scheduled(delay)?;
                            tokio::time::sleep(delay).await;
                            attempt = next_attempt;
                        }
                        RetryDecision::DoNotRetry { reason } => {
                            warn!(offset, attempts = attempt, reason = %reason, "skipping page");
                            reporter.page_abandoned(offset, attempt)?;
                            return Ok(PageOutcome::Abandoned);
                        }
                    }
                }
            }
        }
    }
}
