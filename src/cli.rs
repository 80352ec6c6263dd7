//! CLI argument definitions using clap derive macros.

use std::time::Duration;

use clap::Parser;

use plume_xp_core::CensusConfig;
use plume_xp_core::fetch::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_ATTEMPTS, DEFAULT_PAGE_SIZE, DEFAULT_TOTAL_RECORDS,
    REQUEST_TIMEOUT_SECS,
};

/// Tally experience points across the Plume portal leaderboard.
///
/// Fetches the leaderboard page by page, sums every wallet's XP, and prints
/// how many wallets fall into each XP range.
#[derive(Parser, Debug)]
#[command(name = "plume-xp")]
#[command(author, version, about)]
pub struct Args {
    /// Increase log verbosity on stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors on stderr (the report on stdout is unaffected)
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Leaderboard endpoint (paging parameters are appended)
    #[arg(short = 'e', long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Number of leaderboard records to cover
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOTAL_RECORDS, value_parser = clap::value_parser!(u64).range(1..))]
    pub total_records: u64,

    /// Records requested per page
    #[arg(short = 'p', long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: u64,

    /// Attempts per page before skipping it (1-10)
    #[arg(short = 'r', long, default_value_t = DEFAULT_MAX_ATTEMPTS as u8, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub max_attempts: u8,

    /// Seconds to wait between attempts for the same page (0-300)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(0..=300))]
    pub retry_delay: u64,

    /// Milliseconds to wait after each page that returned data (0-60000)
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(0..=60000))]
    pub page_delay_ms: u64,

    /// Per-request timeout in seconds (1-300)
    #[arg(short = 't', long, default_value_t = REQUEST_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=300))]
    pub timeout: u64,
}

impl Args {
    /// Builds the run configuration from the parsed flags.
    pub fn census_config(&self) -> CensusConfig {
        CensusConfig {
            endpoint: self.endpoint.clone(),
            total_records: self.total_records,
            page_size: self.page_size,
            max_attempts: u32::from(self.max_attempts),
            retry_delay: Duration::from_secs(self.retry_delay),
            page_delay: Duration::from_millis(self.page_delay_ms),
            request_timeout: Duration::from_secs(self.timeout),
        }
    }
}
