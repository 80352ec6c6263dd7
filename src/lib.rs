//! Plume XP Core Library
//!
//! This library walks the Plume portal leaderboard page by page, sums the
//! `totalXp` of every wallet, and counts wallets per fixed XP range.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`fetch`] - HTTP client, response decoding and fixed-delay retry policy
//! - [`aggregate`] - XP range table and running totals
//! - [`report`] - Dotted number formatting and the Portuguese console report
//! - [`census`] - Run configuration and the sequential page engine

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod census;
pub mod fetch;
pub mod report;
#[cfg(test)]
pub mod test_support;
pub(crate) mod user_agent;

// Re-export commonly used types
pub use aggregate::{ABOVE_THRESHOLD_XP, AggregationState, PageTally, RangeCounts, XpRange};
pub use census::{CensusConfig, CensusEngine, CensusError, CensusReport, ConfigError};
pub use fetch::{
    DEFAULT_MAX_ATTEMPTS, FetchError, LeaderboardClient, LeaderboardEntry, RetryDecision,
    RetryPolicy,
};
pub use report::{Reporter, format_number};
