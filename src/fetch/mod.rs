//! Leaderboard page fetching.
//!
//! This module talks to the leaderboard HTTP API one page at a time.
//!
//! # Features
//!
//! - Fixed paging query (`walletAddress`, `overrideDay1Override`, `preview`, `count`, `offset`)
//! - Per-request timeout (10s by default)
//! - Lenient `totalXp` decoding: absent or odd values count as 0
//! - Fixed-delay [`RetryPolicy`] shared by every failure kind
//!
//! # Example
//!
//! ```no_run
//! use plume_xp_core::fetch::LeaderboardClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LeaderboardClient::with_defaults()?;
//! let entries = client.fetch_page(0, 10_000).await?;
//! let xp: u64 = entries.iter().map(|e| e.total_xp).sum();
//! println!("First page holds {xp} XP");
//! # Ok(())
//! # }
//! ```

mod client;
pub mod constants;
mod entry;
mod error;
mod retry;

pub use client::LeaderboardClient;
pub use constants::{
    DEFAULT_ENDPOINT, DEFAULT_PAGE_DELAY, DEFAULT_PAGE_SIZE, DEFAULT_RETRY_DELAY,
    DEFAULT_TOTAL_RECORDS, REQUEST_TIMEOUT_SECS,
};
pub use entry::LeaderboardEntry;
pub use error::FetchError;
pub use retry::{DEFAULT_MAX_ATTEMPTS, RetryDecision, RetryPolicy};
