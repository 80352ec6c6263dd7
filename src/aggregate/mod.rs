//! XP aggregation over leaderboard pages.
//!
//! [`AggregationState`] keeps three accumulators for the whole run: the grand
//! total, the total over wallets above [`ABOVE_THRESHOLD_XP`], and a wallet
//! count per [`XpRange`].

mod range;
mod state;

pub use range::XpRange;
pub use state::{ABOVE_THRESHOLD_XP, AggregationState, PageTally, RangeCounts};
