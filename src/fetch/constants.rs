//! Constants for the fetch module (endpoint, paging, timeouts, retry pacing).

use std::time::Duration;

/// Leaderboard endpoint on the Plume portal API.
pub const DEFAULT_ENDPOINT: &str = "https://portal-api.plume.org/api/v1/stats/leaderboard";

/// Number of leaderboard records covered by a full run.
pub const DEFAULT_TOTAL_RECORDS: u64 = 360_000;

/// Records requested per page (`count` query parameter).
pub const DEFAULT_PAGE_SIZE: u64 = 10_000;

/// Per-request timeout (10 seconds).
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Fixed delay between attempts for the same page.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Courtesy pause after each page that returned data.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(1);

/// Fixed query parameters sent with every page request, in wire order.
pub(crate) const FIXED_QUERY: [(&str, &str); 3] = [
    ("walletAddress", "undefined"),
    ("overrideDay1Override", "false"),
    ("preview", "false"),
];
