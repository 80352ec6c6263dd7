//! Wire types for the leaderboard response body.
//!
//! The body looks like `{ "data": { "leaderboard": [ { "totalXp": 123, ... } ] } }`.
//! Any missing level is treated as an empty page.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One wallet's record on the leaderboard.
///
/// Only `totalXp` is read; every other field the API sends is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LeaderboardEntry {
    /// Experience points for this wallet (0 when absent or unusable).
    #[serde(rename = "totalXp", default, deserialize_with = "lenient_xp")]
    pub total_xp: u64,
}

impl LeaderboardEntry {
    /// Creates an entry with the given XP.
    #[must_use]
    pub fn new(total_xp: u64) -> Self {
        Self { total_xp }
    }
}

/// Top-level response envelope.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LeaderboardResponse {
    #[serde(default)]
    data: Option<LeaderboardData>,
}

#[derive(Debug, Default, Deserialize)]
struct LeaderboardData {
    #[serde(default)]
    leaderboard: Option<Vec<LeaderboardEntry>>,
}

impl LeaderboardResponse {
    /// Extracts the entry list, empty when `data` or `leaderboard` is absent or null.
    pub(crate) fn into_entries(self) -> Vec<LeaderboardEntry> {
        self.data
            .and_then(|data| data.leaderboard)
            .unwrap_or_default()
    }
}

/// Reads `totalXp` without rejecting the whole page over one odd value.
///
/// Unsigned integers pass through, non-negative floats are truncated, and
/// anything else (null, negative, string, object) counts as 0.
fn lenient_xp<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(xp_from_value(&value))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn xp_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(number) => number.as_u64().unwrap_or_else(|| {
            number
                .as_f64()
                .filter(|xp| xp.is_finite() && *xp >= 0.0)
                .map_or(0, |xp| xp as u64)
        }),
        _ => 0,
    }
}
