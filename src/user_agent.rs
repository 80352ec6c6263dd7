//! User-Agent string sent with every leaderboard request.

/// Default User-Agent (tool name and crate version).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("plume-xp/{version} (leaderboard-stats)")
}
