#![allow(dead_code)]

#[path = "../../src/test_support/socket_guard.rs"]
pub mod socket_guard;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const BOARD_PATH: &str = "/api/v1/stats/leaderboard";

/// Leaderboard body holding one entry per XP value.
#[must_use]
pub fn page_body(xp: &[u64]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = xp
        .iter()
        .enumerate()
        .map(|(rank, xp)| {
            serde_json::json!({
                "walletAddress": format!("0x{rank:040x}"),
                "totalXp": xp,
                "rank": rank + 1
            })
        })
        .collect();
    serde_json::json!({ "data": { "leaderboard": entries } })
}

/// Serves `xp` as the page at `offset`.
pub async fn mount_page(server: &MockServer, offset: u64, xp: &[u64]) {
    Mock::given(method("GET"))
        .and(path(BOARD_PATH))
        .and(query_param("offset", offset.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(xp)))
        .mount(server)
        .await;
}

/// Fails the page at `offset` with `status`, expecting exactly `attempts` requests.
pub async fn mount_failing_page(server: &MockServer, offset: u64, status: u16, attempts: u64) {
    Mock::given(method("GET"))
        .and(path(BOARD_PATH))
        .and(query_param("offset", offset.to_string()))
        .respond_with(ResponseTemplate::new(status))
        .expect(attempts)
        .mount(server)
        .await;
}

#[must_use]
pub fn endpoint(server: &MockServer) -> String {
    format!("{}{BOARD_PATH}", server.uri())
}
