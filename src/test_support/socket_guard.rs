//! Skips wiremock-backed tests where localhost sockets cannot be bound.
//!
//! Also compiled into the integration tests through `tests/support/mod.rs`.

use std::net::TcpListener;
use std::panic::Location;

use wiremock::MockServer;

/// Set `PLUME_XP_REQUIRE_SOCKET_TESTS=1` to fail instead of skip.
#[must_use]
fn socket_tests_required() -> bool {
    std::env::var("PLUME_XP_REQUIRE_SOCKET_TESTS")
        .ok()
        .is_some_and(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

#[track_caller]
#[must_use]
pub fn should_skip_socket_bound_test() -> bool {
    if TcpListener::bind("127.0.0.1:0").is_ok() {
        return false;
    }

    let location = Location::caller();
    let message = format!(
        "[socket-bound-test] cannot bind localhost socket at {}:{}; wiremock-based test cannot run in this environment",
        location.file(),
        location.line()
    );
    if socket_tests_required() {
        panic!("{message}. Set PLUME_XP_REQUIRE_SOCKET_TESTS=0 to allow local skip behavior.");
    }

    eprintln!(
        "{message}. Skipping test. Set PLUME_XP_REQUIRE_SOCKET_TESTS=1 to fail-fast instead."
    );
    true
}

pub async fn start_mock_server_or_skip() -> Option<MockServer> {
    if should_skip_socket_bound_test() {
        None
    } else {
        Some(MockServer::start().await)
    }
}
