//! Integration tests for a full census run against a mock leaderboard.

mod support;

use std::time::Duration;

use plume_xp_core::{CensusConfig, CensusEngine, CensusReport, Reporter, XpRange};
use support::socket_guard::start_mock_server_or_skip;
use support::{endpoint, mount_failing_page, mount_page};
use wiremock::MockServer;

fn fast_config(server: &MockServer, total_records: u64, page_size: u64) -> CensusConfig {
    CensusConfig {
        endpoint: endpoint(server),
        total_records,
        page_size,
        retry_delay: Duration::ZERO,
        page_delay: Duration::ZERO,
        ..CensusConfig::default()
    }
}

async fn run(config: CensusConfig) -> (CensusReport, String) {
    let engine = CensusEngine::new(config).expect("valid config");
    let mut reporter = Reporter::new(Vec::new(), false);
    let report = engine.run(&mut reporter).await.expect("run completes");
    let out = String::from_utf8(reporter.into_inner()).expect("utf-8 report");
    (report, out)
}

#[tokio::test]
async fn test_census_totals_match_served_pages() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    let pages: [&[u64]; 4] = [
        &[500, 15_000, 1_000, 0],
        &[320_000, 210_000, 150_000, 90_000],
        &[70_000, 50_000, 25_000, 10_000],
        &[9_999, 1_001],
    ];
    for (page, xp) in pages.iter().enumerate() {
        mount_page(&server, page as u64 * 4, xp).await;
    }

    let (report, out) = run(fast_config(&server, 16, 4)).await;

    let all: Vec<u64> = pages.iter().flat_map(|p| p.iter().copied()).collect();
    let state = &report.state;
    assert_eq!(state.total_xp(), all.iter().copied().map(u128::from).sum::<u128>());
    assert_eq!(
        state.above_threshold_xp(),
        all.iter()
            .copied()
            .filter(|xp| *xp > 10_000)
            .map(u128::from)
            .sum::<u128>()
    );
    assert_eq!(state.range_counts().total(), all.len() as u64);
    assert_eq!(state.range_counts().get(XpRange::From1k), 3);
    assert_eq!(state.range_counts().get(XpRange::UpTo1k), 2);
    assert_eq!(state.range_counts().get(XpRange::From10k), 2);
    assert_eq!(report.pages_with_data, 4);

    assert!(out.starts_with("Iniciando a coleta de dados do leaderboard...\n"));
    assert!(out.contains("Buscando registros 12 a 15...\n"));
    assert!(out.contains("XP parcial para registros 12 a 13: 11.000\n"));
}

#[tokio::test]
async fn test_census_skips_exhausted_page_and_keeps_going() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_page(&server, 0, &[1_000]).await;
    mount_failing_page(&server, 1, 500, 3).await;
    mount_page(&server, 2, &[20_000]).await;

    let (report, out) = run(fast_config(&server, 3, 1)).await;

    assert_eq!(report.pages_total, 3);
    assert_eq!(report.pages_failed, 1);
    assert_eq!(report.state.total_xp(), 21_000);
    assert_eq!(report.state.above_threshold_xp(), 20_000);
    assert!(out.contains("Falha ao buscar offset 1 após 3 tentativas."));
    assert!(out.contains("XP parcial para registros 2 a 2: 20.000"));
}

#[tokio::test]
async fn test_census_honors_configured_attempts() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_failing_page(&server, 0, 429, 1).await;

    let config = CensusConfig {
        max_attempts: 1,
        ..fast_config(&server, 1, 1)
    };
    let (report, out) = run(config).await;

    assert_eq!(report.pages_failed, 1);
    assert!(!out.contains("Tentando novamente"));
    assert!(out.contains("após 1 tentativas."));
}

#[tokio::test]
async fn test_census_pauses_between_data_pages() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_page(&server, 0, &[1]).await;
    mount_page(&server, 1, &[2]).await;

    let config = CensusConfig {
        page_delay: Duration::from_millis(150),
        ..fast_config(&server, 2, 1)
    };
    let started = std::time::Instant::now();
    let (report, _) = run(config).await;

    assert_eq!(report.state.total_xp(), 3);
    assert!(
        started.elapsed() >= Duration::from_millis(300),
        "expected two page pauses, elapsed {:?}",
        started.elapsed()
    );
}

#[tokio::test]
async fn test_census_skips_pause_after_empty_and_failed_pages() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_page(&server, 0, &[]).await;
    mount_failing_page(&server, 1, 503, 3).await;
    mount_page(&server, 2, &[]).await;

    let config = CensusConfig {
        page_delay: Duration::from_secs(5),
        ..fast_config(&server, 3, 1)
    };
    let started = std::time::Instant::now();
    let (report, out) = run(config).await;

    assert_eq!(report.pages_empty, 2);
    assert_eq!(report.pages_failed, 1);
    assert_eq!(report.pages_with_data, 0);
    assert!(out.contains("Total final de XP para 3 carteiras: 0"));
    assert!(
        started.elapsed() < Duration::from_secs(2),
        "empty and failed pages should not pause, elapsed {:?}",
        started.elapsed()
    );
}
