//! CLI entry point for the leaderboard XP census.

use std::io;

use anyhow::Result;
use clap::Parser;
use plume_xp_core::{CensusEngine, Reporter};
use tracing::{debug, info};

mod cli;
mod terminal;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    let no_color = terminal::should_disable_color(
        args.no_color,
        terminal::no_color_env_requested(),
        terminal::is_dumb_terminal(),
    );
    terminal::init_tracing(
        terminal::default_log_level(args.quiet, args.verbose),
        no_color,
    );

    debug!(?args, "CLI arguments parsed");

    let engine = CensusEngine::new(args.census_config())?;
    let config = engine.config();
    info!(
        endpoint = %config.endpoint,
        pages = config.page_count(),
        page_size = config.page_size,
        "census starting"
    );

    let mut reporter = Reporter::new(io::stdout(), !no_color);
    let report = engine.run(&mut reporter).await?;

    info!(
        wallets = report.state.entries(),
        total_xp = %report.state.total_xp(),
        pages_failed = report.pages_failed,
        "done"
    );

    Ok(())
}
