//! IPO Dashboard — a terminal client that shows IPO details and live
//! subscription demand for one security. It fetches two JSON resources from the
//! IPO backend in parallel, orders the subscription rows by their serial
//! labels, and prints both as text tables.
//!
//! Usage example (CLI):
//! ```bash
//! IPO_API_BASE_URL=https://api.example.com ipo_dashboard --symbol BHARATCOAL
//! ```
//!
//! Exactly one load cycle runs per invocation. A transport failure on either
//! request prints the error view and exits with status 1; Ctrl+C while the
//! requests are in flight abandons them and exits with status 130.
#![warn(missing_docs)]
mod args;
mod config;
mod fetcher;
mod state;
mod table;
mod view;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use ipo_common::Result;
use log::{info, warn};

use crate::args::Args;
use crate::config::DashboardConfig;
use crate::fetcher::IpoFetcher;
use crate::state::LoadState;
use crate::table::Style;

/// Exit status after an interrupted load.
const INTERRUPTED: u8 = 130;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    init_logger();
    let args = Args::parse();
    let config = DashboardConfig::from_args(&args, io::stdout().is_terminal())?;
    let style = Style {
        color: config.color,
    };
    info!("Dashboard for {} using {}", config.symbol, config.base_url);

    let fetcher = IpoFetcher::new(config.base_url.clone());
    eprint!(
        "{}",
        view::render(&LoadState::default(), &config.symbol, Style::plain())
    );

    let interrupt = tokio::signal::ctrl_c();
    let Some(state) = load_or_interrupt(&fetcher, &config.symbol, interrupt).await else {
        warn!("Ctrl+C received. Abandoning in-flight requests...");
        return Ok(ExitCode::from(INTERRUPTED));
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(view::render(&state, &config.symbol, style).as_bytes())?;
    stdout.flush()?;

    Ok(if state.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Runs one load cycle, or returns `None` when `interrupt` completes first.
///
/// An `interrupt` that fails (no signal handler could be installed) disables
/// that branch and the load runs to completion.
async fn load_or_interrupt<F>(fetcher: &IpoFetcher, symbol: &str, interrupt: F) -> Option<LoadState>
where
    F: Future<Output = io::Result<()>>,
{
    tokio::select! {
        loaded = fetcher.load(symbol) => Some(loaded),
        Ok(()) = interrupt => None,
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
