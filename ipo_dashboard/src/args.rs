//! Command-line arguments for the IPO dashboard.
//!
//! This module defines the CLI interface using `clap`. Every option can also
//! come from the environment; see `config` for how the values are validated.
use clap::Parser;

use crate::config::DEFAULT_SYMBOL;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Root URL of the IPO backend, e.g. `https://api.example.com/v1`.
    #[clap(long, env = "IPO_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Security symbol whose IPO should be displayed.
    #[clap(long, env = "IPO_SYMBOL", default_value = DEFAULT_SYMBOL)]
    pub symbol: String,

    /// Print plain text without bold emphasis.
    #[clap(long)]
    pub no_color: bool,
}
