//! Resolved dashboard configuration.
//!
//! `Args` carries raw strings straight from the command line or environment;
//! `DashboardConfig` holds validated values and is what the fetcher and the
//! views are built from. Nothing reads the environment after this point.
use ipo_common::{DashboardError, Result};
use url::Url;

use crate::args::Args;

/// Security shown when none is configured.
pub const DEFAULT_SYMBOL: &str = "BHARATCOAL";

/// Validated configuration for one dashboard run.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Root for all outgoing requests.
    pub base_url: Url,
    /// Security identifier.
    pub symbol: String,
    /// Emit ANSI bold for emphasised rows.
    pub color: bool,
}

impl DashboardConfig {
    /// Builds a configuration from explicit values.
    pub fn new(base_url: &str, symbol: &str, color: bool) -> Result<Self> {
        let symbol = normalize(symbol);
        if symbol.is_empty() {
            return Err(DashboardError::Config("symbol must not be empty".to_string()));
        }
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            symbol: symbol.to_string(),
            color,
        })
    }

    /// Builds a configuration from parsed CLI arguments.
    ///
    /// Colour is used only when stdout is a terminal and `--no-color` is
    /// absent.
    pub fn from_args(args: &Args, stdout_is_terminal: bool) -> Result<Self> {
        let base_url = args.base_url.as_deref().ok_or_else(|| {
            DashboardError::Config(
                "API base URL is not configured; set IPO_API_BASE_URL or pass --base-url"
                    .to_string(),
            )
        })?;
        Self::new(base_url, &args.symbol, stdout_is_terminal && !args.no_color)
    }
}

/// Trim whitespace and one pair of matching quotes.
///
/// Values pasted into `.env` files or shell scripts often keep their quotes.
fn normalize(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(trimmed)
        .trim()
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let raw = normalize(raw);
    if raw.is_empty() {
        return Err(DashboardError::Config("API base URL is empty".to_string()));
    }
    let url = Url::parse(raw)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(DashboardError::Config(format!(
            "API base URL must use http or https, got `{}`",
            url.scheme()
        )));
    }
    Ok(url)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
