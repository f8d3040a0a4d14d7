//! Text views for each load state.
//!
//! - Loading — a one-line notice.
//! - Error — heading plus the failure message; nothing else is drawn.
//! - Ready — title, IPO details section, subscription section. Each section
//!   falls back to its own "no data" line independently of the other.
use std::fmt::Display;

use chrono::{Local, TimeZone};
use ipo_common::format::format_timestamp;
use ipo_common::model::subscription::latest_snapshot;
use ipo_common::serial::arrange;
use ipo_common::{IpoResponse, SubscriptionResponse};

use crate::state::LoadState;
use crate::table::{Align, Cell, Style, TextTable};

/// Loading notice.
pub const LOADING_TEXT: &str = "Loading IPO data...";
/// Error view heading.
pub const ERROR_HEADING: &str = "Error Loading Data";
/// IPO section placeholder.
pub const NO_IPO_DETAILS: &str = "No IPO details available";
/// Subscription section placeholder.
pub const NO_SUBSCRIPTIONS: &str = "No subscription data available";

const INDENT: &str = "  ";

/// Renders `state`, formatting timestamps in the local timezone.
pub fn render(state: &LoadState, symbol: &str, style: Style) -> String {
    render_in(state, symbol, style, &Local)
}

/// Renders `state`, formatting timestamps in `tz`.
pub fn render_in<Tz: TimeZone>(state: &LoadState, symbol: &str, style: Style, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    match state {
        LoadState::Loading => format!("{}\n", LOADING_TEXT),
        LoadState::Error(message) => format!("{}\n{}\n", style.bold(ERROR_HEADING), message),
        LoadState::Ready { ipo, subscriptions } => {
            let mut out = String::new();
            out.push_str(&format!("{}\n", style.bold("IPO Dashboard")));
            out.push_str(&format!("{} - Real-time subscription tracking\n\n", symbol));
            out.push_str(&ipo_section(ipo, style));
            out.push('\n');
            out.push_str(&subscription_section(subscriptions, style, tz));
            out
        }
    }
}

fn ipo_section(ipo: &IpoResponse, style: Style) -> String {
    let mut out = style.bold("IPO Details");
    if ipo.success {
        out.push_str(" [Active]");
    }
    out.push('\n');

    match ipo.displayable() {
        Some(record) => {
            let mut table = TextTable::new(&[("Field", Align::Left), ("Value", Align::Left)]);
            for (label, value) in record.display_rows() {
                table.push_row(vec![Cell::new(label), Cell::new(value)]);
            }
            out.push_str(&table.render(style));
        }
        None => out.push_str(&format!("{}\n", NO_IPO_DETAILS)),
    }
    out
}

fn subscription_section<Tz: TimeZone>(
    subscriptions: &SubscriptionResponse,
    style: Style,
    tz: &Tz,
) -> String
where
    Tz::Offset: Display,
{
    let mut out = style.bold("Subscription Details");
    if let Some(count) = subscriptions.badge_count() {
        out.push_str(&format!(" [{} Categories]", count));
    }
    out.push('\n');

    let records = match subscriptions.displayable() {
        Some(records) if !records.is_empty() => records,
        _ => {
            out.push_str(&format!("{}\n", NO_SUBSCRIPTIONS));
            return out;
        }
    };

    let mut table = TextTable::new(&[
        ("NO.", Align::Left),
        ("Category", Align::Left),
        ("Offered", Align::Right),
        ("Applied", Align::Right),
        ("Times", Align::Right),
    ]);
    for row in arrange(records.clone()) {
        let hints = row.hints;
        // Each main category starts a new band.
        if hints.is_main_category && !table.is_empty() {
            table.push_rule();
        }
        let bold = hints.is_emphasized;
        let category = format!("{}{}", INDENT.repeat(hints.depth as usize), row.record.category);
        table.push_row(vec![
            Cell::emphasized(row.record.serial_label(), bold),
            Cell::emphasized(category, bold),
            Cell::emphasized(row.record.offered_text(), bold),
            Cell::emphasized(row.record.applied_text(), bold),
            Cell::emphasized(row.record.times_text(), bold),
        ]);
    }
    out.push_str(&table.render(style));

    if let Some(raw) = latest_snapshot(records) {
        out.push_str(&format!("As of {}\n", format_timestamp(raw, tz)));
    }
    out
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
