//!
//! Common types and logic for the IPO dashboard.
//!
//! This crate aggregates:
//! - `error` — unified error type `DashboardError` used across the workspace.
//! - `result` — handy `Result<T, DashboardError>` alias.
//! - `api` — backend resources and endpoint URLs.
//! - `model` — response envelopes, IPO and subscription records.
//! - `serial` — serial-number classification and row ordering.
//! - `collate` — natural, case-insensitive string ordering.
//! - `format` — number, multiple, label, and timestamp formatting.
#![warn(missing_docs)]
pub mod api;
pub mod collate;
pub mod error;
pub mod format;
pub mod model;
pub mod result;
pub mod serial;

pub use api::Resource;
pub use error::DashboardError;
pub use model::envelope::{Envelope, IpoResponse, SubscriptionResponse};
pub use model::ipo::{IpoField, IpoRecord};
pub use model::subscription::SubscriptionRecord;
pub use result::Result;
pub use serial::{RowHints, SerialClass, SubscriptionRow};
