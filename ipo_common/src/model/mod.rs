//! Payload types returned by the IPO backend.
//!
//! - `envelope` — the `{ success, count?, data?, message? }` wrapper.
//! - `ipo` — IPO metadata record and its displayable fields.
//! - `subscription` — one row of subscription demand.
pub mod envelope;
pub mod ipo;
pub mod subscription;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::format::format_value;

/// Accepts any JSON scalar or structure as optional display text.
///
/// `null` and absent fields become `None`; strings pass through; other values
/// are rendered with [`format_value`] so that a backend sending `42` instead of
/// `"42"` still produces a usable record.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(format_value(&other)),
    })
}

/// Like [`lenient_text`], but a missing value becomes the empty string.
pub(crate) fn lenient_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_text(deserializer).map(Option::unwrap_or_default)
}
