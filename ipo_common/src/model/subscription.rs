//! Subscription demand row.
//!
//! Quantities arrive as numeric strings and are only interpreted at display
//! time (see `crate::format`), so a record never fails to load because of an
//! odd number.
use chrono::DateTime;
use serde::Deserialize;

use super::{lenient_label, lenient_text};
use crate::format::{format_number, format_times};

/// One row of the subscription table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    /// Record identifier.
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    /// Security the row belongs to.
    #[serde(default, deserialize_with = "lenient_text")]
    pub symbol: Option<String>,
    /// Investor category label, e.g. "Qualified Institutional Buyers".
    #[serde(default, deserialize_with = "lenient_label")]
    pub category: String,
    /// Shares offered to the category.
    #[serde(default, deserialize_with = "lenient_text")]
    pub offered: Option<String>,
    /// Shares bid for by the category.
    #[serde(default, deserialize_with = "lenient_text")]
    pub applied: Option<String>,
    /// Demand figure, when the exchange publishes one.
    #[serde(default, deserialize_with = "lenient_text")]
    pub demand: Option<String>,
    /// Subscription multiple.
    #[serde(default, deserialize_with = "lenient_text")]
    pub times: Option<String>,
    /// Hierarchy label such as `2.1(a)`; `None` behaves like an empty label.
    #[serde(default, deserialize_with = "lenient_text")]
    pub serial_number: Option<String>,
    /// Snapshot timestamp (RFC 3339).
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: Option<String>,
}

impl SubscriptionRecord {
    /// Serial label with surrounding whitespace removed.
    pub fn serial(&self) -> &str {
        self.serial_number.as_deref().unwrap_or_default().trim()
    }

    /// Serial label exactly as received, for display.
    pub fn serial_label(&self) -> &str {
        self.serial_number.as_deref().unwrap_or_default()
    }

    /// Offered quantity as table text.
    pub fn offered_text(&self) -> String {
        format_number(self.offered.as_deref())
    }

    /// Applied quantity as table text.
    pub fn applied_text(&self) -> String {
        format_number(self.applied.as_deref())
    }

    /// Subscription multiple as table text (`2.35x` or `--`).
    pub fn times_text(&self) -> String {
        format_times(self.times.as_deref().unwrap_or_default())
    }
}

/// Raw `createdAt` of the most recent snapshot among `records`.
///
/// Timestamps that are not RFC 3339 are ignored.
pub fn latest_snapshot(records: &[SubscriptionRecord]) -> Option<&str> {
    records
        .iter()
        .filter_map(|record| {
            let raw = record.created_at.as_deref()?;
            DateTime::parse_from_rfc3339(raw.trim())
                .ok()
                .map(|parsed| (parsed, raw))
        })
        .max_by_key(|(parsed, _)| *parsed)
        .map(|(_, raw)| raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_row() {
        let record: SubscriptionRecord = serde_json::from_str(
            r#"{
                "id": "r1",
                "symbol": "BHARATCOAL",
                "category": "Qualified Institutional Buyers",
                "offered": "1234567",
                "applied": 98765432,
                "demand": null,
                "times": "2.35",
                "serialNumber": " 1 ",
                "createdAt": "2026-01-09T08:05:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(record.serial(), "1");
        assert_eq!(record.serial_label(), " 1 ");
        assert_eq!(record.offered_text(), "12,34,567");
        assert_eq!(record.applied_text(), "9,87,65,432");
        assert_eq!(record.times_text(), "2.35x");
        assert_eq!(record.demand, None);
    }

    #[test]
    fn missing_fields_fall_back_to_placeholders() {
        let record: SubscriptionRecord =
            serde_json::from_str(r#"{"serialNumber": null, "category": null}"#).unwrap();
        assert_eq!(record.serial(), "");
        assert_eq!(record.category, "");
        assert_eq!(record.offered_text(), "--");
        assert_eq!(record.times_text(), "--");
    }

    #[test]
    fn latest_snapshot_picks_newest_parseable_timestamp() {
        let at = |raw: &str| SubscriptionRecord {
            created_at: Some(raw.to_string()),
            ..Default::default()
        };
        let records = vec![
            at("2026-01-09T08:05:00Z"),
            at("not a date"),
            at("2026-01-09T10:00:00+05:30"),
            at("2026-01-09T04:35:00Z"),
            SubscriptionRecord::default(),
        ];
        assert_eq!(latest_snapshot(&records), Some("2026-01-09T08:05:00Z"));
        assert_eq!(latest_snapshot(&[]), None);
    }
}
