//! IPO metadata record.
//!
//! The backend sends a flat object; the dashboard shows a fixed subset of its
//! fields in a fixed order (see [`IpoField`]). Unknown keys are kept in
//! `extra` so that nothing is lost on the way through.
use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use super::lenient_text;
use crate::format::format_field_name;

/// IPO details for one security.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpoRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub issue_size: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub issue_period: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub issue_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub price_range: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub face_value: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub discount: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cut_off_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub min_investment: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_updated: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub updated_at: Option<String>,
    /// Any keys not modelled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Fields shown in the IPO details table, in display order.
///
/// The `Display` form is the backend's key (`issueSize`).
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum IpoField {
    Symbol,
    IssueSize,
    IssuePeriod,
    IssueType,
    PriceRange,
    FaceValue,
    Discount,
    CutOffTime,
    MinInvestment,
    LastUpdated,
}

impl IpoField {
    /// Human label, derived from the key: `issueSize` → `Issue Size`.
    pub fn label(self) -> String {
        format_field_name(&self.to_string())
    }
}

impl IpoRecord {
    /// Raw value of a displayed field.
    pub fn get(&self, field: IpoField) -> Option<&str> {
        let value = match field {
            IpoField::Symbol => &self.symbol,
            IpoField::IssueSize => &self.issue_size,
            IpoField::IssuePeriod => &self.issue_period,
            IpoField::IssueType => &self.issue_type,
            IpoField::PriceRange => &self.price_range,
            IpoField::FaceValue => &self.face_value,
            IpoField::Discount => &self.discount,
            IpoField::CutOffTime => &self.cut_off_time,
            IpoField::MinInvestment => &self.min_investment,
            IpoField::LastUpdated => &self.last_updated,
        };
        value.as_deref()
    }

    /// `(label, value)` rows for the details table.
    ///
    /// Absent, null and empty fields are all "no value" and are skipped.
    pub fn display_rows(&self) -> Vec<(String, String)> {
        IpoField::iter()
            .filter_map(|field| match self.get(field) {
                Some(value) if !value.is_empty() => Some((field.label(), value.to_string())),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keys_and_labels() {
        assert_eq!(IpoField::CutOffTime.to_string(), "cutOffTime");
        assert_eq!(IpoField::CutOffTime.label(), "Cut Off Time");
        assert_eq!(IpoField::Symbol.label(), "Symbol");
    }

    #[test]
    fn display_rows_skip_missing_null_and_empty() {
        let record: IpoRecord = serde_json::from_str(
            r#"{
                "id": "abc",
                "symbol": "BHARATCOAL",
                "issueSize": "",
                "issueType": "Book Built",
                "minInvestment": null,
                "faceValue": 10,
                "listed": true,
                "createdAt": "2026-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        let rows = record.display_rows();
        assert_eq!(
            rows,
            vec![
                ("Symbol".to_string(), "BHARATCOAL".to_string()),
                ("Issue Type".to_string(), "Book Built".to_string()),
                ("Face Value".to_string(), "10".to_string()),
            ]
        );
        assert_eq!(record.extra.get("listed"), Some(&Value::Bool(true)));
        assert_eq!(record.created_at.as_deref(), Some("2026-01-01T00:00:00Z"));
    }
}
