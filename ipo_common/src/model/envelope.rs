//! Response envelope shared by both endpoints.
use serde::Deserialize;

use super::ipo::IpoRecord;
use super::subscription::SubscriptionRecord;

/// Wrapper around every backend payload.
///
/// `success: false` is a valid "nothing to show" answer, not a failure; only
/// transport errors abort a load cycle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    /// Business-level success flag.
    #[serde(default)]
    pub success: bool,
    /// Number of items, sent by list endpoints only.
    #[serde(default)]
    pub count: Option<u64>,
    /// Payload, present when `success` is true.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Optional explanation, usually set when `success` is false.
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope of `GET /ipos/{symbol}`.
pub type IpoResponse = Envelope<IpoRecord>;
/// Envelope of `GET /ipos/{symbol}/subscriptions`.
pub type SubscriptionResponse = Envelope<Vec<SubscriptionRecord>>;

impl<T> Envelope<T> {
    /// Payload to display, or `None` when the section should show its
    /// "no data" placeholder.
    pub fn displayable(&self) -> Option<&T> {
        if self.success { self.data.as_ref() } else { None }
    }

    /// Item count for the section badge; zero counts are not shown.
    pub fn badge_count(&self) -> Option<u64> {
        self.count.filter(|count| *count > 0)
    }
}
