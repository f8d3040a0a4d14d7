//! Backend endpoints consumed by the dashboard.
//!
//! Two read-only resources are fetched per security:
//! - `GET {base}/ipos/{symbol}` — IPO details envelope.
//! - `GET {base}/ipos/{symbol}/subscriptions` — subscription rows envelope.
use strum_macros::Display;
use url::Url;

use crate::error::DashboardError;
use crate::result::Result;

/// Path segment shared by both endpoints.
pub const IPOS_SEGMENT: &str = "ipos";
/// Trailing path segment of the subscription endpoint.
pub const SUBSCRIPTIONS_SEGMENT: &str = "subscriptions";

/// The two resources fetched per load cycle.
///
/// The display text is what error messages name ("Failed to fetch IPO data").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Resource {
    /// IPO metadata for one security.
    #[strum(to_string = "IPO data")]
    IpoDetails,
    /// Subscription demand rows for one security.
    #[strum(to_string = "subscription data")]
    Subscriptions,
}

impl Resource {
    /// Builds the endpoint URL for this resource under `base`.
    ///
    /// Any path prefix on `base` is kept, a trailing slash is ignored, and the
    /// symbol is percent-encoded as a single path segment.
    pub fn endpoint(self, base: &Url, symbol: &str) -> Result<Url> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                DashboardError::Config(format!("base URL cannot carry a path: {}", base))
            })?;
            segments.pop_if_empty().push(IPOS_SEGMENT).push(symbol);
            if self == Resource::Subscriptions {
                segments.push(SUBSCRIPTIONS_SEGMENT);
            }
        }
        Ok(url)
    }
}
