//! Tri-state outcome of one load cycle.
use ipo_common::{IpoResponse, Result, SubscriptionResponse};

/// Shown when a failure carries no usable text.
pub const GENERIC_ERROR: &str = "An error occurred";

/// What the views have to work with.
///
/// A load cycle starts in `Loading` and moves exactly once to `Error` or
/// `Ready`. There is no partial `Ready`: if either request fails the whole
/// cycle is an `Error`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Requests are still in flight.
    #[default]
    Loading,
    /// A request failed at transport level.
    Error(String),
    /// Both requests answered; either envelope may still say `success: false`.
    Ready {
        /// IPO details envelope.
        ipo: IpoResponse,
        /// Subscription rows envelope.
        subscriptions: SubscriptionResponse,
    },
}

impl LoadState {
    /// `Error` with `message`, or the generic text when it is blank.
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            LoadState::Error(GENERIC_ERROR.to_string())
        } else {
            LoadState::Error(message)
        }
    }

    /// Settles a joined fetch into `Ready` or `Error`.
    pub fn from_outcome(outcome: Result<(IpoResponse, SubscriptionResponse)>) -> Self {
        match outcome {
            Ok((ipo, subscriptions)) => LoadState::Ready { ipo, subscriptions },
            Err(e) => LoadState::failed(e.to_string()),
        }
    }

    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Error(_) => "error",
            LoadState::Ready { .. } => "ready",
        }
    }

    /// `true` once the cycle has failed.
    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Error(_))
    }
}
