//! Fetching IPO and subscription data from the backend.
//!
//! A load cycle issues both GET requests at once and joins them with
//! `tokio::try_join!`: the cycle settles when both have answered, or as soon
//! as either fails, in which case the other request is dropped mid-flight.
//! A `success: false` envelope is a valid answer and never fails the join.
use ipo_common::{DashboardError, IpoResponse, Resource, Result, SubscriptionResponse};
use log::{debug, error, info};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::state::LoadState;

/// HTTP client for the two dashboard resources.
pub struct IpoFetcher {
    client: Client,
    base_url: Url,
}

impl IpoFetcher {
    /// Fetcher with a default client; `base_url` is the root for all requests.
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Fetcher using a caller-supplied client.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// `GET {base}/ipos/{symbol}`.
    pub async fn fetch_ipo(&self, symbol: &str) -> Result<IpoResponse> {
        self.get_envelope(Resource::IpoDetails, symbol).await
    }

    /// `GET {base}/ipos/{symbol}/subscriptions`.
    pub async fn fetch_subscriptions(&self, symbol: &str) -> Result<SubscriptionResponse> {
        self.get_envelope(Resource::Subscriptions, symbol).await
    }

    /// Runs one load cycle and settles it into `Error` or `Ready`.
    pub async fn load(&self, symbol: &str) -> LoadState {
        let outcome = tokio::try_join!(self.fetch_ipo(symbol), self.fetch_subscriptions(symbol));
        if let Err(e) = &outcome {
            error!("Load cycle for {} failed: {}", symbol, e);
        }
        let state = LoadState::from_outcome(outcome);
        info!("Load cycle for {} settled: {}", symbol, state.label());
        state
    }

    async fn get_envelope<T: DeserializeOwned>(&self, resource: Resource, symbol: &str) -> Result<T> {
        let url = resource.endpoint(&self.base_url, symbol)?;
        debug!("GET {}", url);

        let transport = |e: reqwest::Error| DashboardError::Transport {
            resource,
            message: e.to_string(),
        };

        let response = self.client.get(url.clone()).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            error!("GET {} answered {}", url, status);
            return Err(DashboardError::http(
                resource,
                status.as_u16(),
                status.canonical_reason(),
            ));
        }

        let body = response.bytes().await.map_err(transport)?;
        debug!("GET {} returned {} bytes", url, body.len());
        serde_json::from_slice(&body).map_err(|source| DashboardError::Decode { resource, source })
    }
}

#[cfg(test)]
#[path = "tests/fetcher_tests.rs"]
mod tests;
