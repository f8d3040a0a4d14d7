//! Error types shared by the dashboard crates.
//!
//! The `DashboardError` enum unifies transport, decoding, and configuration
//! failures so that every fallible operation can return a single error type.
//! Only the transport-level variants ever reach the user as an error view;
//! "no data" envelopes and odd serial numbers are not errors at all.
use std::io;

use thiserror::Error;

use crate::api::Resource;

/// Unified error type shared by the library and the dashboard binary.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The backend answered with a non-2xx status.
    #[error("Failed to fetch {resource}: {reason}")]
    Http {
        /// Which of the two resources was being fetched.
        resource: Resource,
        /// Numeric HTTP status.
        status: u16,
        /// Status text (`Internal Server Error`), or `HTTP <code>` when the
        /// status has no canonical reason.
        reason: String,
    },

    /// The request never produced a response (connect, TLS, body read).
    #[error("Failed to fetch {resource}: {message}")]
    Transport {
        /// Which of the two resources was being fetched.
        resource: Resource,
        /// Underlying client error text.
        message: String,
    },

    /// The response body was not the expected JSON envelope.
    #[error("Failed to fetch {resource}: malformed response ({source})")]
    Decode {
        /// Which of the two resources was being fetched.
        resource: Resource,
        /// JSON error reported by serde_json.
        #[source]
        source: serde_json::Error,
    },

    /// Invalid or missing configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A base URL or endpoint could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl DashboardError {
    /// Builds an `Http` error from a raw status code and its optional
    /// canonical reason phrase.
    pub fn http(resource: Resource, status: u16, reason: Option<&str>) -> Self {
        let reason = match reason {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => format!("HTTP {}", status),
        };
        DashboardError::Http {
            resource,
            status,
            reason,
        }
    }
}
