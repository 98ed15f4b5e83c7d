// SPDX-License-Identifier: MPL-2.0
//! Prediction transport port.
//!
//! A transport performs exactly one HTTP attempt. Retrying, backoff and
//! interpretation of the response belong to the submission controller.

use crate::domain::scan::SelectedImage;
use std::fmt;
use std::future::Future;

/// HTTP status returned by a rate-limited endpoint.
pub const STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// A response received from the endpoint, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.status == STATUS_TOO_MANY_REQUESTS
    }
}

/// Failure to obtain any response for one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be built (bad endpoint URL, invalid MIME type).
    Request(String),
    /// Network unreachable, connection refused, TLS failure...
    Unreachable(String),
    /// The configured per-attempt timeout elapsed.
    Timeout,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Request(msg) => write!(f, "Invalid request: {msg}"),
            TransportError::Unreachable(msg) => write!(f, "Endpoint unreachable: {msg}"),
            TransportError::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Sends a selected image to the prediction endpoint.
pub trait PredictionTransport: Send + Sync {
    /// Performs a single POST of `image`.
    fn send(
        &self,
        image: &SelectedImage,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_covers_2xx_only() {
        assert!(TransportResponse::new(200, "").is_ok());
        assert!(TransportResponse::new(204, "").is_ok());
        assert!(!TransportResponse::new(199, "").is_ok());
        assert!(!TransportResponse::new(301, "").is_ok());
        assert!(!TransportResponse::new(429, "").is_ok());
        assert!(!TransportResponse::new(500, "").is_ok());
    }

    #[test]
    fn rate_limited_is_429_only() {
        assert!(TransportResponse::new(429, "").is_rate_limited());
        assert!(!TransportResponse::new(503, "").is_rate_limited());
    }

    #[test]
    fn transport_error_display() {
        assert_eq!(TransportError::Timeout.to_string(), "Request timed out");
        assert!(TransportError::Unreachable("refused".into())
            .to_string()
            .contains("refused"));
    }
}
