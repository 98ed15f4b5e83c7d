// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! - [`transport`]: Sending an image to the prediction endpoint
//!
//! # Design Notes
//!
//! - Ports use domain types only (no reqwest or Iced types)
//! - Async methods return `impl Future + Send` so callers can move the work
//!   onto Iced's tokio executor

pub mod transport;

pub use transport::{PredictionTransport, TransportError, TransportResponse};
