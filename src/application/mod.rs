// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`submission`]: The bounded-retry submission controller
//! - [`cancellation`]: Cooperative cancellation for background work
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use paw_feel::application::submission::{RetryPolicy, SubmissionController};
//! use paw_feel::infrastructure::http::HttpPredictionClient;
//!
//! let client = HttpPredictionClient::new(&config.analysis.endpoint, None)?;
//! let controller = SubmissionController::new(client, config.analysis.retry_policy());
//! ```

pub mod cancellation;
pub mod port;
pub mod submission;
