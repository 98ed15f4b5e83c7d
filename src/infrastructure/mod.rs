// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - adapters implementing application ports.
//!
//! - [`http`]: reqwest-based [`PredictionTransport`](crate::application::port::PredictionTransport)
//! - [`image_file`]: reads a picked or dropped file into a selection

pub mod http;
pub mod image_file;
