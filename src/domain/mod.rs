// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core scanner logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`scan`]: Scanner session types ([`ScanSession`](scan::ScanSession),
//!   [`SelectedImage`](scan::SelectedImage), [`PredictionResult`](scan::PredictionResult))

pub mod scan;
