// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Views follow the Elm-style "state down, messages up" pattern.
//!
//! # Panels
//!
//! - [`scanner`] - Branding, image selection and the analyze button
//! - [`results`] - Placeholder, loading, error or prediction breakdown
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod notifications;
pub mod results;
pub mod scanner;
pub mod styles;
pub mod theming;
pub mod widgets;
