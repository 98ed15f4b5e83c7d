// SPDX-License-Identifier: MPL-2.0
//! `paw_feel` is a desktop dog emotion scanner built with the Iced GUI framework.
//!
//! The user picks or drops a photo, the app posts it to a classification
//! service (retrying on rate limits with exponential backoff) and renders the
//! predicted emotion, its confidence and a ranked probability breakdown.
//!
//! # Layers
//!
//! - [`domain`] - selection, prediction and session state machine (no I/O)
//! - [`application`] - transport port, cancellation and the submission controller
//! - [`infrastructure`] - reqwest transport and file reading
//! - [`ui`] and [`app`] - Iced widgets, styles and the application shell

#![doc(html_root_url = "https://docs.rs/paw_feel/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
