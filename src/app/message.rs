// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::scan::{SelectedImage, SelectionError, SubmissionId, SubmissionOutcome};
use crate::ui::notifications;
use crate::ui::scanner;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Scanner(scanner::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open file dialog.
    FileChosen(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A picked or dropped file has been read and validated.
    FileLoaded(Result<SelectedImage, SelectionError>),
    /// The submission controller finished a run.
    SubmissionFinished(SubmissionId, SubmissionOutcome),
    /// Periodic tick for the spinner and notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image to select on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PAW_FEEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional prediction endpoint, overriding `[analysis] endpoint`.
    pub endpoint: Option<String>,
}
