// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Handlers receive an [`UpdateContext`] holding mutable references to the
//! parts of `App` they may touch, and return the follow-up [`Task`].

use super::{Controller, Message};
use crate::application::cancellation::CancellationToken;
use crate::domain::scan::{
    ScanSession, SelectedImage, SelectionError, SubmissionId, SubmissionOutcome,
};
use crate::i18n::I18n;
use crate::infrastructure::image_file;
use crate::ui::notifications;
use crate::ui::scanner;
use crate::ui::widgets::animated_spinner;
use iced::widget::image::Handle;
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a mut ScanSession<Handle>,
    pub controller: Option<&'a Controller>,
    pub in_flight: &'a mut Option<CancellationToken>,
    pub spinner_rotation: &'a mut f32,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Cancels the tracked submission, if any. Its completion will be ignored.
    fn abandon_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            log::debug!("Abandoning in-flight submission");
            token.cancel();
        }
    }
}

pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Scanner(scanner_message) => handle_scanner_message(ctx, scanner_message),
        Message::Notification(notification_message) => {
            ctx.notifications.handle_message(&notification_message);
            Task::none()
        }
        Message::FileChosen(path) => match path {
            Some(path) => load_file(path),
            // User cancelled the dialog
            None => Task::none(),
        },
        Message::FileDropped(path) => handle_file_dropped(ctx, path),
        Message::FileLoaded(result) => handle_file_loaded(ctx, result),
        Message::SubmissionFinished(id, outcome) => handle_submission_finished(ctx, id, outcome),
        Message::Tick(now) => {
            if ctx.session.is_submitting() {
                *ctx.spinner_rotation = animated_spinner::advance(*ctx.spinner_rotation);
            }
            ctx.notifications.tick(now);
            Task::none()
        }
    }
}

fn handle_scanner_message(
    ctx: &mut UpdateContext<'_>,
    message: scanner::Message,
) -> Task<Message> {
    match message {
        scanner::Message::OpenFileDialog => {
            if ctx.session.is_submitting() {
                return Task::none();
            }
            open_file_dialog(ctx.i18n)
        }
        scanner::Message::RemoveImage => {
            ctx.abandon_in_flight();
            ctx.session.reset();
            Task::none()
        }
        scanner::Message::Analyze => submit(ctx),
    }
}

/// Opens the native file dialog filtered to readable image formats.
pub fn open_file_dialog(i18n: &I18n) -> Task<Message> {
    let extensions = image_file::supported_extensions();
    let title = i18n.tr("file-dialog-title");
    let filter_name = i18n.tr("file-dialog-filter-images");
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, &extensions)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FileChosen,
    )
}

/// Reads `path` in the background and reports it as [`Message::FileLoaded`].
pub fn load_file(path: PathBuf) -> Task<Message> {
    Task::perform(image_file::load_selected_image(path), Message::FileLoaded)
}

fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    // Selection changes are disabled while analyzing, drops included.
    if ctx.session.is_submitting() {
        log::debug!("Ignoring drop of {} while analyzing", path.display());
        return Task::none();
    }
    load_file(path)
}

fn handle_file_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<SelectedImage, SelectionError>,
) -> Task<Message> {
    if let Err(err) = &result {
        log::info!("Rejected selection: {err}");
    } else if ctx.session.is_submitting() {
        // A file read that started before the submission landed afterwards.
        ctx.abandon_in_flight();
    }

    // The outcome is also kept in the session as the inline selection error.
    let _ = ctx
        .session
        .select_image(result, |image| Handle::from_bytes(image.bytes().to_vec()));
    Task::none()
}

fn submit(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(controller) = ctx.controller else {
        log::warn!("Analysis requested without a usable endpoint");
        ctx.notifications
            .push(notifications::Notification::warning("notification-analysis-disabled"));
        return Task::none();
    };
    let Some(submission) = ctx.session.begin_submission() else {
        return Task::none();
    };

    log::info!(
        "Submitting {} ({} bytes)",
        submission.image.file_name(),
        submission.image.len()
    );

    let token = CancellationToken::new();
    *ctx.in_flight = Some(token.clone());
    *ctx.spinner_rotation = 0.0;

    Task::perform(controller.submit(submission, token), |(id, outcome)| {
        Message::SubmissionFinished(id, outcome)
    })
}

fn handle_submission_finished(
    ctx: &mut UpdateContext<'_>,
    id: SubmissionId,
    outcome: SubmissionOutcome,
) -> Task<Message> {
    if ctx.session.complete_submission(id, outcome) {
        *ctx.in_flight = None;
    } else {
        log::debug!("Discarding stale result of submission {}", id.value());
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scan::{EmotionScore, PredictionResult, RequestState};

    struct Harness {
        i18n: I18n,
        session: ScanSession<Handle>,
        in_flight: Option<CancellationToken>,
        spinner_rotation: f32,
        notifications: notifications::Manager,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                i18n: I18n::default(),
                session: ScanSession::new(),
                in_flight: None,
                spinner_rotation: 0.0,
                notifications: notifications::Manager::new(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &self.i18n,
                session: &mut self.session,
                controller: None,
                in_flight: &mut self.in_flight,
                spinner_rotation: &mut self.spinner_rotation,
                notifications: &mut self.notifications,
            }
        }

        fn send(&mut self, message: Message) {
            let _ = handle_message(&mut self.ctx(), message);
        }
    }

    fn image(name: &str) -> SelectedImage {
        SelectedImage::new(name, "image/jpeg", vec![0xFF, 0xD8, 0xFF]).unwrap()
    }

    fn prediction() -> PredictionResult {
        PredictionResult {
            predicted_emotion: "relaxed".into(),
            confidence: 80.0,
            full_probabilities: vec![EmotionScore::new("relaxed", 80.0)],
        }
    }

    /// Puts the harness in `Submitting` with a tracked token, as `submit` would.
    fn start_submission(harness: &mut Harness) -> (SubmissionId, CancellationToken) {
        let submission = harness.session.begin_submission().unwrap();
        let token = CancellationToken::new();
        harness.in_flight = Some(token.clone());
        (submission.id, token)
    }

    #[test]
    fn loaded_file_becomes_selection() {
        let mut harness = Harness::new();
        harness.send(Message::FileLoaded(Ok(image("rex.jpg"))));

        assert_eq!(
            harness.session.selected_image().map(SelectedImage::file_name),
            Some("rex.jpg")
        );
        assert!(harness.session.preview().is_some());
    }

    #[test]
    fn rejected_file_sets_inline_error_only() {
        let mut harness = Harness::new();
        harness.send(Message::FileLoaded(Ok(image("rex.jpg"))));
        harness.send(Message::FileLoaded(Err(SelectionError::UnsupportedMediaType(
            "text/plain".into(),
        ))));

        assert!(harness.session.selected_image().is_some());
        assert!(harness.session.selection_error().is_some());
        assert_eq!(harness.session.request(), &RequestState::Idle);
    }

    #[test]
    fn analyze_without_endpoint_notifies() {
        let mut harness = Harness::new();
        harness.send(Message::FileLoaded(Ok(image("rex.jpg"))));
        harness.send(Message::Scanner(scanner::Message::Analyze));

        assert!(!harness.session.is_submitting());
        assert_eq!(harness.notifications.visible_count(), 1);
    }

    #[test]
    fn remove_image_cancels_in_flight_submission() {
        let mut harness = Harness::new();
        harness.send(Message::FileLoaded(Ok(image("rex.jpg"))));
        let (id, token) = start_submission(&mut harness);

        harness.send(Message::Scanner(scanner::Message::RemoveImage));

        assert!(token.is_cancelled());
        assert!(harness.in_flight.is_none());
        assert!(harness.session.selected_image().is_none());

        // The abandoned run reports back later and is ignored.
        harness.send(Message::SubmissionFinished(
            id,
            SubmissionOutcome::Completed(prediction()),
        ));
        assert_eq!(harness.session.request(), &RequestState::Idle);
    }

    #[test]
    fn late_file_load_replaces_selection_and_cancels() {
        let mut harness = Harness::new();
        harness.send(Message::FileLoaded(Ok(image("first.jpg"))));
        let (id, token) = start_submission(&mut harness);

        harness.send(Message::FileLoaded(Ok(image("second.jpg"))));

        assert!(token.is_cancelled());
        assert_eq!(
            harness.session.selected_image().map(SelectedImage::file_name),
            Some("second.jpg")
        );

        harness.send(Message::SubmissionFinished(id, SubmissionOutcome::Unavailable));
        assert_eq!(harness.session.request(), &RequestState::Idle);
    }

    #[test]
    fn completion_clears_token_and_stores_result() {
        let mut harness = Harness::new();
        harness.send(Message::FileLoaded(Ok(image("rex.jpg"))));
        let (id, token) = start_submission(&mut harness);

        harness.send(Message::SubmissionFinished(
            id,
            SubmissionOutcome::Completed(prediction()),
        ));

        assert!(!token.is_cancelled());
        assert!(harness.in_flight.is_none());
        assert_eq!(harness.session.prediction(), Some(&prediction()));
    }

    #[test]
    fn tick_turns_spinner_only_while_submitting() {
        let mut harness = Harness::new();
        harness.send(Message::Tick(Instant::now()));
        assert_eq!(harness.spinner_rotation, 0.0);

        harness.send(Message::FileLoaded(Ok(image("rex.jpg"))));
        start_submission(&mut harness);
        harness.send(Message::Tick(Instant::now()));
        assert!(harness.spinner_rotation > 0.0);
    }

    #[test]
    fn open_dialog_is_ignored_while_submitting() {
        let mut harness = Harness::new();
        harness.send(Message::FileLoaded(Ok(image("rex.jpg"))));
        start_submission(&mut harness);

        // Returns no task; the session is untouched either way.
        harness.send(Message::Scanner(scanner::Message::OpenFileDialog));
        assert!(harness.session.is_submitting());
    }
}
