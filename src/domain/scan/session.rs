// SPDX-License-Identifier: MPL-2.0
//! Scanner session state machine.
//!
//! [`ScanSession`] owns the current selection (image + preview), the inline
//! selection error and the [`RequestState`]. It is generic over the preview
//! type so the domain stays free of UI handles; the application plugs in an
//! Iced image handle, tests plug in whatever they need to observe.

use super::image::{SelectedImage, SelectionError};
use super::prediction::PredictionResult;

/// User-facing message for every failed analysis.
pub const ANALYSIS_UNAVAILABLE_MESSAGE: &str = "Could not connect to the analysis engine.";

/// Identifies one submission so late completions can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(u64);

impl SubmissionId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Phase of the submission workflow. Exactly one holds at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Submitting(SubmissionId),
    Succeeded(PredictionResult),
    Failed(String),
}

/// How a submission ended, as reported by the submission controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Completed(PredictionResult),
    /// Any failure: no response, non-ok status, unparsable body.
    Unavailable,
    Cancelled,
}

/// Work handed to the submission controller by [`ScanSession::begin_submission`].
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    pub image: SelectedImage,
}

/// The selected image together with its preview.
///
/// Both share one lifetime: replacing or clearing the selection drops the
/// preview along with the image.
#[derive(Debug, Clone)]
pub struct Selection<P> {
    image: SelectedImage,
    preview: P,
}

impl<P> Selection<P> {
    #[must_use]
    pub fn image(&self) -> &SelectedImage {
        &self.image
    }

    #[must_use]
    pub fn preview(&self) -> &P {
        &self.preview
    }
}

/// The complete scanner state.
#[derive(Debug, Clone)]
pub struct ScanSession<P> {
    selection: Option<Selection<P>>,
    selection_error: Option<SelectionError>,
    request: RequestState,
    next_submission: u64,
}

impl<P> Default for ScanSession<P> {
    fn default() -> Self {
        Self {
            selection: None,
            selection_error: None,
            request: RequestState::Idle,
            next_submission: 0,
        }
    }
}

impl<P> ScanSession<P> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `candidate` the current selection.
    ///
    /// On success the preview is derived with `derive_preview`, the previous
    /// selection (and its preview) is dropped, and any prior result or error
    /// is cleared. A selection made while a submission is in flight abandons
    /// that submission; its completion will be ignored.
    ///
    /// On failure only the inline selection error changes; the current
    /// selection, result and request state are untouched.
    ///
    /// # Errors
    ///
    /// Returns the [`SelectionError`] that was recorded.
    pub fn select_image(
        &mut self,
        candidate: Result<SelectedImage, SelectionError>,
        derive_preview: impl FnOnce(&SelectedImage) -> P,
    ) -> Result<(), SelectionError> {
        let image = match candidate {
            Ok(image) => image,
            Err(err) => {
                self.selection_error = Some(err.clone());
                return Err(err);
            }
        };

        let preview = derive_preview(&image);
        self.selection = Some(Selection { image, preview });
        self.selection_error = None;
        self.request = RequestState::Idle;
        Ok(())
    }

    /// Clears selection, preview, result and errors. Idempotent.
    pub fn reset(&mut self) {
        self.selection = None;
        self.selection_error = None;
        self.request = RequestState::Idle;
    }

    /// Starts a submission of the current image.
    ///
    /// Returns `None` (and changes nothing) when no image is selected or a
    /// submission is already in flight.
    pub fn begin_submission(&mut self) -> Option<Submission> {
        if self.is_submitting() {
            return None;
        }
        let image = self.selection.as_ref()?.image.clone();

        self.next_submission += 1;
        let id = SubmissionId(self.next_submission);
        self.request = RequestState::Submitting(id);
        self.selection_error = None;

        Some(Submission { id, image })
    }

    /// Applies the outcome of submission `id`.
    ///
    /// Returns `false` when `id` is not the submission currently in flight
    /// (it was reset, replaced or already completed); the state is then left
    /// unchanged.
    pub fn complete_submission(&mut self, id: SubmissionId, outcome: SubmissionOutcome) -> bool {
        if self.request != RequestState::Submitting(id) {
            return false;
        }

        self.request = match outcome {
            SubmissionOutcome::Completed(result) => RequestState::Succeeded(result),
            SubmissionOutcome::Unavailable => {
                RequestState::Failed(ANALYSIS_UNAVAILABLE_MESSAGE.to_string())
            }
            SubmissionOutcome::Cancelled => RequestState::Idle,
        };
        true
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection<P>> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn selected_image(&self) -> Option<&SelectedImage> {
        self.selection.as_ref().map(Selection::image)
    }

    #[must_use]
    pub fn preview(&self) -> Option<&P> {
        self.selection.as_ref().map(Selection::preview)
    }

    #[must_use]
    pub fn selection_error(&self) -> Option<&SelectionError> {
        self.selection_error.as_ref()
    }

    #[must_use]
    pub fn request(&self) -> &RequestState {
        &self.request
    }

    /// Returns the prediction of the last successful submission, if any.
    #[must_use]
    pub fn prediction(&self) -> Option<&PredictionResult> {
        match &self.request {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<SubmissionId> {
        match self.request {
            RequestState::Submitting(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.request, RequestState::Submitting(_))
    }

    /// Whether the submit action should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.selection.is_some() && !self.is_submitting()
    }
}
