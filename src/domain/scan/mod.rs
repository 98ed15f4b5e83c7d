// SPDX-License-Identifier: MPL-2.0
//! Scanner domain: image selection, prediction results and the session
//! state machine that ties them together.
//!
//! The whole scanner lives in a single [`ScanSession`] value so the set of
//! valid transitions is enforced in one place:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──▶ Succeeded | Failed
//!  ▲                   │                 │
//!  └──── reset / new selection ◀─────────┘
//! ```
//!
//! Resubmitting from `Succeeded` or `Failed` goes straight back to
//! `Submitting` and clears the previous outcome.

mod image;
mod prediction;
mod session;

pub use image::{SelectedImage, SelectionError, IMAGE_MEDIA_TYPE_PREFIX};
pub use prediction::{EmotionScore, PredictionResult};
pub use session::{
    RequestState, ScanSession, Selection, Submission, SubmissionId, SubmissionOutcome,
    ANALYSIS_UNAVAILABLE_MESSAGE,
};
