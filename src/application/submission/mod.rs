// SPDX-License-Identifier: MPL-2.0
//! Submission controller: posts the selected image with bounded retries.
//!
//! One run performs at most [`RetryPolicy::max_attempts`] strictly
//! sequential attempts:
//!
//! - a transport failure is logged and swallowed, then the loop backs off
//!   and retries;
//! - a `429 Too Many Requests` response is kept and retried;
//! - any other response ends the loop immediately.
//!
//! Between attempts (never after the last one) the controller waits
//! `initial_delay * backoff_factor^n`. With the defaults that is 1 s, then
//! 2 s. Afterwards a missing or non-2xx response, or a body that does not
//! parse, fails the run. All of those are reported to the user with the
//! same message; the specific cause only reaches the log.

mod payload;

pub use payload::decode_prediction;

use crate::application::cancellation::CancellationToken;
use crate::application::port::{PredictionTransport, TransportResponse};
use crate::config::defaults;
use crate::domain::scan::{PredictionResult, SelectedImage, Submission, SubmissionId, SubmissionOutcome};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Retry parameters of the submission loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub backoff_factor: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: defaults::DEFAULT_MAX_ATTEMPTS,
            initial_delay: Duration::from_millis(defaults::DEFAULT_INITIAL_BACKOFF_MS),
            backoff_factor: defaults::DEFAULT_BACKOFF_FACTOR,
        }
    }
}

impl RetryPolicy {
    /// Returns the waits the loop would perform if every attempt retried.
    #[must_use]
    pub fn backoff_schedule(&self) -> Vec<Duration> {
        let mut delay = self.initial_delay;
        (1..self.max_attempts.max(1))
            .map(|_| {
                let current = delay;
                delay = delay.saturating_mul(self.backoff_factor);
                current
            })
            .collect()
    }
}

/// Why a submission did not produce a prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Every attempt failed at the transport level.
    NoResponse,
    /// The last response kept had a non-2xx status (429 included).
    Status(u16),
    /// A 2xx response whose body is not a prediction.
    MalformedBody(String),
    /// The run was cancelled before it finished.
    Cancelled,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::NoResponse => write!(f, "No response from the analysis endpoint"),
            AnalysisError::Status(status) => write!(f, "Analysis endpoint returned HTTP {status}"),
            AnalysisError::MalformedBody(msg) => write!(f, "Malformed prediction body: {msg}"),
            AnalysisError::Cancelled => write!(f, "Analysis cancelled"),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<Result<PredictionResult, AnalysisError>> for SubmissionOutcome {
    fn from(result: Result<PredictionResult, AnalysisError>) -> Self {
        match result {
            Ok(prediction) => SubmissionOutcome::Completed(prediction),
            Err(AnalysisError::Cancelled) => SubmissionOutcome::Cancelled,
            Err(_) => SubmissionOutcome::Unavailable,
        }
    }
}

/// Waits between attempts. Abstracted so tests can observe the backoff.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Runs submissions against one transport.
#[derive(Debug)]
pub struct SubmissionController<T, S = TokioSleeper> {
    transport: Arc<T>,
    sleeper: Arc<S>,
    policy: RetryPolicy,
}

impl<T, S> Clone for SubmissionController<T, S> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            sleeper: Arc::clone(&self.sleeper),
            policy: self.policy,
        }
    }
}

impl<T: PredictionTransport> SubmissionController<T, TokioSleeper> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self::with_sleeper(transport, TokioSleeper, policy)
    }
}

impl<T: PredictionTransport, S: Sleeper> SubmissionController<T, S> {
    pub fn with_sleeper(transport: T, sleeper: S, policy: RetryPolicy) -> Self {
        Self {
            transport: Arc::new(transport),
            sleeper: Arc::new(sleeper),
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs the retry loop for `image`.
    ///
    /// Cancellation is checked before each attempt and raced against both
    /// the request and the backoff wait.
    ///
    /// # Errors
    ///
    /// See [`AnalysisError`].
    pub async fn run(
        &self,
        image: &SelectedImage,
        cancel: &CancellationToken,
    ) -> Result<PredictionResult, AnalysisError> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut delay = self.policy.initial_delay;
        let mut response: Option<TransportResponse> = None;

        for attempt in 1..=max_attempts {
            if cancel.is_cancelled() {
                return Err(AnalysisError::Cancelled);
            }

            log::debug!(
                "Submitting {} ({} bytes), attempt {attempt}/{max_attempts}",
                image.file_name(),
                image.len()
            );

            let sent = tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(AnalysisError::Cancelled),
                sent = self.transport.send(image) => sent,
            };

            match sent {
                Ok(received) if received.is_rate_limited() => {
                    log::warn!("Analysis endpoint rate limited attempt {attempt}");
                    response = Some(received);
                }
                Ok(received) => {
                    response = Some(received);
                    break;
                }
                Err(err) => {
                    // The previous response, if any, is kept.
                    log::warn!("Attempt {attempt} failed: {err}");
                }
            }

            if attempt < max_attempts {
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => return Err(AnalysisError::Cancelled),
                    () = self.sleeper.sleep(delay) => {}
                }
                delay = delay.saturating_mul(self.policy.backoff_factor);
            }
        }

        let result = match response {
            None => Err(AnalysisError::NoResponse),
            Some(received) if !received.is_ok() => Err(AnalysisError::Status(received.status)),
            Some(received) => decode_prediction(&received.body)
                .map_err(|e| AnalysisError::MalformedBody(e.to_string())),
        };

        match &result {
            Ok(prediction) => log::info!(
                "Predicted {} ({}% confidence)",
                prediction.predicted_emotion,
                prediction.confidence
            ),
            Err(err) => log::warn!("Analysis failed: {err}"),
        }
        result
    }
}

impl<T, S> SubmissionController<T, S>
where
    T: PredictionTransport + 'static,
    S: Sleeper + 'static,
{
    /// Runs `submission` in an owned future suitable for `Task::perform`.
    pub fn submit(
        &self,
        submission: Submission,
        cancel: CancellationToken,
    ) -> impl Future<Output = (SubmissionId, SubmissionOutcome)> + Send + 'static {
        let controller = self.clone();
        async move {
            let result = controller.run(&submission.image, &cancel).await;
            (submission.id, SubmissionOutcome::from(result))
        }
    }
}
