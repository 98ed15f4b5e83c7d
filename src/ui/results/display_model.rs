// SPDX-License-Identifier: MPL-2.0
//! Display model for the result panel.
//!
//! [`ResultView::from_session`] is a pure function of the session: the view
//! only lays out what this module has already decided.

use super::emotion::{capitalize_words, emotion_glyph, title_case};
use crate::domain::scan::{PredictionResult, RequestState, ScanSession};

/// Number of probability rows shown in the breakdown.
pub const BREAKDOWN_LIMIT: usize = 5;

/// Color band of a probability bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTone {
    /// Above 75%
    Strong,
    /// Above 50%
    Medium,
    /// Above 25%
    Weak,
    Faint,
}

impl BarTone {
    #[must_use]
    pub fn for_probability(probability: f64) -> Self {
        if probability > 75.0 {
            BarTone::Strong
        } else if probability > 50.0 {
            BarTone::Medium
        } else if probability > 25.0 {
            BarTone::Weak
        } else {
            BarTone::Faint
        }
    }
}

/// One labelled bar of the analysis breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    /// Emotion label with every word capitalized.
    pub label: String,
    /// Probability with one decimal, without the percent sign.
    pub probability: String,
    /// Bar fill ratio in `[0, 1]`.
    pub fill: f32,
    pub tone: BarTone,
}

impl BreakdownRow {
    fn new(label: &str, probability: f64) -> Self {
        Self {
            label: capitalize_words(label),
            probability: one_decimal(probability),
            fill: bar_fill(probability),
            tone: BarTone::for_probability(probability),
        }
    }
}

/// What the result panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Placeholder,
    Loading,
    Error {
        message: String,
    },
    Prediction {
        headline: String,
        glyph: &'static str,
        /// Confidence as received, without the percent sign.
        confidence: String,
        breakdown: Vec<BreakdownRow>,
    },
}

impl ResultView {
    #[must_use]
    pub fn from_session<P>(session: &ScanSession<P>) -> Self {
        match session.request() {
            RequestState::Idle => ResultView::Placeholder,
            RequestState::Submitting(_) => ResultView::Loading,
            RequestState::Failed(message) => ResultView::Error {
                message: message.clone(),
            },
            RequestState::Succeeded(result) => Self::from_prediction(result),
        }
    }

    #[must_use]
    pub fn from_prediction(result: &PredictionResult) -> Self {
        ResultView::Prediction {
            headline: title_case(&result.predicted_emotion),
            glyph: emotion_glyph(&result.predicted_emotion),
            confidence: result.confidence.to_string(),
            breakdown: result
                .top_probabilities(BREAKDOWN_LIMIT)
                .into_iter()
                .map(|score| BreakdownRow::new(&score.label, score.probability))
                .collect(),
        }
    }
}

/// Formats with one decimal, rounding exact ties away from zero.
///
/// `{:.1}` rounds ties to even (`12.25` → `12.2`). The only doubles that sit
/// exactly halfway at one decimal are those ending in `.25` or `.75`, i.e.
/// where `4 * value` is an odd integer; those are rounded up in magnitude.
fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters % 2.0 != 0.0;
    if is_tie {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{value:.1}")
    }
}

#[allow(clippy::cast_possible_truncation)] // ratio is clamped to [0, 1]
fn bar_fill(probability: f64) -> f32 {
    if probability.is_nan() {
        return 0.0;
    }
    (probability / 100.0).clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scan::{EmotionScore, SelectedImage, SubmissionOutcome};

    fn six_emotions() -> PredictionResult {
        PredictionResult {
            predicted_emotion: "happy".into(),
            confidence: 62.5,
            full_probabilities: vec![
                EmotionScore::new("happy", 62.5),
                EmotionScore::new("sad", 3.1),
                EmotionScore::new("angry", 1.2),
                EmotionScore::new("relaxed", 20.0),
                EmotionScore::new("scared", 12.0),
                EmotionScore::new("playful", 1.2),
            ],
        }
    }

    fn session() -> ScanSession<()> {
        let mut session = ScanSession::new();
        let image = SelectedImage::new("dog.jpg", "image/jpeg", vec![1, 2, 3]);
        session.select_image(image, |_| ()).unwrap();
        session
    }

    #[test]
    fn idle_session_shows_placeholder() {
        assert_eq!(
            ResultView::from_session(&ScanSession::<()>::new()),
            ResultView::Placeholder
        );
        assert_eq!(ResultView::from_session(&session()), ResultView::Placeholder);
    }

    #[test]
    fn submitting_session_shows_loading() {
        let mut session = session();
        session.begin_submission().unwrap();
        assert_eq!(ResultView::from_session(&session), ResultView::Loading);
    }

    #[test]
    fn failed_session_shows_message() {
        let mut session = session();
        let submission = session.begin_submission().unwrap();
        session.complete_submission(submission.id, SubmissionOutcome::Unavailable);

        assert_eq!(
            ResultView::from_session(&session),
            ResultView::Error {
                message: "Could not connect to the analysis engine.".into()
            }
        );
    }

    #[test]
    fn prediction_shows_headline_glyph_and_top_five() {
        let mut session = session();
        let submission = session.begin_submission().unwrap();
        session.complete_submission(submission.id, SubmissionOutcome::Completed(six_emotions()));

        let ResultView::Prediction {
            headline,
            glyph,
            confidence,
            breakdown,
        } = ResultView::from_session(&session)
        else {
            panic!("expected a prediction view");
        };

        assert_eq!(headline, "Happy");
        assert_eq!(glyph, "🥰");
        assert_eq!(confidence, "62.5");

        let labels: Vec<&str> = breakdown.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, ["Happy", "Relaxed", "Scared", "Sad", "Angry"]);
        assert!(!labels.contains(&"Playful"));
        assert_eq!(breakdown[0].probability, "62.5");
        assert_eq!(breakdown[3].probability, "3.1");
    }

    #[test]
    fn whole_confidence_has_no_trailing_decimals() {
        let mut result = six_emotions();
        result.confidence = 87.0;
        let ResultView::Prediction { confidence, .. } = ResultView::from_prediction(&result) else {
            panic!("expected a prediction view");
        };
        assert_eq!(confidence, "87");
    }

    #[test]
    fn unknown_emotion_uses_default_glyph() {
        let mut result = six_emotions();
        result.predicted_emotion = "curious".into();
        let ResultView::Prediction { headline, glyph, .. } = ResultView::from_prediction(&result)
        else {
            panic!("expected a prediction view");
        };
        assert_eq!(headline, "Curious");
        assert_eq!(glyph, "🐶");
    }

    #[test]
    fn bar_tone_thresholds() {
        assert_eq!(BarTone::for_probability(75.1), BarTone::Strong);
        assert_eq!(BarTone::for_probability(75.0), BarTone::Medium);
        assert_eq!(BarTone::for_probability(50.5), BarTone::Medium);
        assert_eq!(BarTone::for_probability(50.0), BarTone::Weak);
        assert_eq!(BarTone::for_probability(25.0), BarTone::Faint);
        assert_eq!(BarTone::for_probability(0.0), BarTone::Faint);
    }

    #[test]
    fn bar_fill_is_clamped() {
        assert_eq!(bar_fill(50.0), 0.5);
        assert_eq!(bar_fill(140.0), 1.0);
        assert_eq!(bar_fill(-3.0), 0.0);
        assert_eq!(bar_fill(f64::NAN), 0.0);
    }

    #[test]
    fn one_decimal_rounds_ties_away_from_zero() {
        assert_eq!(one_decimal(0.25), "0.3");
        assert_eq!(one_decimal(12.25), "12.3");
        assert_eq!(one_decimal(71.25), "71.3");
        assert_eq!(one_decimal(0.75), "0.8");
        assert_eq!(one_decimal(-12.25), "-12.3");
    }

    #[test]
    fn one_decimal_keeps_plain_rounding_elsewhere() {
        assert_eq!(one_decimal(62.5), "62.5");
        assert_eq!(one_decimal(3.14), "3.1");
        assert_eq!(one_decimal(3.16), "3.2");
        assert_eq!(one_decimal(87.0), "87.0");
        // 0.15 is stored just below the halfway point.
        assert_eq!(one_decimal(0.15), "0.1");
        assert_eq!(one_decimal(f64::NAN), "NaN");
    }

    #[test]
    fn breakdown_rows_round_quarter_ties_up() {
        let result = PredictionResult {
            predicted_emotion: "happy".into(),
            confidence: 12.25,
            full_probabilities: vec![
                EmotionScore::new("happy", 12.25),
                EmotionScore::new("sad", 0.25),
            ],
        };
        let ResultView::Prediction { breakdown, .. } = ResultView::from_prediction(&result) else {
            panic!("expected a prediction view");
        };
        let shown: Vec<&str> = breakdown.iter().map(|row| row.probability.as_str()).collect();
        assert_eq!(shown, ["12.3", "0.3"]);
    }

    #[test]
    fn breakdown_labels_capitalize_each_word_but_headline_does_not() {
        let result = PredictionResult {
            predicted_emotion: "very relaxed".into(),
            confidence: 70.0,
            full_probabilities: vec![EmotionScore::new("very relaxed", 70.0)],
        };
        let ResultView::Prediction {
            headline, breakdown, ..
        } = ResultView::from_prediction(&result)
        else {
            panic!("expected a prediction view");
        };
        assert_eq!(headline, "Very relaxed");
        assert_eq!(breakdown[0].label, "Very Relaxed");
    }
}
