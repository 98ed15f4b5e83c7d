// SPDX-License-Identifier: MPL-2.0
//! Prediction result returned by the classification service.

/// Probability (0-100) assigned to one emotion label.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionScore {
    pub label: String,
    pub probability: f64,
}

impl EmotionScore {
    pub fn new(label: impl Into<String>, probability: f64) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }
}

/// Structured output of the classifier for one submitted image.
///
/// `full_probabilities` keeps the order in which the service listed the
/// labels; ranking relies on that order to break ties.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub predicted_emotion: String,
    /// Confidence of `predicted_emotion`, as a percentage.
    pub confidence: f64,
    pub full_probabilities: Vec<EmotionScore>,
}

impl PredictionResult {
    /// Returns up to `limit` scores sorted by descending probability.
    ///
    /// The sort is stable, so equal probabilities keep their original order.
    #[must_use]
    pub fn top_probabilities(&self, limit: usize) -> Vec<&EmotionScore> {
        let mut ranked: Vec<&EmotionScore> = self.full_probabilities.iter().collect();
        ranked.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        ranked.truncate(limit);
        ranked
    }
}
