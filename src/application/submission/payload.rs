// SPDX-License-Identifier: MPL-2.0
//! JSON body of a successful prediction response.
//!
//! ```json
//! {
//!   "predicted_emotion": "happy",
//!   "confidence": 92.3,
//!   "full_probabilities": { "happy": 92.3, "sad": 40.1 }
//! }
//! ```

use crate::domain::scan::{EmotionScore, PredictionResult};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

#[derive(Debug, Deserialize)]
struct PredictionPayload {
    predicted_emotion: String,
    confidence: f64,
    full_probabilities: OrderedScores,
}

/// Label → probability map that keeps the order of the JSON object.
#[derive(Debug)]
struct OrderedScores(Vec<EmotionScore>);

impl<'de> Deserialize<'de> for OrderedScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoresVisitor;

        impl<'de> Visitor<'de> for ScoresVisitor {
            type Value = OrderedScores;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of emotion labels to probabilities")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut scores: Vec<EmotionScore> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, probability)) = map.next_entry::<String, f64>()? {
                    // A repeated label keeps its first position and takes the last value.
                    match scores.iter_mut().find(|score| score.label == label) {
                        Some(existing) => existing.probability = probability,
                        None => scores.push(EmotionScore { label, probability }),
                    }
                }
                Ok(OrderedScores(scores))
            }
        }

        deserializer.deserialize_map(ScoresVisitor)
    }
}

/// Parses a response body into a [`PredictionResult`].
///
/// # Errors
///
/// Returns the `serde_json` error when the body is not JSON of the
/// expected shape.
pub fn decode_prediction(body: &[u8]) -> Result<PredictionResult, serde_json::Error> {
    let payload: PredictionPayload = serde_json::from_slice(body)?;
    Ok(PredictionResult {
        predicted_emotion: payload.predicted_emotion,
        confidence: payload.confidence,
        full_probabilities: payload.full_probabilities.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_service_response_in_order() {
        let body = br#"{
            "predicted_emotion": "relaxed",
            "confidence": 71.25,
            "full_probabilities": {"sad": 3.5, "relaxed": 71.25, "happy": 25.25}
        }"#;

        let result = decode_prediction(body).unwrap();
        assert_eq!(result.predicted_emotion, "relaxed");
        assert_eq!(result.confidence, 71.25);
        let labels: Vec<&str> = result
            .full_probabilities
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, vec!["sad", "relaxed", "happy"]);
    }

    #[test]
    fn repeated_label_keeps_first_position_and_last_value() {
        let body = br#"{"predicted_emotion":"happy","confidence":90,"full_probabilities":{"happy":10,"sad":5,"happy":90}}"#;

        let result = decode_prediction(body).unwrap();
        let scores: Vec<(&str, f64)> = result
            .full_probabilities
            .iter()
            .map(|s| (s.label.as_str(), s.probability))
            .collect();
        assert_eq!(scores, [("happy", 90.0), ("sad", 5.0)]);
    }

    #[test]
    fn ignores_unknown_fields_and_accepts_integers() {
        let body = br#"{"predicted_emotion":"sad","confidence":80,"full_probabilities":{"sad":80},"model":"v2"}"#;
        let result = decode_prediction(body).unwrap();
        assert_eq!(result.confidence, 80.0);
        assert_eq!(result.full_probabilities[0].probability, 80.0);
    }

    #[test]
    fn rejects_malformed_bodies() {
        let bodies: [&[u8]; 4] = [
            b"",
            b"<html>Bad gateway</html>",
            br#"{"predicted_emotion":"sad"}"#,
            br#"{"predicted_emotion":"sad","confidence":"high","full_probabilities":{}}"#,
        ];
        for body in bodies {
            assert!(decode_prediction(body).is_err());
        }
    }

    #[test]
    fn rejects_non_numeric_probability() {
        let body = br#"{"predicted_emotion":"sad","confidence":1,"full_probabilities":{"sad":"x"}}"#;
        assert!(decode_prediction(body).is_err());
    }
}
