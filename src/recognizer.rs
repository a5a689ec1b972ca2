//! Frame-level recognition: landmark model in, `(gesture, confidence)`
//! out. This is the glue the capture/presentation loop drives once per
//! polling tick; everything in it is stateless per frame.

use image::DynamicImage;
use tracing::debug;

use crate::error::Result;
use crate::gesture::estimator::{EstimationResult, GestureEstimator, GestureScore};
use crate::hand_landmarks::HandLandmarksModel;

/// Recognition thresholds. The estimator cutoff and the acceptance
/// threshold are independent parameters.
#[derive(Debug, Clone, Copy)]
pub struct RecognizerConfig {
    /// Minimum raw score a template must reach to appear in the ranked
    /// result at all.
    pub min_score: f32,
    /// Fraction of the winning template's own maximum score its
    /// confidence must reach before the winner is accepted.
    pub accept_ratio: f32,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            min_score: 0.0,
            accept_ratio: 0.75,
        }
    }
}

/// Outcome of one frame: the accepted gesture (if any cleared the
/// acceptance threshold) plus the raw ranked scores for advanced callers.
#[derive(Debug, Clone, Default)]
pub struct Recognition {
    /// Best match that cleared the acceptance threshold, if any.
    pub gesture: Option<GestureScore>,
    /// Every template that matched at all, in registry order.
    pub scores: EstimationResult,
}

/// Drives a landmark model and a gesture estimator over single frames.
pub struct HandSignRecognizer {
    model: Box<dyn HandLandmarksModel>,
    estimator: GestureEstimator,
    config: RecognizerConfig,
}

impl HandSignRecognizer {
    pub fn new(model: Box<dyn HandLandmarksModel>, estimator: GestureEstimator) -> Self {
        Self::with_config(model, estimator, RecognizerConfig::default())
    }

    pub fn with_config(
        model: Box<dyn HandLandmarksModel>,
        estimator: GestureEstimator,
        config: RecognizerConfig,
    ) -> Self {
        Self {
            model,
            estimator,
            config,
        }
    }

    pub fn estimator(&self) -> &GestureEstimator {
        &self.estimator
    }

    /// Process one frame: run the landmark model, score the first
    /// detected hand, and accept the best match only when its confidence
    /// reaches `accept_ratio` of its own template's maximum.
    ///
    /// No hand in the frame is a normal outcome and yields an empty
    /// recognition.
    pub fn process_frame(&self, image: &DynamicImage) -> Result<Recognition> {
        let hands = self.model.run(image)?;

        let Some(hand) = hands.first() else {
            return Ok(Recognition::default());
        };

        let scores = self
            .estimator
            .estimate(hand.points(), self.config.min_score)?;

        let gesture = scores.best().and_then(|best| {
            let max = self
                .estimator
                .registry()
                .get(&best.name)
                .map(|t| t.max_score())?;
            if best.confidence >= self.config.accept_ratio * max {
                debug!(
                    gesture = best.name.as_str(),
                    confidence = best.confidence,
                    "accepted gesture"
                );
                Some(best.clone())
            } else {
                debug!(
                    gesture = best.name.as_str(),
                    confidence = best.confidence,
                    threshold = self.config.accept_ratio * max,
                    "best match below acceptance threshold"
                );
                None
            }
        });

        Ok(Recognition { gesture, scores })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{Finger, HandLandmarks, LANDMARK_COUNT};
    use nalgebra::Point3;

    // canned model: returns the same hands for every frame
    struct FixedModel(Vec<HandLandmarks>);

    impl HandLandmarksModel for FixedModel {
        fn run(&self, _image: &DynamicImage) -> Result<Vec<HandLandmarks>> {
            Ok(self.0.clone())
        }
    }

    fn straight_up_hand() -> HandLandmarks {
        let mut points = vec![Point3::new(0.5, 1.0, 0.0); LANDMARK_COUNT];
        for (f, finger) in Finger::ALL.into_iter().enumerate() {
            for (j, idx) in finger.point_indices().into_iter().enumerate() {
                points[idx] = Point3::new(0.3 + f as f32 * 0.1, 0.8 - j as f32 * 0.1, 0.0);
            }
        }
        HandLandmarks::from_points(points, 0.95).unwrap()
    }

    #[test]
    fn test_no_hand_yields_no_gesture() {
        let recognizer = HandSignRecognizer::new(
            Box::new(FixedModel(Vec::new())),
            GestureEstimator::with_builtin(),
        );
        let frame = DynamicImage::new_rgb8(4, 4);
        let recognition = recognizer.process_frame(&frame).unwrap();
        assert!(recognition.gesture.is_none());
        assert!(recognition.scores.is_empty());
    }

    #[test]
    fn test_open_palm_frame_is_accepted() {
        let recognizer = HandSignRecognizer::new(
            Box::new(FixedModel(vec![straight_up_hand()])),
            GestureEstimator::with_builtin(),
        );
        let frame = DynamicImage::new_rgb8(4, 4);
        let recognition = recognizer.process_frame(&frame).unwrap();
        let gesture = recognition.gesture.unwrap();
        assert_eq!(gesture.name, "open_palm");
        assert!((gesture.confidence - 10.0).abs() < 1e-3);
        assert!(!recognition.scores.is_empty());
    }

    #[test]
    fn test_strict_acceptance_rejects_but_keeps_scores() {
        let config = RecognizerConfig {
            min_score: 0.0,
            accept_ratio: 1.1, // stricter than any real match can reach
        };
        let recognizer = HandSignRecognizer::with_config(
            Box::new(FixedModel(vec![straight_up_hand()])),
            GestureEstimator::with_builtin(),
            config,
        );
        let frame = DynamicImage::new_rgb8(4, 4);
        let recognition = recognizer.process_frame(&frame).unwrap();
        assert!(recognition.gesture.is_none());
        assert!(!recognition.scores.is_empty());
    }
}
