//! Scoring of all registered templates against one landmark set.
//!
//! Stateless: every call is a pure function of the landmarks and the
//! registry frozen at construction. Safe to share across threads.

use nalgebra::Point3;
use tracing::{debug, trace};

use crate::error::Result;
use crate::gesture::pose::HandPose;
use crate::gesture::registry::GestureRegistry;

/// One template's score against one landmark set. The confidence scale is
/// the template's own: its maximum equals the template's `max_score()`.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureScore {
    pub name: String,
    pub confidence: f32,
}

impl GestureScore {
    /// Human-readable form of the gesture name for presentation layers:
    /// underscores become spaces, upper-cased ("thumbs_up" -> "THUMBS UP").
    pub fn display_name(&self) -> String {
        self.name.replace('_', " ").to_uppercase()
    }
}

/// Scores for every template that matched at all, in registry order.
#[derive(Debug, Clone, Default)]
pub struct EstimationResult {
    gestures: Vec<GestureScore>,
}

impl EstimationResult {
    /// Matching templates in registry order.
    pub fn gestures(&self) -> &[GestureScore] {
        &self.gestures
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }

    /// The highest-confidence match, if any template matched.
    pub fn best(&self) -> Option<&GestureScore> {
        self.gestures
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }

    /// All matches, sorted descending by confidence.
    pub fn into_sorted(mut self) -> Vec<GestureScore> {
        self.gestures
            .sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        self.gestures
    }
}

/// Scores landmark sets against a frozen template registry.
#[derive(Debug, Clone)]
pub struct GestureEstimator {
    registry: GestureRegistry,
}

impl GestureEstimator {
    pub fn new(registry: GestureRegistry) -> Self {
        Self { registry }
    }

    /// An estimator over the eight canonical gestures.
    pub fn with_builtin() -> Self {
        Self::new(GestureRegistry::builtin())
    }

    pub fn registry(&self) -> &GestureRegistry {
        &self.registry
    }

    /// Score every registered template against one landmark set.
    ///
    /// Each finger's curl and direction are classified once and shared
    /// across all templates. The result holds every template scoring
    /// above zero and at least `min_score` (pass 0.0 for no cutoff), in
    /// registry order; callers re-sort or take [`EstimationResult::best`].
    ///
    /// An empty slice (no hand detected) yields an empty result. Any
    /// other count than 21 is a caller contract violation and fails fast.
    pub fn estimate(
        &self,
        landmarks: &[Point3<f32>],
        min_score: f32,
    ) -> Result<EstimationResult> {
        if landmarks.is_empty() {
            return Ok(EstimationResult::default());
        }

        let pose = HandPose::from_points(landmarks)?;

        let mut gestures = Vec::new();
        for template in self.registry.templates() {
            let confidence = template.score(&pose);
            trace!(
                template = template.name(),
                confidence,
                max = template.max_score(),
                "scored template"
            );
            if confidence > 0.0 && confidence >= min_score {
                gestures.push(GestureScore {
                    name: template.name().to_owned(),
                    confidence,
                });
            }
        }

        debug!(
            matched = gestures.len(),
            of = self.registry.len(),
            "estimated gestures"
        );

        Ok(EstimationResult { gestures })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::gesture::curl::FingerCurl;
    use crate::gesture::template::GestureTemplate;
    use crate::hand::{Finger, LANDMARK_COUNT};

    fn straight_up_hand() -> Vec<Point3<f32>> {
        let mut points = vec![Point3::new(0.5, 1.0, 0.0); LANDMARK_COUNT];
        for (f, finger) in Finger::ALL.into_iter().enumerate() {
            for (j, idx) in finger.point_indices().into_iter().enumerate() {
                points[idx] = Point3::new(0.3 + f as f32 * 0.1, 0.8 - j as f32 * 0.1, 0.0);
            }
        }
        points
    }

    #[test]
    fn test_empty_landmarks_yield_empty_result() {
        let estimator = GestureEstimator::with_builtin();
        let result = estimator.estimate(&[], 0.0).unwrap();
        assert!(result.is_empty());
        assert!(result.best().is_none());
    }

    #[test]
    fn test_wrong_count_fails_fast() {
        let estimator = GestureEstimator::with_builtin();
        let points = vec![Point3::origin(); 7];
        assert!(matches!(
            estimator.estimate(&points, 0.0),
            Err(Error::InvalidLandmarkCount { actual: 7 })
        ));
    }

    #[test]
    fn test_open_palm_tops_straight_up_hand() {
        let estimator = GestureEstimator::with_builtin();
        let points = straight_up_hand();
        let result = estimator.estimate(&points, 0.0).unwrap();
        let best = result.best().unwrap();
        assert_eq!(best.name, "open_palm");
        assert!((best.confidence - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_results_keep_registry_order() {
        let estimator = GestureEstimator::with_builtin();
        let points = straight_up_hand();
        let result = estimator.estimate(&points, 0.0).unwrap();
        let names: Vec<_> = result.gestures().iter().map(|g| g.name.as_str()).collect();
        let registry_order: Vec<_> = estimator
            .registry()
            .names()
            .into_iter()
            .filter(|n| names.contains(n))
            .collect();
        assert_eq!(names, registry_order);
    }

    #[test]
    fn test_min_score_cuts_weak_matches() {
        let estimator = GestureEstimator::with_builtin();
        let points = straight_up_hand();
        let all = estimator.estimate(&points, 0.0).unwrap();
        let cut = estimator.estimate(&points, 9.0).unwrap();
        assert!(cut.gestures().len() < all.gestures().len());
        assert!(cut.gestures().iter().all(|g| g.confidence >= 9.0));
    }

    #[test]
    fn test_estimation_is_deterministic() {
        let estimator = GestureEstimator::with_builtin();
        let points = straight_up_hand();
        let a = estimator.estimate(&points, 0.0).unwrap();
        let b = estimator.estimate(&points, 0.0).unwrap();
        assert_eq!(a.gestures(), b.gestures());
    }

    #[test]
    fn test_into_sorted_descends() {
        let estimator = GestureEstimator::with_builtin();
        let points = straight_up_hand();
        let sorted = estimator.estimate(&points, 0.0).unwrap().into_sorted();
        for pair in sorted.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = GestureRegistry::new();
        registry
            .register(
                GestureTemplate::builder("flat")
                    .curl(Finger::Index, FingerCurl::NoCurl, 2.0)
                    .build()
                    .unwrap(),
            )
            .unwrap();
        let estimator = GestureEstimator::new(registry);
        let result = estimator.estimate(&straight_up_hand(), 0.0).unwrap();
        assert_eq!(result.best().unwrap().name, "flat");
        assert!((result.best().unwrap().confidence - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_display_name() {
        let score = GestureScore {
            name: "thumbs_up".to_owned(),
            confidence: 1.0,
        };
        assert_eq!(score.display_name(), "THUMBS UP");
    }
}
