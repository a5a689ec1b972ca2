//! Gesture templates: named, weighted sets of expected per-finger curl
//! and direction criteria. Templates are frozen at `build()` time and
//! never mutated afterwards.

use crate::error::{Error, Result};
use crate::gesture::curl::FingerCurl;
use crate::gesture::direction::FingerDirection;
use crate::gesture::pose::HandPose;
use crate::hand::Finger;

/// Fraction of a criterion's weight granted when the observed reading is
/// adjacent to the expectation and sits right on a classification
/// boundary. Scaled down by the reading's confidence: a firm reading
/// grants the neighbor nothing.
const NEAR_MISS: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurlCriterion {
    pub finger: Finger,
    pub expected: FingerCurl,
    pub weight: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionCriterion {
    pub finger: Finger,
    pub expected: FingerDirection,
    pub weight: f32,
}

/// A frozen gesture description. Multiple criteria per finger are legal
/// and all contribute to the score.
#[derive(Debug, Clone)]
pub struct GestureTemplate {
    name: String,
    curls: Vec<CurlCriterion>,
    directions: Vec<DirectionCriterion>,
    max_score: f32,
}

impl GestureTemplate {
    pub fn builder(name: impl Into<String>) -> GestureTemplateBuilder {
        GestureTemplateBuilder {
            name: name.into(),
            curls: Vec::new(),
            directions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sum of all criteria weights: the score a perfectly matching hand
    /// earns. Scores are not normalized to a fixed scale; callers compare
    /// against this maximum or apply their own threshold.
    pub fn max_score(&self) -> f32 {
        self.max_score
    }

    pub fn curl_criteria(&self) -> &[CurlCriterion] {
        &self.curls
    }

    pub fn direction_criteria(&self) -> &[DirectionCriterion] {
        &self.directions
    }

    /// Score one observed hand pose against this template: full weight on
    /// an exact match, near-miss credit when the reading is adjacent to
    /// the expectation and was classified near a boundary, nothing on a
    /// clear mismatch or an indeterminate reading.
    pub fn score(&self, pose: &HandPose) -> f32 {
        let mut total = 0.0;

        for c in &self.curls {
            if let Some(reading) = pose.curl(c.finger) {
                if reading.curl == c.expected {
                    total += c.weight;
                } else if reading.curl.is_adjacent(c.expected) {
                    total += c.weight * NEAR_MISS * (1.0 - reading.confidence);
                }
            }
        }

        for d in &self.directions {
            if let Some(reading) = pose.direction(d.finger) {
                if reading.direction == d.expected {
                    total += d.weight;
                } else if reading.direction.is_adjacent(d.expected) {
                    total += d.weight * NEAR_MISS * (1.0 - reading.confidence);
                }
            }
        }

        total
    }
}

/// Transient criteria buffer, frozen into a read-only [`GestureTemplate`]
/// by `build()`. Later calls never overwrite earlier ones.
#[derive(Debug, Clone)]
pub struct GestureTemplateBuilder {
    name: String,
    curls: Vec<CurlCriterion>,
    directions: Vec<DirectionCriterion>,
}

impl GestureTemplateBuilder {
    pub fn curl(mut self, finger: Finger, expected: FingerCurl, weight: f32) -> Self {
        self.curls.push(CurlCriterion {
            finger,
            expected,
            weight,
        });
        self
    }

    pub fn direction(mut self, finger: Finger, expected: FingerDirection, weight: f32) -> Self {
        self.directions.push(DirectionCriterion {
            finger,
            expected,
            weight,
        });
        self
    }

    /// Freeze the accumulated criteria. A template with no criteria at
    /// all is rejected.
    pub fn build(self) -> Result<GestureTemplate> {
        if self.curls.is_empty() && self.directions.is_empty() {
            return Err(Error::EmptyTemplate { name: self.name });
        }
        let max_score = self.curls.iter().map(|c| c.weight).sum::<f32>()
            + self.directions.iter().map(|d| d.weight).sum::<f32>();
        Ok(GestureTemplate {
            name: self.name,
            curls: self.curls,
            directions: self.directions,
            max_score,
        })
    }
}
