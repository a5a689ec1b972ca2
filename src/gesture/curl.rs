//! Per-finger bend classification.
//!
//! The bend of a finger is the sum of the two angles between its three
//! joint segments (base→tip, 4 landmarks). Near-colinear segments read as
//! no curl, a bend past the per-finger threshold as full curl, anything
//! between as half curl.

use nalgebra::Point3;
use tracing::trace;

use crate::geometry;
use crate::hand::Finger;

/// How bent a finger is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FingerCurl {
    NoCurl,
    HalfCurl,
    FullCurl,
}

impl FingerCurl {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoCurl => "no-curl",
            Self::HalfCurl => "half-curl",
            Self::FullCurl => "full-curl",
        }
    }

    /// Whether two curl states are neighbors on the bend scale.
    /// NoCurl and FullCurl are never neighbors.
    pub fn is_adjacent(self, other: FingerCurl) -> bool {
        matches!(
            (self, other),
            (Self::NoCurl, Self::HalfCurl)
                | (Self::HalfCurl, Self::NoCurl)
                | (Self::HalfCurl, Self::FullCurl)
                | (Self::FullCurl, Self::HalfCurl)
        )
    }
}

/// Per-finger bend thresholds, in radians over the summed joint angles.
#[derive(Debug, Clone, Copy)]
pub struct CurlThresholds {
    /// Bends below this classify as NoCurl.
    pub no_curl_max: f32,
    /// Bends above this classify as FullCurl.
    pub full_curl_min: f32,
}

impl CurlThresholds {
    /// Calibrated thresholds per finger. The thumb has roughly half the
    /// bend range of the other fingers, so its full-curl threshold is
    /// shallower.
    pub fn for_finger(finger: Finger) -> Self {
        match finger {
            Finger::Thumb => Self {
                no_curl_max: 35.0_f32.to_radians(),
                full_curl_min: 80.0_f32.to_radians(),
            },
            _ => Self {
                no_curl_max: 60.0_f32.to_radians(),
                full_curl_min: 140.0_f32.to_radians(),
            },
        }
    }

    /// Half the width of the half-curl band. Used to normalize boundary
    /// distances into confidences.
    fn half_band(&self) -> f32 {
        (self.full_curl_min - self.no_curl_max) / 2.0
    }
}

/// One classified bend: the curl state plus how firmly inside its band the
/// measured angle sits (1.0 deep inside, 0.0 at a classification boundary).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurlReading {
    pub curl: FingerCurl,
    pub confidence: f32,
}

/// Classify how bent a finger is from its four landmarks, base to tip.
/// Returns `None` when a joint segment degenerates to zero length
/// (the indeterminate reading).
pub fn classify_curl(finger: Finger, points: &[Point3<f32>; 4]) -> Option<CurlReading> {
    let s1 = geometry::vector(&points[0], &points[1]);
    let s2 = geometry::vector(&points[1], &points[2]);
    let s3 = geometry::vector(&points[2], &points[3]);

    let bend = geometry::angle_between(&s1, &s2)? + geometry::angle_between(&s2, &s3)?;

    let t = CurlThresholds::for_finger(finger);
    let (curl, confidence) = if bend < t.no_curl_max {
        (FingerCurl::NoCurl, 1.0 - bend / t.no_curl_max)
    } else if bend > t.full_curl_min {
        let c = (bend - t.full_curl_min) / t.half_band();
        (FingerCurl::FullCurl, c.min(1.0))
    } else {
        let center = (t.no_curl_max + t.full_curl_min) / 2.0;
        let c = 1.0 - (bend - center).abs() / t.half_band();
        (FingerCurl::HalfCurl, c)
    };

    trace!(
        finger = finger.as_str(),
        bend_deg = bend.to_degrees(),
        curl = curl.as_str(),
        confidence,
        "classified finger curl"
    );

    Some(CurlReading { curl, confidence })
}

#[cfg(test)]
pub(crate) fn bent_finger(turn: f32) -> [Point3<f32>; 4] {
    // start pointing up on screen (image coordinates, y down), then turn
    // each joint by `turn` radians
    let mut points = [Point3::new(0.0, 0.0, 0.0); 4];
    let mut dir = (0.0_f32, -1.0_f32);
    let mut angle = 0.0;
    for i in 1..4 {
        points[i] = Point3::new(points[i - 1].x + dir.0, points[i - 1].y + dir.1, 0.0);
        angle += turn;
        let (sin, cos) = angle.sin_cos();
        dir = (-sin, -cos);
    }
    points
}
