//! Per-finger readings for one landmark set, computed once and shared
//! across every template scored against it.

use nalgebra::Point3;

use crate::error::{Error, Result};
use crate::gesture::curl::{classify_curl, CurlReading};
use crate::gesture::direction::{classify_direction, DirectionReading};
use crate::hand::{Finger, LANDMARK_COUNT};

/// The observed pose of one hand: a curl and a direction reading per
/// finger. `None` entries are indeterminate readings from degenerate
/// geometry; they match no criterion.
#[derive(Debug, Clone)]
pub struct HandPose {
    curls: [Option<CurlReading>; 5],
    directions: [Option<DirectionReading>; 5],
}

impl HandPose {
    /// Classify all five fingers of a 21-point landmark set.
    /// Fails fast on any other point count.
    pub fn from_points(points: &[Point3<f32>]) -> Result<Self> {
        if points.len() != LANDMARK_COUNT {
            return Err(Error::InvalidLandmarkCount {
                actual: points.len(),
            });
        }

        let mut curls = [None; 5];
        let mut directions = [None; 5];
        for (i, finger) in Finger::ALL.into_iter().enumerate() {
            let fp = finger.point_indices().map(|idx| points[idx]);
            curls[i] = classify_curl(finger, &fp);
            directions[i] = classify_direction(&fp[0], &fp[3]);
        }

        Ok(Self { curls, directions })
    }

    pub fn curl(&self, finger: Finger) -> Option<CurlReading> {
        self.curls[finger as usize]
    }

    pub fn direction(&self, finger: Finger) -> Option<DirectionReading> {
        self.directions[finger as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::curl::FingerCurl;
    use crate::gesture::direction::FingerDirection;

    #[test]
    fn test_rejects_wrong_count() {
        let points = vec![Point3::origin(); 20];
        assert!(matches!(
            HandPose::from_points(&points),
            Err(Error::InvalidLandmarkCount { actual: 20 })
        ));
    }

    #[test]
    fn test_reads_straight_fingers() {
        // all fingers straight up on screen, spread along x
        let mut points = vec![Point3::new(0.5, 1.0, 0.0); LANDMARK_COUNT];
        for (f, finger) in Finger::ALL.into_iter().enumerate() {
            for (j, idx) in finger.point_indices().into_iter().enumerate() {
                points[idx] = Point3::new(0.3 + f as f32 * 0.1, 0.8 - j as f32 * 0.1, 0.0);
            }
        }
        let pose = HandPose::from_points(&points).unwrap();
        for finger in Finger::ALL {
            let curl = pose.curl(finger).unwrap();
            let dir = pose.direction(finger).unwrap();
            assert_eq!(curl.curl, FingerCurl::NoCurl, "{}", finger.as_str());
            assert_eq!(dir.direction, FingerDirection::VerticalUp, "{}", finger.as_str());
        }
    }

    #[test]
    fn test_degenerate_finger_reads_indeterminate() {
        let points = vec![Point3::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        let pose = HandPose::from_points(&points).unwrap();
        assert!(pose.curl(Finger::Index).is_none());
        assert!(pose.direction(Finger::Index).is_none());
    }
}
