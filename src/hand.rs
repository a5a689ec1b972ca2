use nalgebra::Point3;

use crate::error::{Error, Result};

/// Number of landmarks produced by the hand landmark model
/// (MediaPipe/handpose convention).
pub const LANDMARK_COUNT: usize = 21;

/// Wrist landmark index. The remaining 20 points are four per finger,
/// thumb through pinky, base to tip.
pub const WRIST: usize = 0;

/// The five fingers, in landmark order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Landmark indices of this finger, base to tip.
    pub fn point_indices(&self) -> [usize; 4] {
        match self {
            Self::Thumb => [1, 2, 3, 4],
            Self::Index => [5, 6, 7, 8],
            Self::Middle => [9, 10, 11, 12],
            Self::Ring => [13, 14, 15, 16],
            Self::Pinky => [17, 18, 19, 20],
        }
    }

    /// Landmark index of the finger base.
    pub fn base_index(&self) -> usize {
        self.point_indices()[0]
    }

    /// Landmark index of the fingertip.
    pub fn tip_index(&self) -> usize {
        self.point_indices()[3]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Thumb => "thumb",
            Self::Index => "index",
            Self::Middle => "middle",
            Self::Ring => "ring",
            Self::Pinky => "pinky",
        }
    }
}

// struct that stores one detected hand (21 3D points)
#[derive(Debug, Clone)]
pub struct HandLandmarks {
    // the 3D points of the hand, indexed by the anatomical convention
    points: Vec<Point3<f32>>,
    // detection confidence reported by the model
    confidence: f32,
}

impl HandLandmarks {
    /// Construct from 21 ordered points. Fails fast on any other count.
    pub fn from_points(points: Vec<Point3<f32>>, confidence: f32) -> Result<Self> {
        if points.len() != LANDMARK_COUNT {
            return Err(Error::InvalidLandmarkCount {
                actual: points.len(),
            });
        }
        Ok(Self { points, confidence })
    }

    /// Construct from a flat x,y,z-interleaved buffer, the layout landmark
    /// models emit. Fails fast unless the buffer holds exactly 21 points.
    pub fn from_vec(flat: Vec<f32>, confidence: f32) -> Result<Self> {
        if flat.len() != LANDMARK_COUNT * 3 {
            return Err(Error::InvalidFlatLength { len: flat.len() });
        }
        let mut points = Vec::with_capacity(LANDMARK_COUNT);
        for i in 0..flat.len() / 3 {
            points.push(Point3::new(flat[i * 3], flat[i * 3 + 1], flat[i * 3 + 2]));
        }
        Ok(Self { points, confidence })
    }

    pub fn point(&self, index: usize) -> Point3<f32> {
        self.points[index]
    }

    pub fn wrist(&self) -> Point3<f32> {
        self.points[WRIST]
    }

    /// The four points of one finger, base to tip.
    pub fn finger_points(&self, finger: Finger) -> [Point3<f32>; 4] {
        finger.point_indices().map(|i| self.points[i])
    }

    pub fn points(&self) -> &[Point3<f32>] {
        &self.points
    }

    /// Detection confidence reported by the model (0.0-1.0).
    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finger_indices_cover_all_landmarks_once() {
        let mut seen = vec![false; LANDMARK_COUNT];
        seen[WRIST] = true;
        for finger in Finger::ALL {
            for i in finger.point_indices() {
                assert!(!seen[i], "landmark {i} mapped twice");
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_from_vec_round_trip() {
        let flat: Vec<f32> = (0..LANDMARK_COUNT * 3).map(|i| i as f32).collect();
        let hand = HandLandmarks::from_vec(flat, 0.9).unwrap();
        assert_eq!(hand.len(), LANDMARK_COUNT);
        assert_eq!(hand.point(1), Point3::new(3.0, 4.0, 5.0));
        assert_eq!(hand.confidence(), 0.9);
    }

    #[test]
    fn test_from_vec_rejects_wrong_length() {
        assert!(matches!(
            HandLandmarks::from_vec(vec![0.0; 62], 1.0),
            Err(Error::InvalidFlatLength { len: 62 })
        ));
    }

    #[test]
    fn test_from_points_rejects_wrong_count() {
        let points = vec![Point3::origin(); 20];
        assert!(matches!(
            HandLandmarks::from_points(points, 1.0),
            Err(Error::InvalidLandmarkCount { actual: 20 })
        ));
    }

    #[test]
    fn test_finger_points_selects_sub_sequence() {
        let flat: Vec<f32> = (0..LANDMARK_COUNT * 3).map(|i| i as f32).collect();
        let hand = HandLandmarks::from_vec(flat, 1.0).unwrap();
        let pinky = hand.finger_points(Finger::Pinky);
        assert_eq!(pinky[0], hand.point(17));
        assert_eq!(pinky[3], hand.point(20));
    }
}
