//! Hand-gesture recognition from 3-D hand landmarks.
//!
//! A pretrained landmark model (external, behind [`hand_landmarks::HandLandmarksModel`])
//! turns a camera frame into 21 3-D points; this crate classifies each
//! finger's curl and pointing direction, scores the hand against a set of
//! weighted gesture templates, and reports the best match with a
//! confidence.
//!
//! ```
//! use handsign::gesture::GestureEstimator;
//! use nalgebra::Point3;
//!
//! let estimator = GestureEstimator::with_builtin();
//! let landmarks: Vec<Point3<f32>> = Vec::new(); // no hand this frame
//! let result = estimator.estimate(&landmarks, 0.0).unwrap();
//! assert!(result.is_empty());
//! ```

pub mod error;
pub mod geometry;
pub mod gesture;
pub mod hand;
pub mod hand_landmarks;
pub mod recognizer;

pub use error::{Error, Result};
pub use gesture::{
    EstimationResult, FingerCurl, FingerDirection, GestureEstimator, GestureRegistry,
    GestureScore, GestureTemplate,
};
pub use hand::{Finger, HandLandmarks, LANDMARK_COUNT};
pub use hand_landmarks::HandLandmarksModel;
pub use recognizer::{HandSignRecognizer, Recognition, RecognizerConfig};
