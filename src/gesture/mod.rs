//! The gesture-matching engine: per-finger curl and direction
//! classification, weighted gesture templates, and the estimator that
//! scores a landmark set against every registered template.

pub mod curl;
pub mod direction;
pub mod estimator;
pub mod pose;
pub mod registry;
pub mod template;

pub use curl::{classify_curl, CurlReading, CurlThresholds, FingerCurl};
pub use direction::{classify_direction, DirectionReading, FingerDirection};
pub use estimator::{EstimationResult, GestureEstimator, GestureScore};
pub use pose::HandPose;
pub use registry::GestureRegistry;
pub use template::{GestureTemplate, GestureTemplateBuilder};
