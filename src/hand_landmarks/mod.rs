use image::DynamicImage;

use crate::error::Result;
use crate::hand::HandLandmarks;

// define the HandLandmarksModel trait
//
// The landmark network itself is an external collaborator: implementations
// wrap whatever pretrained model is available and return zero or one hands
// per frame. The gesture engine only ever sees the resulting points.
pub trait HandLandmarksModel: Send + Sync {
    /// Run the model on one frame. An empty vector means no hand was
    /// detected in the frame; that is a normal outcome, not an error.
    fn run(&self, image: &DynamicImage) -> Result<Vec<HandLandmarks>>;
}
