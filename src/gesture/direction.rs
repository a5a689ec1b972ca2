//! Per-finger pointing-direction classification.
//!
//! The tip-minus-base vector is projected onto the camera-facing x/y
//! plane and bucketed into eight 45°-wide sectors centered on the
//! cardinal and diagonal directions. Landmarks arrive in image
//! coordinates (y grows downward); dy is flipped here, and only here, so
//! that `VerticalUp` means up on screen.

use nalgebra::Point3;
use tracing::trace;

use crate::geometry;

/// Pointing direction of a finger, as seen on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FingerDirection {
    VerticalUp,
    VerticalDown,
    HorizontalLeft,
    HorizontalRight,
    DiagonalUpLeft,
    DiagonalUpRight,
    DiagonalDownLeft,
    DiagonalDownRight,
}

/// Sector order, counter-clockwise from the positive x axis.
const SECTORS: [FingerDirection; 8] = [
    FingerDirection::HorizontalRight,
    FingerDirection::DiagonalUpRight,
    FingerDirection::VerticalUp,
    FingerDirection::DiagonalUpLeft,
    FingerDirection::HorizontalLeft,
    FingerDirection::DiagonalDownLeft,
    FingerDirection::VerticalDown,
    FingerDirection::DiagonalDownRight,
];

/// Width of each direction sector in degrees.
pub const SECTOR_WIDTH_DEG: f32 = 45.0;

impl FingerDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VerticalUp => "vertical-up",
            Self::VerticalDown => "vertical-down",
            Self::HorizontalLeft => "horizontal-left",
            Self::HorizontalRight => "horizontal-right",
            Self::DiagonalUpLeft => "diagonal-up-left",
            Self::DiagonalUpRight => "diagonal-up-right",
            Self::DiagonalDownLeft => "diagonal-down-left",
            Self::DiagonalDownRight => "diagonal-down-right",
        }
    }

    fn sector(self) -> usize {
        match self {
            Self::HorizontalRight => 0,
            Self::DiagonalUpRight => 1,
            Self::VerticalUp => 2,
            Self::DiagonalUpLeft => 3,
            Self::HorizontalLeft => 4,
            Self::DiagonalDownLeft => 5,
            Self::VerticalDown => 6,
            Self::DiagonalDownRight => 7,
        }
    }

    /// Center angle of this sector, degrees counter-clockwise from the
    /// positive x axis.
    pub fn center_deg(self) -> f32 {
        self.sector() as f32 * SECTOR_WIDTH_DEG
    }

    /// Whether two directions occupy neighboring sectors on the circle.
    pub fn is_adjacent(self, other: FingerDirection) -> bool {
        let d = (self.sector() as i32 - other.sector() as i32).rem_euclid(8);
        d == 1 || d == 7
    }
}

/// One classified pointing direction: the sector plus how close to its
/// center the vector points (1.0 at the center, 0.0 at a sector boundary).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionReading {
    pub direction: FingerDirection,
    pub confidence: f32,
}

/// Classify the pointing direction of a tip-from-base vector. Returns
/// `None` when the planar projection degenerates to zero length (finger
/// pointing straight at the camera, or coincident points).
pub fn classify_direction(base: &Point3<f32>, tip: &Point3<f32>) -> Option<DirectionReading> {
    let v = geometry::vector(base, tip);
    let dx = v.x;
    let dy = -v.y; // image coordinates: y grows downward

    if (dx * dx + dy * dy).sqrt() < geometry::NORM_EPSILON {
        return None;
    }

    let angle = dy.atan2(dx).to_degrees();
    let sector =
        (((angle + SECTOR_WIDTH_DEG / 2.0).rem_euclid(360.0)) / SECTOR_WIDTH_DEG) as usize % 8;
    let direction = SECTORS[sector];

    // circular distance from the sector center
    let mut dist = (angle - direction.center_deg()).rem_euclid(360.0);
    if dist > 180.0 {
        dist = 360.0 - dist;
    }
    let confidence = (1.0 - dist / (SECTOR_WIDTH_DEG / 2.0)).clamp(0.0, 1.0);

    trace!(
        angle_deg = angle,
        direction = direction.as_str(),
        confidence,
        "classified finger direction"
    );

    Some(DirectionReading {
        direction,
        confidence,
    })
}
