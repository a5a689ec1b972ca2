// vector math over 3-D landmark points

use nalgebra::{Point3, Vector3};

/// Norms below this are treated as degenerate.
pub const NORM_EPSILON: f32 = 1e-6;

/// Vector from `a` to `b`.
pub fn vector(a: &Point3<f32>, b: &Point3<f32>) -> Vector3<f32> {
    b - a
}

/// Euclidean norm.
pub fn magnitude(v: &Vector3<f32>) -> f32 {
    v.norm()
}

/// Unit vector in the direction of `v`, or `None` when `v` is
/// (numerically) zero-length.
pub fn normalize(v: &Vector3<f32>) -> Option<Vector3<f32>> {
    let m = v.norm();
    if m < NORM_EPSILON {
        return None;
    }
    Some(v / m)
}

/// Angle between two vectors in radians, `None` when either vector is
/// degenerate. The cosine is clamped to [-1, 1] before `acos` so
/// floating-point overshoot cannot leave the domain.
pub fn angle_between(v1: &Vector3<f32>, v2: &Vector3<f32>) -> Option<f32> {
    let n1 = normalize(v1)?;
    let n2 = normalize(v2)?;
    Some(n1.dot(&n2).clamp(-1.0, 1.0).acos())
}
