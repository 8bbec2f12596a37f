use crate::foundation::error::{BoubaError, BoubaResult};

pub use kurbo::{Affine, BezPath, Circle, Point, Rect, Vec2};

/// Target surface dimensions used to center a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> BoubaResult<Self> {
        if width == 0 || height == 0 {
            return Err(BoubaError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }
}

/// Distance between the centers of two circles.
pub fn center_distance(a: &Circle, b: &Circle) -> f64 {
    a.center.distance(b.center)
}

/// `true` when the centers are closer than the sum of the radii.
///
/// The comparison is strict and exact: tangent circles do not overlap, but a tangent placement
/// whose recomputed distance rounds a hair below the radii sum does, and gets redrawn.
pub fn overlaps(a: &Circle, b: &Circle) -> bool {
    center_distance(a, b) < a.radius + b.radius
}

/// `true` when the circle has a finite center and a finite, strictly positive radius.
pub fn is_well_formed(c: &Circle) -> bool {
    c.center.x.is_finite() && c.center.y.is_finite() && c.radius.is_finite() && c.radius > 0.0
}

/// Point on the circle boundary at `angle` radians.
pub fn point_at(c: &Circle, angle: f64) -> Point {
    c.center + Vec2::from_angle(angle) * c.radius
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
