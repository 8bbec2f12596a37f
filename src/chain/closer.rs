use std::f64::consts::PI;

use crate::foundation::core::{Circle, center_distance, point_at};

/// Circle bridging the last placed circle back to the first one.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ClosingCircle {
    pub circle: Circle,
    /// Direction from the last placed circle's center to the closing circle's center.
    pub bearing: f64,
}

/// Compute the closing circle for a chain starting at `first` and ending at `last`.
///
/// The closing circle sits on the segment between both centers, tangent to `last`, with a
/// radius of half the gap left once both end radii are removed. When the ends already touch or
/// overlap the radius comes out non-positive; the circle is still returned and left for the
/// validator to reject.
pub fn closing_circle(first: &Circle, last: &Circle) -> ClosingCircle {
    let hip = center_distance(first, last);
    let ah = (first.center.x - last.center.x) / hip;

    let radius = (hip - last.radius - first.radius) / 2.0;
    let reach = radius + last.radius;
    // acos only covers [0, pi]; mirror into the lower half-plane when the chain ends below.
    let bearing = if last.center.y > first.center.y {
        (-ah).acos() - PI
    } else {
        ah.acos()
    };

    let center = point_at(&Circle::new(last.center, reach), bearing);
    ClosingCircle {
        circle: Circle::new(center, radius),
        bearing,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chain/closer.rs"]
mod tests;
