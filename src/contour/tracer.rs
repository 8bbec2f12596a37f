use std::f64::consts::PI;

use crate::chain::shape::BoubaShape;
use crate::foundation::core::{BezPath, Circle, Point, point_at};
use crate::foundation::math::{arc_sweep, map_range};

/// Vertices emitted per circle (forward runs emit all of them, backward runs skip the anchor).
pub const POINTS_PER_CIRCLE: usize = 50;

/// Which end of each arc anchors the interpolation, and which way it steps.
///
/// Both conventions trace the same chain; they swap the run kind used on odd and even circles
/// and so produce two visibly different outlines.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum TraversalConvention {
    #[default]
    A,
    B,
}

impl TraversalConvention {
    pub fn toggled(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Ordered boundary vertices of a traced outline. The path is implicitly closed.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closed polyline through every vertex, for hand-off to a renderer.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.points.iter().copied();
        let Some(first) = points.next() else {
            return path;
        };
        path.move_to(first);
        for p in points {
            path.line_to(p);
        }
        path.close_path();
        path
    }
}

#[derive(Clone, Copy, Debug)]
struct ArcRun {
    anchor: f64,
    span: f64,
    direction: f64,
    first_point: usize,
}

impl ArcRun {
    /// Walk from `o` towards `f`, starting on `o` itself.
    fn forward(o: f64, f: f64) -> Self {
        Self {
            anchor: o,
            span: arc_sweep(o, f),
            direction: 1.0,
            first_point: 0,
        }
    }

    /// Walk back from `f` towards `o`, skipping `f` itself.
    fn backward(o: f64, f: f64) -> Self {
        Self {
            anchor: f,
            span: arc_sweep(o, f),
            direction: -1.0,
            first_point: 1,
        }
    }

    fn emit(self, circle: &Circle, out: &mut Vec<Point>) {
        let last = (POINTS_PER_CIRCLE - 1) as f64;
        for j in self.first_point..POINTS_PER_CIRCLE {
            let delta = map_range(j as f64, 0.0, last, 0.0, self.span);
            out.push(point_at(circle, self.anchor + self.direction * delta));
        }
    }
}

/// Trace the outline of `shape` under `convention`.
///
/// Circle `i` contributes an arc between the tangent direction towards its predecessor
/// (`π + angles[i - 1]`, wrapping to the last angle for circle `0`) and the direction towards
/// its successor (`angles[i]`). Runs are concatenated in chain order.
pub fn trace(shape: &BoubaShape, convention: TraversalConvention) -> Contour {
    let circles = shape.circles();
    let angles = shape.angles();
    let n = circles.len();
    let mut points = Vec::with_capacity(n * POINTS_PER_CIRCLE);

    for (i, circle) in circles.iter().enumerate() {
        let prev = PI + angles[(i + n - 1) % n];
        let curr = angles[i];
        let odd = i % 2 == 1;
        let (o, f) = if odd { (prev, curr) } else { (curr, prev) };
        let run = match (odd, convention) {
            (true, TraversalConvention::A) => ArcRun::forward(o, f),
            (true, TraversalConvention::B) => ArcRun::backward(f, o),
            (false, TraversalConvention::A) => ArcRun::backward(o, f),
            (false, TraversalConvention::B) => ArcRun::forward(f, o),
        };
        run.emit(circle, &mut points);
    }

    Contour { points }
}

#[cfg(test)]
#[path = "../../tests/unit/contour/tracer.rs"]
mod tests;
