use std::f64::consts::TAU;

use crate::chain::closer::closing_circle;
use crate::chain::shape::BoubaShape;
use crate::config::params::{DEFAULT_PLACEMENT_ATTEMPTS, GenerationParams};
use crate::foundation::core::{Circle, Point, overlaps, point_at};
use crate::foundation::error::{AttemptError, BoubaResult};
use crate::random::source::RandomSource;

/// Chain of tangent circles that has not been closed into a loop yet.
///
/// Holds `circle_count - 1` circles and one placement angle per adjacent pair.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenChain {
    circles: Vec<Circle>,
    angles: Vec<f64>,
}

impl OpenChain {
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// `angles()[i]` is the direction from circle `i` to circle `i + 1`.
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Append the closing circle and its bearing.
    ///
    /// The bearing points from the last placed circle through the closing circle to the first
    /// circle, so it is recorded for both sides of the seam. The result is not validated.
    pub fn close(self) -> BoubaShape {
        let Self {
            mut circles,
            mut angles,
        } = self;
        let first = circles[0];
        let last = circles[circles.len() - 1];
        let closing = closing_circle(&first, &last);
        circles.push(closing.circle);
        angles.push(closing.bearing);
        angles.push(closing.bearing);
        BoubaShape::from_closed_parts(circles, angles)
    }
}

/// Places circles one by one, each tangent to its predecessor.
#[derive(Clone, Copy, Debug)]
pub struct ChainBuilder {
    params: GenerationParams,
    placement_attempts: usize,
}

impl ChainBuilder {
    pub fn new(params: GenerationParams) -> BoubaResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        })
    }

    pub fn with_placement_attempts(mut self, attempts: usize) -> Self {
        self.placement_attempts = attempts.max(1);
        self
    }

    /// Build the open chain: a start circle at the origin followed by `circle_count - 2`
    /// tangent circles.
    ///
    /// Each candidate is checked against every circle already placed. A circle that cannot be
    /// placed within the local budget abandons the whole chain.
    #[tracing::instrument(skip(self, rng), fields(circle_count = self.params.circle_count))]
    pub fn build(&self, rng: &mut dyn RandomSource) -> Result<OpenChain, AttemptError> {
        let n = self.params.circle_count;
        let mut circles = Vec::with_capacity(n);
        let mut angles = Vec::with_capacity(n);

        circles.push(Circle::new(Point::ORIGIN, self.params.draw_radius(rng)));

        for index in 1..n - 1 {
            let prev = circles[index - 1];
            let mut placed = None;
            for _ in 0..self.placement_attempts {
                let angle = rng.uniform(0.0, TAU);
                let radius = self.params.draw_radius(rng);
                let reach = Circle::new(prev.center, prev.radius + radius);
                let candidate = Circle::new(point_at(&reach, angle), radius);
                if !circles.iter().any(|c| overlaps(c, &candidate)) {
                    placed = Some((candidate, angle));
                    break;
                }
            }
            let Some((circle, angle)) = placed else {
                tracing::debug!(index, "placement budget exhausted");
                return Err(AttemptError::PlacementExhausted {
                    index,
                    attempts: self.placement_attempts,
                });
            };
            circles.push(circle);
            angles.push(angle);
        }

        Ok(OpenChain { circles, angles })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chain/builder.rs"]
mod tests;
