use crate::bounds::bbox::{BoundingBox, bounding_box};
use crate::contour::tracer::{Contour, TraversalConvention, trace};
use crate::foundation::core::Circle;
use crate::foundation::error::{BoubaError, BoubaResult};

/// A closed circle chain together with its per-circle connecting angles.
///
/// `angles()[i]` is the direction from circle `i` to circle `i + 1`; the last entry points from
/// the closing circle back to circle `0`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BoubaShape {
    circles: Vec<Circle>,
    angles: Vec<f64>,
}

impl BoubaShape {
    /// Rebuild a shape from stored parts, e.g. a previously exported chain.
    ///
    /// Only the structure is checked (`circles.len() == angles.len() >= 3`); overlap validation
    /// is left to [`crate::validate_chain`].
    pub fn from_parts(circles: Vec<Circle>, angles: Vec<f64>) -> BoubaResult<Self> {
        if circles.len() < 3 {
            return Err(BoubaError::validation("a shape needs at least 3 circles"));
        }
        if circles.len() != angles.len() {
            return Err(BoubaError::validation(format!(
                "expected one angle per circle, got {} circles and {} angles",
                circles.len(),
                angles.len()
            )));
        }
        Ok(Self { circles, angles })
    }

    pub(crate) fn from_closed_parts(circles: Vec<Circle>, angles: Vec<f64>) -> Self {
        debug_assert_eq!(circles.len(), angles.len());
        Self { circles, angles }
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// The circle computed to close the loop.
    pub fn closing_circle(&self) -> Option<&Circle> {
        self.circles.last()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        bounding_box(&self.circles)
    }

    /// Trace the outline. A fresh point sequence is produced on every call.
    pub fn contour(&self, convention: TraversalConvention) -> Contour {
        trace(self, convention)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chain/shape.rs"]
mod tests;
