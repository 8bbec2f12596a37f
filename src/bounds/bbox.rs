use crate::foundation::core::{Affine, Canvas, Circle, Rect, Vec2};

/// Axis-aligned bounds in chain coordinates (y grows downwards, so `top <= bottom`).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        (self.left - self.right).abs()
    }

    pub fn height(&self) -> f64 {
        (self.top - self.bottom).abs()
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

/// Fold `center ± radius` over the chain.
///
/// The fold starts from an all-zero box, so the result always contains the origin even when
/// every circle lies elsewhere. Placement math downstream relies on this.
pub fn bounding_box(circles: &[Circle]) -> BoundingBox {
    circles
        .iter()
        .fold(BoundingBox::default(), |acc, c| BoundingBox {
            left: acc.left.min(c.center.x - c.radius),
            top: acc.top.min(c.center.y - c.radius),
            right: acc.right.max(c.center.x + c.radius),
            bottom: acc.bottom.max(c.center.y + c.radius),
        })
}

/// Translation that centers a chain on a canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Placement {
    pub dx: f64,
    pub dy: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    pub fn center_in(bbox: &BoundingBox, canvas: Canvas) -> Self {
        let width = bbox.width();
        let height = bbox.height();
        Self {
            dx: (f64::from(canvas.width) - width) / 2.0 + bbox.left.abs(),
            dy: (f64::from(canvas.height) - height) / 2.0 + bbox.top.abs(),
            width,
            height,
        }
    }

    /// Shift by an extra caller offset (e.g. a parallax nudge).
    pub fn with_offset(self, offset: Vec2) -> Self {
        Self {
            dx: self.dx + offset.x,
            dy: self.dy + offset.y,
            ..self
        }
    }

    /// Side of the square surface that fits the shape.
    pub fn square_side(&self) -> f64 {
        self.width.max(self.height)
    }

    pub fn to_affine(&self) -> Affine {
        Affine::translate(Vec2::new(self.dx, self.dy))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bounds/bbox.rs"]
mod tests;
