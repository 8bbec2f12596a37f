use std::{fs::File, io::BufReader, ops::Range, path::Path};

use anyhow::Context as _;

use crate::contour::tracer::TraversalConvention;
use crate::foundation::error::{BoubaError, BoubaResult};
use crate::random::source::RandomSource;

/// Default local placement budget per circle.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 400;
/// Default number of whole-chain attempts before a session fails.
pub const DEFAULT_MAX_TRIES: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Shape parameters for one chain.
///
/// Radii are drawn uniformly from `[min_radius, max_radius)`; with `integral_radii` each draw is
/// truncated to a whole number, matching the classic look. The closing circle's radius is
/// derived from the gap and is never truncated.
pub struct GenerationParams {
    /// Total circles in the closed chain, closing circle included.
    pub circle_count: usize,
    /// Lower bound for drawn radii.
    pub min_radius: f64,
    /// Upper bound for drawn radii.
    pub max_radius: f64,
    /// Truncate drawn radii to integers.
    pub integral_radii: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            circle_count: 12,
            min_radius: 50.0,
            max_radius: 100.0,
            integral_radii: true,
        }
    }
}

impl GenerationParams {
    pub fn new(circle_count: usize, min_radius: f64, max_radius: f64) -> BoubaResult<Self> {
        let p = Self {
            circle_count,
            min_radius,
            max_radius,
            ..Self::default()
        };
        p.validate()?;
        Ok(p)
    }

    /// Parse parameters from JSON and validate them. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> BoubaResult<Self> {
        let params: Self = serde_json::from_reader(r)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_path(path: impl AsRef<Path>) -> BoubaResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("open params '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Default radii with a circle count drawn from `counts`.
    pub fn sample(rng: &mut dyn RandomSource, counts: Range<usize>) -> BoubaResult<Self> {
        if counts.start < 3 || counts.is_empty() {
            return Err(BoubaError::validation(
                "sampled circle counts must be a non-empty range starting at >= 3",
            ));
        }
        let drawn = rng.uniform(counts.start as f64, counts.end as f64).trunc() as usize;
        Ok(Self {
            circle_count: drawn.clamp(counts.start, counts.end - 1),
            ..Self::default()
        })
    }

    pub fn with_circle_count(mut self, circle_count: usize) -> Self {
        self.circle_count = circle_count;
        self
    }

    pub fn with_radii(mut self, min_radius: f64, max_radius: f64) -> Self {
        self.min_radius = min_radius;
        self.max_radius = max_radius;
        self
    }

    pub fn with_integral_radii(mut self, integral_radii: bool) -> Self {
        self.integral_radii = integral_radii;
        self
    }

    pub fn validate(&self) -> BoubaResult<()> {
        if self.circle_count < 3 {
            return Err(BoubaError::validation("circle_count must be >= 3"));
        }
        if !self.min_radius.is_finite() || !self.max_radius.is_finite() {
            return Err(BoubaError::validation("radii must be finite"));
        }
        if self.min_radius <= 0.0 {
            return Err(BoubaError::validation("min_radius must be > 0"));
        }
        if self.max_radius < self.min_radius {
            return Err(BoubaError::validation("max_radius must be >= min_radius"));
        }
        if self.integral_radii && self.min_radius < 1.0 {
            return Err(BoubaError::validation(
                "min_radius must be >= 1 when integral_radii is set",
            ));
        }
        Ok(())
    }

    /// Draw one radius according to these parameters.
    pub(crate) fn draw_radius(&self, rng: &mut dyn RandomSource) -> f64 {
        let r = rng.uniform(self.min_radius, self.max_radius);
        if self.integral_radii { r.trunc() } else { r }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Retry and tracing options for a [`crate::ShapeSession`].
pub struct SessionOpts {
    /// Whole-chain attempts before the session reports failure.
    pub max_tries: u32,
    /// Local attempts per circle before a chain attempt is abandoned.
    pub placement_attempts: usize,
    /// Initial traversal convention for contour tracing.
    pub convention: TraversalConvention,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            max_tries: DEFAULT_MAX_TRIES,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            convention: TraversalConvention::default(),
        }
    }
}

impl SessionOpts {
    pub fn validate(&self) -> BoubaResult<()> {
        if self.max_tries == 0 {
            return Err(BoubaError::validation("max_tries must be > 0"));
        }
        if self.placement_attempts == 0 {
            return Err(BoubaError::validation("placement_attempts must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/params.rs"]
mod tests;
