use rand::{Rng, SeedableRng};

use crate::foundation::error::{BoubaError, BoubaResult};
use crate::foundation::math::seed_from_text;

/// A stream of uniform draws in `[0, 1)`.
///
/// Identical streams must yield identical shapes, so implementations are expected to be fully
/// deterministic once seeded.
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform draw in `[min, max)`.
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.next_unit() * (max - min) + min
    }
}

/// Seeded PCG generator.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: rand_pcg::Pcg64,
}

impl SeededRandom {
    /// Seed from a plain integer.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: rand_pcg::Pcg64::seed_from_u64(seed),
        }
    }

    /// Seed from a textual token such as a transaction or mint hash.
    pub fn from_hash(hash: &str) -> Self {
        Self::from_seed(seed_from_text(hash))
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Replays a fixed sequence of draws, cycling when it runs out.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> BoubaResult<Self> {
        if values.is_empty() {
            return Err(BoubaError::validation("sequence must contain at least one draw"));
        }
        if let Some(v) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(BoubaError::validation(format!(
                "sequence draw {v} is outside [0, 1)"
            )));
        }
        Ok(Self { values, cursor: 0 })
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

#[cfg(test)]
#[path = "../../tests/unit/random/source.rs"]
mod tests;
