//! Outline synthesis around an accepted circle chain.

/// Arc interpolation and the traced point sequence.
pub mod tracer;
