//! Shared primitives: error taxonomy, geometry helpers, small numeric utilities.

pub mod core;
pub mod error;
pub mod math;
