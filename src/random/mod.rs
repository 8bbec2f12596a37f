//! Injected uniform random sources.
//!
//! Every draw the generator makes goes through [`source::RandomSource`], so a shape is a pure
//! function of the draw sequence.

/// Random source trait and the built-in seeded and replaying sources.
pub mod source;
