//! Circle chain generation: randomized placement, loop closure, global validation.
//!
//! A chain attempt runs [`builder::ChainBuilder::build`], closes the open chain with
//! [`closer::closing_circle`] and accepts it only if [`validator::validate_chain`] finds no
//! overlapping pair anywhere in the loop.

/// Randomized tangent placement of the open chain.
pub mod builder;
/// Closing circle computation.
pub mod closer;
/// The closed, accepted circle chain.
pub mod shape;
/// Global pairwise overlap check.
pub mod validator;
