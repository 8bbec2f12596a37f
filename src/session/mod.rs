//! Cooperative retry state machine around chain generation.

/// [`shape_session::ShapeSession`] and the single-attempt entry point.
pub mod shape_session;
