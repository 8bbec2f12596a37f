//! Generation and session configuration.

/// Serde-backed parameter structs with explicit validation.
pub mod params;
