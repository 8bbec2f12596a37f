//! Axis-aligned bounds of a chain and the derived canvas placement.

/// Zero-seeded bounding box fold and centering placement.
pub mod bbox;
