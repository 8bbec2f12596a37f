//! Bouba generates closed, organic blob outlines from a random seed.
//!
//! A shape is a loop of non-overlapping circles: a chain of circles, each tangent to the one
//! before it, closed by one computed circle that bridges the last circle back to the first.
//! The outline is traced as arcs around every circle, joined at the tangent points.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `GenerationParams + RandomSource -> OpenChain` (randomized tangent placement,
//!    bounded local retry per circle)
//! 2. **Close**: `OpenChain -> BoubaShape` (closing circle plus its bearing)
//! 3. **Validate**: pairwise non-overlap over the whole loop
//! 4. **Trace**: `BoubaShape + TraversalConvention -> Contour`
//!
//! [`ShapeSession`] runs steps 1–3 as a bounded, cooperative retry loop: one attempt per
//! [`ShapeSession::step`], so a host can keep drawing frames between attempts.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: a shape is a pure function of the draws taken from its [`RandomSource`].
//! - **Geometry only**: rasterization, colors and file formats belong to the caller.
#![forbid(unsafe_code)]

mod bounds;
mod chain;
mod config;
mod contour;
mod foundation;
mod random;
mod session;

pub use bounds::bbox::{BoundingBox, Placement, bounding_box};
pub use chain::builder::{ChainBuilder, OpenChain};
pub use chain::closer::{ClosingCircle, closing_circle};
pub use chain::shape::BoubaShape;
pub use chain::validator::{is_valid, validate_chain};
pub use config::params::{
    DEFAULT_MAX_TRIES, DEFAULT_PLACEMENT_ATTEMPTS, GenerationParams, SessionOpts,
};
pub use contour::tracer::{Contour, POINTS_PER_CIRCLE, TraversalConvention, trace};
pub use foundation::core::{
    Affine, BezPath, Canvas, Circle, Point, Rect, Vec2, center_distance, is_well_formed, overlaps,
    point_at,
};
pub use foundation::error::{AttemptError, BoubaError, BoubaResult};
pub use foundation::math::seed_from_text;
pub use random::source::{RandomSource, SeededRandom, SequenceRandom};
pub use session::shape_session::{SessionStatus, ShapeSession, attempt};
