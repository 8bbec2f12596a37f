use crate::bounds::bbox::{BoundingBox, Placement};
use crate::chain::builder::ChainBuilder;
use crate::chain::shape::BoubaShape;
use crate::chain::validator::validate_chain;
use crate::config::params::{GenerationParams, SessionOpts};
use crate::contour::tracer::{Contour, TraversalConvention};
use crate::foundation::core::Canvas;
use crate::foundation::error::{AttemptError, BoubaResult};
use crate::random::source::RandomSource;

/// Lifecycle of a [`ShapeSession`]. Exactly one state holds at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum SessionStatus {
    /// Attempts remain and no chain has been accepted yet.
    Loading,
    /// A chain was accepted and is frozen until the next reset.
    Ready,
    /// The retry budget ran out; only a reset restarts generation.
    Failed,
}

/// One complete generation attempt: build, close, validate.
///
/// Every call draws a wholly new chain from `rng`; nothing is carried over between attempts.
pub fn attempt(
    builder: &ChainBuilder,
    rng: &mut dyn RandomSource,
) -> Result<BoubaShape, AttemptError> {
    let shape = builder.build(rng)?.close();
    validate_chain(shape.circles())?;
    Ok(shape)
}

/// Drives chain attempts until one is accepted or the retry budget is spent.
///
/// The session never loops on its own: the host calls [`ShapeSession::step`] once per tick (for
/// example once per frame) and can show a loading state in between. [`ShapeSession::resolve`]
/// runs the remaining attempts back to back for hosts that do not need to interleave.
pub struct ShapeSession {
    params: GenerationParams,
    opts: SessionOpts,
    builder: ChainBuilder,
    rng: Box<dyn RandomSource>,
    convention: TraversalConvention,

    status: SessionStatus,
    tries: u32,
    attempts: u64,
    shape: Option<BoubaShape>,
    last_rejection: Option<AttemptError>,
}

impl ShapeSession {
    pub fn new(
        params: GenerationParams,
        opts: SessionOpts,
        rng: impl RandomSource + 'static,
    ) -> BoubaResult<Self> {
        opts.validate()?;
        let builder = make_builder(params, &opts)?;
        Ok(Self {
            params,
            opts,
            builder,
            rng: Box::new(rng),
            convention: opts.convention,
            status: SessionStatus::Loading,
            tries: 0,
            attempts: 0,
            shape: None,
            last_rejection: None,
        })
    }

    /// Run one attempt if still loading, and return the resulting status.
    #[tracing::instrument(skip(self), fields(tries = self.tries))]
    pub fn step(&mut self) -> SessionStatus {
        if self.status != SessionStatus::Loading {
            return self.status;
        }

        self.attempts += 1;
        match attempt(&self.builder, self.rng.as_mut()) {
            Ok(shape) => {
                tracing::info!(
                    attempts = self.attempts,
                    circles = shape.len(),
                    "chain accepted"
                );
                self.shape = Some(shape);
                self.status = SessionStatus::Ready;
                self.tries = 0;
                self.last_rejection = None;
            }
            Err(err) => {
                self.tries += 1;
                tracing::debug!(error = %err, "chain rejected");
                self.last_rejection = Some(err);
                if self.tries >= self.opts.max_tries {
                    tracing::warn!(max_tries = self.opts.max_tries, "retry budget exhausted");
                    self.status = SessionStatus::Failed;
                }
            }
        }
        self.status
    }

    /// Step until the session leaves `Loading`. Performs at most `max_tries` attempts.
    pub fn resolve(&mut self) -> SessionStatus {
        while self.status == SessionStatus::Loading {
            self.step();
        }
        self.status
    }

    /// Restart generation, optionally with new parameters.
    ///
    /// Invalid parameters are rejected before any state changes. The random stream continues
    /// where it left off.
    pub fn reset(&mut self, params: Option<GenerationParams>) -> BoubaResult<()> {
        if let Some(params) = params {
            self.builder = make_builder(params, &self.opts)?;
            self.params = params;
        }
        self.status = SessionStatus::Loading;
        self.tries = 0;
        self.attempts = 0;
        self.shape = None;
        self.last_rejection = None;
        Ok(())
    }

    /// Swap the random source and restart generation.
    pub fn reseed(
        &mut self,
        rng: impl RandomSource + 'static,
        params: Option<GenerationParams>,
    ) -> BoubaResult<()> {
        self.reset(params)?;
        self.rng = Box::new(rng);
        Ok(())
    }

    /// Flip between traversal conventions. The accepted chain is kept.
    pub fn toggle_convention(&mut self) {
        self.convention = self.convention.toggled();
    }

    pub fn set_convention(&mut self, convention: TraversalConvention) {
        self.convention = convention;
    }

    pub fn convention(&self) -> TraversalConvention {
        self.convention
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    pub fn is_ready(&self) -> bool {
        self.status == SessionStatus::Ready
    }

    pub fn is_failed(&self) -> bool {
        self.status == SessionStatus::Failed
    }

    /// Rejected attempts since the last reset or acceptance.
    pub fn tries(&self) -> u32 {
        self.tries
    }

    pub fn max_tries(&self) -> u32 {
        self.opts.max_tries
    }

    /// Attempts made since the last reset, the accepted one included.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Why the most recent attempt was rejected, if it was.
    pub fn last_rejection(&self) -> Option<&AttemptError> {
        self.last_rejection.as_ref()
    }

    /// The accepted shape. `None` unless the session is ready.
    pub fn shape(&self) -> Option<&BoubaShape> {
        self.shape.as_ref()
    }

    /// Freshly traced outline under the current convention.
    pub fn contour(&self) -> Option<Contour> {
        self.shape().map(|s| s.contour(self.convention))
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.shape().map(BoubaShape::bounding_box)
    }

    pub fn placement(&self, canvas: Canvas) -> Option<Placement> {
        self.bounding_box().map(|b| Placement::center_in(&b, canvas))
    }
}

impl std::fmt::Debug for ShapeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeSession")
            .field("params", &self.params)
            .field("opts", &self.opts)
            .field("convention", &self.convention)
            .field("status", &self.status)
            .field("tries", &self.tries)
            .field("attempts", &self.attempts)
            .finish_non_exhaustive()
    }
}

fn make_builder(params: GenerationParams, opts: &SessionOpts) -> BoubaResult<ChainBuilder> {
    Ok(ChainBuilder::new(params)?.with_placement_attempts(opts.placement_attempts))
}

#[cfg(test)]
#[path = "../../tests/unit/session/shape_session.rs"]
mod tests;
