use super::*;
use crate::random::source::{SeededRandom, SequenceRandom};

// r0 = 75; circle 1 at angle 0 (r 60); circle 2 at angle pi/2 (r 70). Closes cleanly.
const GOOD_DRAWS: [f64; 5] = [0.5, 0.0, 0.2, 0.25, 0.4];
// Same start, but circle 2 lands on circle 0 (angle pi).
const BAD_DRAWS: [f64; 5] = [0.5, 0.0, 0.2, 0.5, 0.2];

fn params(n: usize) -> GenerationParams {
    GenerationParams::new(n, 50.0, 100.0).unwrap()
}

fn opts(max_tries: u32, placement_attempts: usize) -> SessionOpts {
    SessionOpts {
        max_tries,
        placement_attempts,
        ..SessionOpts::default()
    }
}

fn scripted(draws: &[f64]) -> SequenceRandom {
    SequenceRandom::new(draws.to_vec()).unwrap()
}

#[test]
fn rejects_invalid_configuration() {
    let rng = || SeededRandom::from_seed(0);
    assert!(
        ShapeSession::new(params(4).with_circle_count(2), SessionOpts::default(), rng()).is_err()
    );
    assert!(ShapeSession::new(params(4), opts(0, 400), rng()).is_err());
    assert!(ShapeSession::new(params(4), opts(10, 0), rng()).is_err());
}

#[test]
fn starts_loading_with_nothing_to_draw() {
    let s = ShapeSession::new(params(4), SessionOpts::default(), scripted(&GOOD_DRAWS)).unwrap();
    assert!(s.is_loading());
    assert!(!s.is_ready());
    assert!(!s.is_failed());
    assert_eq!(s.tries(), 0);
    assert!(s.shape().is_none());
    assert!(s.contour().is_none());
    assert!(s.bounding_box().is_none());
    assert!(s.placement(Canvas::new(100, 100).unwrap()).is_none());
}

#[test]
fn accepts_a_clean_chain_in_one_step() {
    let mut s =
        ShapeSession::new(params(4), SessionOpts::default(), scripted(&GOOD_DRAWS)).unwrap();
    assert_eq!(s.step(), SessionStatus::Ready);
    assert!(s.is_ready());
    assert_eq!(s.tries(), 0);
    assert_eq!(s.attempts(), 1);
    assert!(s.last_rejection().is_none());

    let shape = s.shape().unwrap();
    assert_eq!(shape.len(), 4);
    assert_eq!(shape.circles()[0].radius, 75.0);
    assert!(s.contour().is_some());
    assert!(s.bounding_box().is_some());
}

#[test]
fn ready_session_ignores_further_steps() {
    let mut s =
        ShapeSession::new(params(4), SessionOpts::default(), scripted(&GOOD_DRAWS)).unwrap();
    s.step();
    let before = s.shape().cloned();
    assert_eq!(s.step(), SessionStatus::Ready);
    assert_eq!(s.attempts(), 1);
    assert_eq!(s.shape().cloned(), before);
}

#[test]
fn rejection_then_acceptance_resets_tries() {
    let mut draws = BAD_DRAWS.to_vec();
    draws.extend_from_slice(&GOOD_DRAWS);
    let mut s = ShapeSession::new(params(4), opts(10, 1), scripted(&draws)).unwrap();

    assert_eq!(s.step(), SessionStatus::Loading);
    assert_eq!(s.tries(), 1);
    assert_eq!(
        s.last_rejection(),
        Some(&AttemptError::PlacementExhausted {
            index: 2,
            attempts: 1
        })
    );
    assert!(s.shape().is_none());

    assert_eq!(s.step(), SessionStatus::Ready);
    assert_eq!(s.tries(), 0);
    assert_eq!(s.attempts(), 2);
    assert!(s.last_rejection().is_none());
}

#[test]
fn exhausted_budget_fails_after_max_tries() {
    let mut s = ShapeSession::new(params(4), opts(3, 1), scripted(&BAD_DRAWS)).unwrap();
    assert_eq!(s.step(), SessionStatus::Loading);
    assert_eq!(s.step(), SessionStatus::Loading);
    assert_eq!(s.step(), SessionStatus::Failed);
    assert!(s.is_failed());
    assert_eq!(s.tries(), 3);
    assert_eq!(s.step(), SessionStatus::Failed);
    assert_eq!(s.attempts(), 3);
    assert!(s.shape().is_none());
}

#[test]
fn degenerate_closure_counts_as_rejection() {
    // Three circles: the closing circle has no room left between two tangent circles.
    let mut s = ShapeSession::new(params(3), opts(2, 400), scripted(&GOOD_DRAWS[..3])).unwrap();
    assert_eq!(s.resolve(), SessionStatus::Failed);
    assert_eq!(
        s.last_rejection(),
        Some(&AttemptError::DegenerateCircle { index: 2 })
    );
}

#[test]
fn reset_restarts_and_keeps_the_stream() {
    let mut s = ShapeSession::new(params(4), opts(3, 1), scripted(&BAD_DRAWS)).unwrap();
    assert_eq!(s.resolve(), SessionStatus::Failed);

    s.reset(None).unwrap();
    assert!(s.is_loading());
    assert_eq!(s.tries(), 0);
    assert_eq!(s.attempts(), 0);
    assert!(s.last_rejection().is_none());
    assert_eq!(s.resolve(), SessionStatus::Failed);
}

#[test]
fn reset_with_invalid_params_leaves_state_alone() {
    let mut s =
        ShapeSession::new(params(4), SessionOpts::default(), scripted(&GOOD_DRAWS)).unwrap();
    s.resolve();
    assert!(s.reset(Some(params(4).with_radii(10.0, 5.0))).is_err());
    assert!(s.is_ready());
    assert_eq!(s.params().circle_count, 4);
}

#[test]
fn reset_with_new_params_applies_them() {
    let mut s =
        ShapeSession::new(params(4), SessionOpts::default(), SeededRandom::from_seed(3)).unwrap();
    s.reset(Some(params(7))).unwrap();
    assert_eq!(s.params().circle_count, 7);
    if s.resolve() == SessionStatus::Ready {
        assert_eq!(s.shape().unwrap().len(), 7);
    }
}

#[test]
fn reseed_swaps_the_stream() {
    let mut s = ShapeSession::new(params(4), opts(3, 1), scripted(&BAD_DRAWS)).unwrap();
    assert_eq!(s.resolve(), SessionStatus::Failed);
    s.reseed(scripted(&GOOD_DRAWS), None).unwrap();
    assert_eq!(s.resolve(), SessionStatus::Ready);
}

#[test]
fn toggling_keeps_chain_and_changes_contour() {
    let mut s =
        ShapeSession::new(params(4), SessionOpts::default(), scripted(&GOOD_DRAWS)).unwrap();
    s.resolve();
    let chain = s.shape().cloned().unwrap();
    let before = s.contour().unwrap();

    s.toggle_convention();
    assert_eq!(s.convention(), TraversalConvention::B);
    assert_eq!(s.shape(), Some(&chain));
    assert_ne!(s.contour().unwrap(), before);

    s.set_convention(TraversalConvention::A);
    assert_eq!(s.contour().unwrap(), before);
}

#[test]
fn initial_convention_comes_from_opts() {
    let o = SessionOpts {
        convention: TraversalConvention::B,
        ..SessionOpts::default()
    };
    let s = ShapeSession::new(params(4), o, SeededRandom::from_seed(0)).unwrap();
    assert_eq!(s.convention(), TraversalConvention::B);
}

#[test]
fn attempt_is_a_single_build_close_validate_pass() {
    let builder = ChainBuilder::new(params(4)).unwrap();
    let mut rng = scripted(&GOOD_DRAWS);
    let shape = attempt(&builder, &mut rng).unwrap();
    assert_eq!(shape.len(), 4);
    assert_eq!(rng.consumed(), 5);
}

#[test]
fn debug_output_names_the_session() {
    let s =
        ShapeSession::new(params(4), SessionOpts::default(), SeededRandom::from_seed(0)).unwrap();
    assert!(format!("{s:?}").starts_with("ShapeSession"));
}
