use super::*;
use crate::foundation::core::center_distance;
use crate::random::source::{SeededRandom, SequenceRandom};
use std::f64::consts::FRAC_PI_2;

fn params(n: usize) -> GenerationParams {
    GenerationParams::new(n, 50.0, 100.0).unwrap()
}

#[test]
fn places_tangent_circles_from_scripted_draws() {
    let builder = ChainBuilder::new(params(4)).unwrap();
    let mut rng = SequenceRandom::new(vec![0.5, 0.0, 0.2, 0.25, 0.4]).unwrap();
    let open = builder.build(&mut rng).unwrap();

    assert_eq!(rng.consumed(), 5);
    assert_eq!(open.circles().len(), 3);
    assert_eq!(open.angles(), &[0.0, FRAC_PI_2]);

    let c = open.circles();
    assert_eq!(c[0], Circle::new(Point::ORIGIN, 75.0));
    assert_eq!(c[1], Circle::new((135.0, 0.0), 60.0));
    assert_eq!(c[2].radius, 70.0);
    assert!((c[2].center.x - 135.0).abs() < 1e-9);
    assert!((c[2].center.y - 130.0).abs() < 1e-9);
}

#[test]
fn overlapping_candidates_are_redrawn() {
    let builder = ChainBuilder::new(params(4)).unwrap();
    // The second interior candidate first lands back on top of circle 0 (angle pi).
    let mut rng = SequenceRandom::new(vec![0.5, 0.0, 0.2, 0.5, 0.2, 0.25, 0.4]).unwrap();
    let open = builder.build(&mut rng).unwrap();
    assert_eq!(rng.consumed(), 7);
    assert_eq!(open.angles()[1], FRAC_PI_2);
}

#[test]
fn exhausted_placement_abandons_the_chain() {
    let builder = ChainBuilder::new(params(4))
        .unwrap()
        .with_placement_attempts(1);
    let mut rng = SequenceRandom::new(vec![0.5, 0.0, 0.2, 0.5, 0.2]).unwrap();
    let err = builder.build(&mut rng).unwrap_err();
    assert_eq!(
        err,
        AttemptError::PlacementExhausted {
            index: 2,
            attempts: 1
        }
    );
}

#[test]
fn rejects_invalid_params() {
    assert!(
        ChainBuilder::new(GenerationParams::default().with_circle_count(2)).is_err()
    );
}

#[test]
fn seeded_chains_are_tangent_and_disjoint() {
    let builder = ChainBuilder::new(params(16)).unwrap();
    let mut built = 0;
    for seed in 0..40u64 {
        let mut rng = SeededRandom::from_seed(seed);
        let Ok(open) = builder.build(&mut rng) else {
            continue;
        };
        built += 1;
        let c = open.circles();
        assert_eq!(c.len(), 15);
        assert_eq!(open.angles().len(), 14);
        for pair in c.windows(2) {
            let want = pair[0].radius + pair[1].radius;
            assert!((center_distance(&pair[0], &pair[1]) - want).abs() <= 1e-9 * want);
        }
        for (i, a) in c.iter().enumerate() {
            assert!(a.radius >= 50.0 && a.radius < 100.0);
            assert_eq!(a.radius, a.radius.trunc());
            for b in &c[i + 1..] {
                assert!(!overlaps(a, b));
            }
        }
    }
    assert!(built > 0);
}

#[test]
fn closing_appends_circle_and_bearing_twice() {
    let builder = ChainBuilder::new(params(4)).unwrap();
    let mut rng = SequenceRandom::new(vec![0.5, 0.0, 0.2, 0.25, 0.4]).unwrap();
    let open = builder.build(&mut rng).unwrap();
    let last = open.circles()[2];
    let shape = open.close();

    assert_eq!(shape.len(), 4);
    assert_eq!(shape.angles().len(), 4);
    let a = shape.angles();
    assert_eq!(a[2], a[3]);

    let closing = shape.circles()[3];
    let want = closing.radius + last.radius;
    assert!((center_distance(&closing, &last) - want).abs() < 1e-9);
}
