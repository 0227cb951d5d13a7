//! Endpoint, continuity and determinism checks across every curve
//!
//! These tests verify that:
//! - Every curve starts at 0.0 and ends at 1.0
//! - The split curves hand off at exactly 0.5
//! - Overshooting curves leave [0, 1] while the rest stay inside it
//! - Repeated evaluation is bit-identical

use penner_easing::*;

const EPS: f64 = 1e-9;

fn samples() -> impl Iterator<Item = f64> {
    (0..=100).map(|i| i as f64 / 100.0)
}

#[test]
fn test_every_curve_hits_both_endpoints() {
    for easing in Easing::all() {
        assert!(
            easing.apply(0.0).abs() < EPS,
            "{} should start at 0.0, got {}",
            easing,
            easing.apply(0.0)
        );
        assert!(
            (easing.apply(1.0) - 1.0).abs() < EPS,
            "{} should end at 1.0, got {}",
            easing,
            easing.apply(1.0)
        );
    }
}

#[test]
fn test_exact_endpoints_for_special_cased_curves() {
    assert_eq!(in_expo(0.0), 0.0);
    assert_eq!(out_expo(1.0), 1.0);
    assert_eq!(in_elastic(0.0), 0.0);
    assert_eq!(in_elastic(1.0), 1.0);
    assert_eq!(out_elastic(0.0), 0.0);
    assert_eq!(out_elastic(1.0), 1.0);
    assert_eq!(in_out_elastic(0.0), 0.0);
    assert_eq!(in_out_elastic(1.0), 1.0);
    assert_eq!(out_bounce(0.0), 0.0);
    assert_eq!(out_bounce(1.0), 1.0);
}

#[test]
fn test_split_curves_are_continuous_at_midpoint() {
    let pairs: [(&str, fn(f64) -> f64, fn(f64) -> f64); 6] = [
        ("quad", in_quad, in_out_quad),
        ("cubic", in_cubic, in_out_cubic),
        ("quart", in_quart, in_out_quart),
        ("quint", in_quint, in_out_quint),
        ("circ", in_circ, in_out_circ),
        ("back", in_back, in_out_back),
    ];

    for (name, ease_in, ease_in_out) in pairs {
        let handoff = ease_in(1.0) * 0.5;
        assert!(
            (ease_in_out(0.5) - handoff).abs() < EPS,
            "in-out {} should hand off at {}",
            name,
            handoff
        );
        // Circular arcs are vertical at the split, so the neighborhood is loose
        assert!((ease_in_out(0.5 - 1e-7) - handoff).abs() < 1e-3);
        assert!((ease_in_out(0.5 + 1e-7) - handoff).abs() < 1e-3);
    }
}

#[test]
fn test_bounce_identities() {
    for t in samples() {
        assert_eq!(in_bounce(t), 1.0 - out_bounce(1.0 - t));
    }
    assert_eq!(in_out_bounce(0.25), in_bounce(0.5) * 0.5);
    assert_eq!(in_out_bounce(0.75), out_bounce(0.5) * 0.5 + 0.5);
}

#[test]
fn test_out_bounce_rises_after_each_floor() {
    let segments = [
        (0.0, 1.0 / 2.75),
        (1.5 / 2.75, 2.0 / 2.75),
        (2.25 / 2.75, 2.5 / 2.75),
        (2.625 / 2.75, 1.0),
    ];

    for (start, end) in segments {
        let mut previous = out_bounce(start);
        for i in 1..=20 {
            let t = start + (end - start) * i as f64 / 20.0;
            let t = t.min(end - 1e-12);
            let value = out_bounce(t);
            assert!(
                value >= previous,
                "out_bounce dipped between {start} and {end} at t={t}"
            );
            previous = value;
        }
    }
}

#[test]
fn test_concrete_values() {
    assert_eq!(in_quad(0.5), 0.25);
    assert_eq!(out_quad(0.5), 0.75);
    assert_eq!(in_cubic(0.5), 0.125);
    assert_eq!(out_circ(1.0), 1.0);
    assert_eq!(in_back(0.5), 0.25 * (2.70158 * 0.5 - 1.70158));
}

#[test]
fn test_overshoot_is_limited_to_back_and_elastic() {
    for easing in Easing::all() {
        let escapes = samples()
            .map(|t| easing.apply(t))
            .any(|v| !(-EPS..=1.0 + EPS).contains(&v));
        assert_eq!(
            escapes,
            easing.is_overshooting(),
            "{} range escape does not match is_overshooting()",
            easing
        );
    }
}

#[test]
fn test_evaluation_is_deterministic() {
    for easing in Easing::all() {
        for t in samples() {
            assert_eq!(easing.apply(t).to_bits(), easing.apply(t).to_bits());
        }
    }
    assert_eq!(
        in_out_elastic(0.37).to_bits(),
        in_out_elastic_with(0.37, DEFAULT_AMPLITUDE, DEFAULT_IN_OUT_PERIOD).to_bits()
    );
}

#[test]
fn test_easings_are_shareable_across_threads() {
    let handles: Vec<_> = Easing::all()
        .iter()
        .copied()
        .map(|easing| std::thread::spawn(move || easing.apply(0.5)))
        .collect();

    for (handle, easing) in handles.into_iter().zip(Easing::all()) {
        let value = handle.join().unwrap();
        assert_eq!(value.to_bits(), easing.apply(0.5).to_bits());
    }
}
