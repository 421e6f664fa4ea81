use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn fade_out_midpoint_of_second_segment() {
    let c = Curve::from_pairs(&[(0.0, 1.0), (0.3, 1.0), (0.5, 0.0)]).unwrap();
    assert!(approx(c.evaluate(0.4), 0.5));
    assert_eq!(c.evaluate(0.1), 1.0);
}

#[test]
fn clamps_above_last_breakpoint() {
    let c = Curve::from_pairs(&[(0.3, 0.0), (0.5, 1.0), (0.8, 1.0)]).unwrap();
    assert_eq!(c.evaluate(0.9), 1.0);
    assert_eq!(c.evaluate(42.0), 1.0);
}

#[test]
fn clamps_below_first_breakpoint() {
    let c = Curve::from_pairs(&[(0.3, 0.0), (0.5, 1.0), (0.8, 1.0)]).unwrap();
    assert_eq!(c.evaluate(0.1), 0.0);
    assert_eq!(c.evaluate(-5.0), 0.0);
    assert_eq!(c.evaluate(f64::NEG_INFINITY), 0.0);
}

#[test]
fn endpoints_are_exact() {
    let c = Curve::from_pairs(&[(0.1, 3.0), (0.45, -2.5), (0.9, 7.25)]).unwrap();
    assert_eq!(c.evaluate(0.1), 3.0);
    assert_eq!(c.evaluate(0.45), -2.5);
    assert_eq!(c.evaluate(0.9), 7.25);
}

#[test]
fn nan_progress_maps_to_first_value() {
    let c = Curve::linear(0.8, 1.1).unwrap();
    assert_eq!(c.evaluate(f64::NAN), 0.8);
}

#[test]
fn single_breakpoint_is_rejected() {
    let err = Curve::from_pairs(&[(0.5, 1.0)]).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("at least 2"));
}

#[test]
fn empty_curve_is_rejected() {
    assert!(Curve::new(Vec::new()).unwrap_err().is_config());
}

#[test]
fn non_ascending_progress_is_rejected() {
    assert!(
        Curve::from_pairs(&[(0.0, 0.0), (0.5, 1.0), (0.4, 0.0)])
            .unwrap_err()
            .is_config()
    );
    // Duplicate progress would make a zero-width segment.
    assert!(
        Curve::from_pairs(&[(0.0, 0.0), (0.5, 1.0), (0.5, 0.0)])
            .unwrap_err()
            .is_config()
    );
}

#[test]
fn non_finite_breakpoints_are_rejected() {
    assert!(Curve::from_pairs(&[(0.0, 0.0), (f64::NAN, 1.0)]).is_err());
    assert!(Curve::from_pairs(&[(0.0, f64::INFINITY), (1.0, 1.0)]).is_err());
}

#[test]
fn constant_curve_is_flat() {
    let c = Curve::constant(0.42).unwrap();
    for p in [-1.0, 0.0, 0.3, 1.0, 2.0] {
        assert_eq!(c.evaluate(p), 0.42);
    }

    let c = Curve::constant(0.1).unwrap();
    for i in 0..=1000 {
        let p = f64::from(i) / 1000.0;
        assert_eq!(c.evaluate(p), 0.1, "at {p}");
    }
}

#[test]
fn flat_segment_inside_a_curve_is_flat() {
    let c = Curve::from_pairs(&[(0.0, 0.8), (0.5, 0.8), (1.0, 1.1)]).unwrap();
    for i in 0..=500 {
        let p = f64::from(i) / 1000.0;
        assert_eq!(c.evaluate(p), 0.8, "at {p}");
    }
    assert_eq!(c.evaluate(0.11), 0.8);
    assert_eq!(c.evaluate(1.0), 1.1);
}

#[test]
fn eased_segment_keeps_endpoints_and_bends_middle() {
    let c = Curve::linear(0.0, 10.0)
        .unwrap()
        .with_ease(Ease::EaseIn)
        .unwrap();
    assert_eq!(c.evaluate(0.0), 0.0);
    assert_eq!(c.evaluate(1.0), 10.0);
    assert!(c.evaluate(0.5) < 5.0);
}

#[test]
fn segment_ease_count_must_match() {
    let c = Curve::from_pairs(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]).unwrap();
    assert!(c.clone().with_segment_eases(vec![Ease::EaseOut]).is_err());
    let c = c
        .with_segment_eases(vec![Ease::EaseOut, Ease::Linear])
        .unwrap();
    assert!(c.evaluate(0.25) > 0.5);
    assert!(approx(c.evaluate(0.75), 0.5));
}

#[test]
fn domain_reports_first_and_last_progress() {
    let c = Curve::from_pairs(&[(0.3, 0.0), (0.5, 1.0), (0.8, 1.0)]).unwrap();
    assert_eq!(c.domain(), (0.3, 0.8));
}

#[test]
fn sample_uses_clamped_progress() {
    let c = Curve::linear(100.0, -100.0).unwrap();
    assert_eq!(c.sample(Progress::new(0.5)), 0.0);
    assert_eq!(c.sample(Progress::new(3.0)), -100.0);
}

#[test]
fn free_function_matches_method() {
    let c = Curve::from_pairs(&[(0.0, 0.8), (0.5, 1.0), (1.0, 1.1)]).unwrap();
    for p in [0.0, 0.2, 0.5, 0.77, 1.0] {
        assert_eq!(evaluate(p, &c), c.evaluate(p));
    }
}

#[test]
fn deserializes_pair_list_and_eased_form() {
    let c: Curve = serde_json::from_str("[[0, 1], [0.3, 1], [0.5, 0]]").unwrap();
    assert_eq!(c.points().len(), 3);

    let c: Curve =
        serde_json::from_str(r#"{"points": [[0, 0], [1, 1]], "ease": "easeOut"}"#).unwrap();
    assert_eq!(c.eases(), &[Ease::EaseOut]);

    let c: Curve = serde_json::from_str(
        r#"{"points": [[0, 0], [0.5, 1], [1, 0]], "ease": ["easeIn", "linear"]}"#,
    )
    .unwrap();
    assert_eq!(c.eases(), &[Ease::EaseIn, Ease::Linear]);
}

#[test]
fn deserialize_rejects_malformed_curve() {
    let err = serde_json::from_str::<Curve>("[[0.5, 1]]").unwrap_err();
    assert!(err.to_string().contains("at least 2"), "{err}");
}

#[test]
fn serializes_back_to_compact_form() {
    let c = Curve::from_pairs(&[(0.0, 1.0), (0.5, 0.0)]).unwrap();
    let s = serde_json::to_string(&c).unwrap();
    assert_eq!(s, "[[0.0,1.0],[0.5,0.0]]");

    let eased = c.with_ease(Ease::EaseInOut).unwrap();
    let back: Curve = serde_json::from_str(&serde_json::to_string(&eased).unwrap()).unwrap();
    assert_eq!(back, eased);
}
