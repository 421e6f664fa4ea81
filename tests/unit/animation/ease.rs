use super::*;

const NAMED: [Ease; 4] = [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut];

#[test]
fn endpoints_are_stable() {
    for ease in NAMED {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in NAMED {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn ease_in_lags_and_ease_out_leads() {
    assert!(Ease::EaseIn.apply(0.5) < 0.5);
    assert!(Ease::EaseOut.apply(0.5) > 0.5);
}

#[test]
fn ease_in_out_is_symmetric() {
    let v = Ease::EaseInOut.apply(0.5);
    assert!((v - 0.5).abs() < 1e-6, "{v}");
    let a = Ease::EaseInOut.apply(0.2);
    let b = Ease::EaseInOut.apply(0.8);
    assert!((a + b - 1.0).abs() < 1e-6);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::EaseOut.apply(-3.0), 0.0);
    assert_eq!(Ease::EaseOut.apply(7.0), 1.0);
}

#[test]
fn linear_bezier_is_identity() {
    let ease = Ease::CubicBezier {
        x1: 0.3,
        y1: 0.3,
        x2: 0.7,
        y2: 0.7,
    };
    assert_eq!(ease.apply(0.37), 0.37);
}

#[test]
fn validate_rejects_out_of_range_x() {
    let bad = Ease::CubicBezier {
        x1: -0.1,
        y1: 0.0,
        x2: 0.5,
        y2: 1.0,
    };
    assert!(bad.validate().unwrap_err().is_config());

    let overshoot = Ease::CubicBezier {
        x1: 0.3,
        y1: -0.5,
        x2: 0.7,
        y2: 1.5,
    };
    assert!(overshoot.validate().is_ok());
}

#[test]
fn deserializes_camel_case_names() {
    let e: Ease = serde_json::from_str("\"easeInOut\"").unwrap();
    assert_eq!(e, Ease::EaseInOut);
    let b: Ease =
        serde_json::from_str(r#"{"cubicBezier":{"x1":0.1,"y1":0.2,"x2":0.3,"y2":0.4}}"#).unwrap();
    assert!(matches!(b, Ease::CubicBezier { .. }));
}
