use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn crossfade_defs() -> ChannelDefs {
    ChannelDefs::new()
        .with_pairs(Channel::OpacityA, &[(0.0, 1.0), (0.5, 0.0)])
        .unwrap()
        .with_pairs(Channel::OpacityB, &[(0.0, 0.0), (0.5, 1.0)])
        .unwrap()
}

#[test]
fn evaluate_set_is_complementary_crossfade() {
    let out = evaluate_set(0.4, &crossfade_defs());
    assert_eq!(out.len(), 2);
    assert!(approx(out.get(Channel::OpacityA).unwrap(), 0.2));
    assert!(approx(out.get(Channel::OpacityB).unwrap(), 0.8));
    assert_eq!(out.get(Channel::Scale), None);
}

#[test]
fn method_and_free_function_agree() {
    let defs = crossfade_defs();
    assert_eq!(defs.evaluate(0.13), evaluate_set(0.13, &defs));
    assert_eq!(
        sample_set(Progress::new(0.13), &defs),
        evaluate_set(0.13, &defs)
    );
}

#[test]
fn malformed_channel_reports_its_name() {
    let err = ChannelDefs::new()
        .with_pairs(Channel::Scale, &[(0.5, 1.0)])
        .unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("scale"), "{err}");
}

#[test]
fn insert_replaces_existing_channel() {
    let mut defs = crossfade_defs();
    let prev = defs.insert(Channel::OpacityA, Curve::constant(0.5).unwrap());
    assert!(prev.is_some());
    assert_eq!(defs.len(), 2);
    assert_eq!(defs.evaluate(0.9).get(Channel::OpacityA), Some(0.5));
}

#[test]
fn get_or_rest_falls_back_per_channel() {
    let out = OutputChannelSet::default();
    assert!(out.is_empty());
    assert_eq!(out.get_or_rest(Channel::OpacityA), 1.0);
    assert_eq!(out.get_or_rest(Channel::OpacityB), 0.0);
    assert_eq!(out.get_or_rest(Channel::Scale), 1.0);
    assert_eq!(out.get_or_rest(Channel::TranslateY), 0.0);
}

#[test]
fn channel_names_round_trip_through_from_str() {
    for c in Channel::ALL {
        assert_eq!(c.name().parse::<Channel>().unwrap(), c);
    }
    assert_eq!("translateY".parse::<Channel>().unwrap(), Channel::TranslateY);
    assert!("rotate".parse::<Channel>().unwrap_err().is_config());
}

#[test]
fn deserializes_map_with_camel_case_alias() {
    let defs: ChannelDefs = serde_json::from_str(
        r#"{"opacity_a": [[0, 1], [0.5, 0]], "translateY": [[0, 100], [1, -100]]}"#,
    )
    .unwrap();
    assert_eq!(defs.len(), 2);
    let out = defs.evaluate(0.5);
    assert_eq!(out.get(Channel::OpacityA), Some(0.0));
    assert_eq!(out.get(Channel::TranslateY), Some(0.0));
}

#[test]
fn duplicate_channel_under_alias_is_rejected() {
    let err = serde_json::from_str::<ChannelDefs>(
        r#"{"translate_y": [[0, 100], [1, -100]], "translateY": [[0, 5], [1, 5]]}"#,
    )
    .unwrap_err();
    assert!(
        err.to_string().contains("duplicate channel 'translate_y'"),
        "{err}"
    );
}

#[test]
fn duplicate_channel_key_is_rejected() {
    let err = serde_json::from_str::<ChannelDefs>(
        r#"{"scale": [[0, 1], [1, 2]], "scale": [[0, 1], [1, 3]]}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("duplicate channel 'scale'"), "{err}");
}

#[test]
fn serialized_defs_load_back() {
    let defs = crossfade_defs();
    let json = serde_json::to_string(&defs).unwrap();
    assert_eq!(serde_json::from_str::<ChannelDefs>(&json).unwrap(), defs);
}

#[test]
fn output_serializes_as_flat_map() {
    let out = crossfade_defs().evaluate(0.0);
    let v = serde_json::to_value(&out).unwrap();
    assert_eq!(v["opacity_a"], 1.0);
    assert_eq!(v["opacity_b"], 0.0);
}

#[test]
fn iter_is_key_ordered() {
    let defs: ChannelDefs = [
        (Channel::Scale, Curve::constant(1.0).unwrap()),
        (Channel::OpacityA, Curve::constant(1.0).unwrap()),
    ]
    .into_iter()
    .collect();
    let keys: Vec<_> = defs.iter().map(|(c, _)| c).collect();
    assert_eq!(keys, vec![Channel::OpacityA, Channel::Scale]);
}

#[test]
fn table_covers_both_ends() {
    let rows = crossfade_defs().table(4).unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].0, 0.0);
    assert_eq!(rows[4].0, 1.0);
    assert_eq!(rows[0].1.get(Channel::OpacityA), Some(1.0));
    assert_eq!(rows[4].1.get(Channel::OpacityB), Some(1.0));
}

#[test]
fn zero_step_table_is_a_validation_error() {
    let err = crossfade_defs().table(0).unwrap_err();
    assert!(matches!(err, MorphError::Validation(_)), "{err:?}");
    assert!(!err.is_config());
}
