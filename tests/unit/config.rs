use super::*;

#[test]
fn default_config_is_valid() {
    MotionConfig::default().validate().unwrap();
}

#[test]
fn json_round_trips_defaults() {
    let json = serde_json::to_string(&MotionConfig::default()).unwrap();
    let back = MotionConfig::from_json(&json).unwrap();
    assert_eq!(back, MotionConfig::default());
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg = MotionConfig::from_json(
        r#"{ "header_hide_at": 0.9, "slide_two_offset": { "inputs": [0.1, 0.6], "outputs": [200, 0] } }"#,
    )
    .unwrap();
    assert_eq!(cfg.header_hide_at, 0.9);
    assert_eq!(cfg.slide_two_offset.sample(0.1), 200.0);
    assert_eq!(cfg.slide_three_offset, MotionConfig::default().slide_three_offset);
}

#[test]
fn rejects_out_of_range_opacity() {
    let err = MotionConfig::from_json(
        r#"{ "slide_one_opacity": { "inputs": [0, 0.3], "outputs": [1.5, 0] } }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("slide_one_opacity"));
}

#[test]
fn rejects_bad_threshold_and_blur() {
    assert!(MotionConfig::from_json(r#"{ "header_hide_at": 1.5 }"#).is_err());
    assert!(
        MotionConfig::from_json(r#"{ "header_blur": { "inputs": [0, 0.1], "outputs": [0, -4] } }"#)
            .is_err()
    );
}

#[test]
fn malformed_ramp_is_a_serde_error() {
    let err = MotionConfig::from_json(r#"{ "header_blur": { "inputs": [0], "outputs": [0] } }"#)
        .unwrap_err();
    assert!(matches!(err, ParallaxError::Serde(_)));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = MotionConfig::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, ParallaxError::Config(_)));
}

#[test]
fn render_config_defaults_to_initial_phase() {
    let cfg = RenderConfig::default();
    assert_eq!(cfg.phase, RenderPhase::Initial);
    assert!(!cfg.phase.is_hydrated());
    assert!(cfg.hydrated().with_seed(9).phase.is_hydrated());
}

#[test]
fn render_phase_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&RenderPhase::Hydrated).unwrap(),
        "\"hydrated\""
    );
}
