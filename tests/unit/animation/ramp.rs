use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn holds_end_values_outside_breakpoints() {
    let ramp = Ramp::linear(0.2, 0.7, 300.0, 0.0).unwrap();
    assert_eq!(ramp.sample(-1.0), 300.0);
    assert_eq!(ramp.sample(0.1), 300.0);
    assert_eq!(ramp.sample(0.2), 300.0);
    assert_eq!(ramp.sample(0.7), 0.0);
    assert_eq!(ramp.sample(0.9), 0.0);
    assert_eq!(ramp.sample(f64::INFINITY), 0.0);
}

#[test]
fn interpolates_linearly_inside_segment() {
    let ramp = Ramp::linear(0.0, 0.3, 1.0, 0.0).unwrap();
    assert!(approx(ramp.sample(0.15), 0.5));
    assert!(approx(ramp.sample(0.075), 0.75));
}

#[test]
fn nan_samples_the_first_breakpoint() {
    let ramp = Ramp::linear(0.5, 1.0, 500.0, 0.0).unwrap();
    assert_eq!(ramp.sample(f64::NAN), 500.0);
}

#[test]
fn multi_segment_ramp_picks_the_right_pair() {
    let ramp = Ramp::new(vec![0.0, 0.5, 1.0], vec![0.0, 100.0, 0.0]).unwrap();
    assert!(approx(ramp.sample(0.25), 50.0));
    assert_eq!(ramp.sample(0.5), 100.0);
    assert!(approx(ramp.sample(0.75), 50.0));
}

#[test]
fn zero_width_segment_steps() {
    let ramp = Ramp::new(vec![0.0, 0.5, 0.5, 1.0], vec![0.0, 1.0, 5.0, 5.0]).unwrap();
    assert!(approx(ramp.sample(0.25), 0.5));
    assert_eq!(ramp.sample(0.5), 5.0);
    assert_eq!(ramp.sample(0.75), 5.0);
}

#[test]
fn eased_sampling_keeps_endpoints() {
    let ramp = Ramp::linear(0.0, 1.0, 10.0, 20.0).unwrap();
    assert_eq!(ramp.sample_eased(0.0, Ease::EaseInOut), 10.0);
    assert_eq!(ramp.sample_eased(1.0, Ease::EaseInOut), 20.0);
    assert!(ramp.sample_eased(0.25, Ease::EaseIn) < ramp.sample(0.25));
}

#[test]
fn rejects_invalid_breakpoints() {
    assert!(Ramp::new(vec![0.0], vec![1.0]).is_err());
    assert!(Ramp::new(vec![0.0, 1.0], vec![1.0]).is_err());
    assert!(Ramp::linear(1.0, 0.0, 0.0, 1.0).is_err());
    assert!(Ramp::linear(0.0, f64::NAN, 0.0, 1.0).is_err());
}

#[test]
fn deserialization_validates() {
    let ok: Ramp = serde_json::from_str(r#"{"inputs":[0,1],"outputs":[0,-150]}"#).unwrap();
    assert_eq!(ok.sample(1.0), -150.0);

    let bad = serde_json::from_str::<Ramp>(r#"{"inputs":[1,0],"outputs":[0,1]}"#);
    assert!(bad.is_err());
}

#[test]
fn output_bounds_span_all_values() {
    let ramp = Ramp::new(vec![0.0, 0.5, 1.0], vec![0.02, 0.1, 0.02]).unwrap();
    assert_eq!(ramp.output_bounds(), (0.02, 0.1));
}

#[test]
fn vec2_lerp_is_componentwise() {
    let a = kurbo::Vec2::new(0.0, 0.0);
    let b = kurbo::Vec2::new(50.0, 100.0);
    assert_eq!(<kurbo::Vec2 as Lerp>::lerp(&a, &b, 0.5), kurbo::Vec2::new(25.0, 50.0));
}
