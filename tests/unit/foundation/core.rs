use super::*;

#[test]
fn progress_clamps_out_of_range_values() {
    assert_eq!(Progress::new(-0.5).get(), 0.0);
    assert_eq!(Progress::new(0.25).get(), 0.25);
    assert_eq!(Progress::new(1.5).get(), 1.0);
}

#[test]
fn progress_normalizes_non_finite_values() {
    assert_eq!(Progress::new(f64::NAN), Progress::START);
    assert_eq!(Progress::new(f64::INFINITY), Progress::END);
    assert_eq!(Progress::new(f64::NEG_INFINITY), Progress::START);
}

#[test]
fn progress_deserializes_through_clamp() {
    let p: Progress = serde_json::from_str("2.0").unwrap();
    assert_eq!(p, Progress::END);
    assert_eq!(serde_json::to_string(&Progress::new(0.5)).unwrap(), "0.5");
}

#[test]
fn sweep_covers_both_ends() {
    let samples: Vec<f64> = Progress::sweep(4).map(Progress::get).collect();
    assert_eq!(samples, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

    // Zero steps still yields both ends.
    assert_eq!(Progress::sweep(0).count(), 2);
}
