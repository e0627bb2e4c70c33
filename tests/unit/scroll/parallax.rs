use super::*;

#[test]
fn offset_scales_with_speed_and_progress() {
    assert_eq!(layers::GRID.offset_y(0.0), 0.0);
    assert!((layers::GRID.offset_y(1.0) + 20.0).abs() < 1e-9);
    assert!((layers::FLOATING_ICONS.offset_y(0.5) + 60.0).abs() < 1e-9);
}

#[test]
fn offset_clamps_progress() {
    assert_eq!(
        layers::HERO_CTA.offset_y(3.0),
        layers::HERO_CTA.offset_y(1.0)
    );
    assert_eq!(layers::HERO_CTA.offset_y(f64::NAN), 0.0);
}

#[test]
fn faster_layers_travel_further() {
    let a = layers::HERO_HEADING.offset_y(0.8);
    let b = layers::HERO_SUB_HEADING.offset_y(0.8);
    assert!(b < a);
}

#[test]
fn discipline_cards_step_up_in_speed() {
    let speeds: Vec<f64> = (0..3).map(|i| layers::discipline_card(i).speed).collect();
    assert_eq!(speeds[0], 0.5);
    assert!((speeds[1] - 0.6).abs() < 1e-12);
    assert!((speeds[2] - 0.7).abs() < 1e-12);
}

#[test]
fn non_finite_speed_pins_the_layer() {
    assert_eq!(ParallaxLayer::new(f64::NAN).offset_y(0.5), 0.0);
}
