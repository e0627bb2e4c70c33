use super::*;

#[test]
fn everything_starts_hidden_at_mount() {
    let f = IntroTimeline::landing().sample(0.0);
    assert_eq!(f.header_y, -100.0);
    assert!(f.nav.iter().all(|n| n.opacity == Some(0.0)));
    assert_eq!(f.nav[0].translate_y, Some(-10.0));
    assert_eq!(f.heading.opacity, Some(0.0));
    assert_eq!(f.heading.translate_y, Some(20.0));
    assert_eq!(f.cta.translate_y, None);
    assert!(f.fractal_path_length.iter().all(|&l| l == 0.0));
    assert_eq!(f.wave_path_length.len(), 40);
}

#[test]
fn nav_items_stagger_by_a_tenth_of_a_second() {
    let t = IntroTimeline::landing();
    assert_eq!(t.nav.len(), NAV_ITEMS.len());
    // At 0.45s the first item is mid-fade and the last has not started.
    let f = t.sample(0.45);
    assert!(f.nav[0].opacity.unwrap() > 0.0);
    assert_eq!(f.nav[3].opacity, Some(0.0));
}

#[test]
fn hero_reveals_in_order() {
    let f = IntroTimeline::landing().sample(0.35);
    let heading = f.heading.opacity.unwrap();
    let sub = f.sub_heading.opacity.unwrap();
    let cta = f.cta.opacity.unwrap();
    assert!(heading > 0.0);
    assert_eq!(sub, 0.0);
    assert_eq!(cta, 0.0);
}

#[test]
fn tweens_finish_and_springs_settle() {
    let t = IntroTimeline::landing();
    assert!((t.tweens_end_s() - 2.78).abs() < 1e-9);

    let f = t.sample(10.0);
    assert!(f.header_y.abs() < 1e-6);
    assert!(f.nav.iter().all(|n| n.opacity == Some(1.0)));
    assert!(f.heading.translate_y.unwrap().abs() < 1e-6);
    assert!(f.fractal_path_length.iter().all(|&l| l == 1.0));
    assert!(f.wave_path_length.iter().all(|&l| l == 1.0));
}

#[test]
fn path_drawing_is_staggered() {
    let f = IntroTimeline::landing().sample(1.0);
    let lengths = &f.fractal_path_length;
    assert!(lengths.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn header_exit_slides_back_up() {
    let exit = IntroTimeline::landing().header_exit();
    assert_eq!(exit.sample(0.0), 0.0);
    assert!((exit.sample(5.0) + 100.0).abs() < 1e-6);
}

#[test]
fn delay_only_fades_use_the_default_curve() {
    // Heading starts at 0.2s; 0.35s is halfway through its 0.3s fade.
    let f = IntroTimeline::landing().sample(0.35);
    assert!((f.heading.opacity.unwrap() - 0.754_432_2).abs() < 1e-6);
}

#[test]
fn path_draws_ease_in_and_out() {
    let f = IntroTimeline::landing().sample(0.5);
    assert!((f.fractal_path_length[0] - 0.129_161_9).abs() < 1e-6);
    // Fractal 3 started 0.2s ago and wave bar 30 starts at 0.6s.
    assert!(f.fractal_path_length[3] < 0.03);
    assert_eq!(f.wave_path_length[30], 0.0);
}

#[test]
fn logo_turns_forever_at_constant_speed() {
    let t = IntroTimeline::landing();
    assert_eq!(t.sample(0.0).logo_rotate_deg, 0.0);
    assert!((t.sample(5.0).logo_rotate_deg - 90.0).abs() < 1e-9);
    assert!((t.sample(LOGO_TURN_SECS + 5.0).logo_rotate_deg - 90.0).abs() < 1e-9);
    assert!((t.sample(10.0).logo_rotate_deg - 180.0).abs() < 1e-9);
}

#[test]
fn discipline_cards_reveal_staggered_over_half_a_second() {
    let t = IntroTimeline::landing();
    assert_eq!(t.discipline_card_reveals.len(), DISCIPLINES.len());

    let card = &t.discipline_card_reveals[1];
    let before = card.sample(0.2);
    assert_eq!(before.opacity, Some(0.0));
    assert_eq!(before.translate_y, Some(30.0));

    // 0.45s is halfway through card 1's 0.5s reveal.
    let mid = card.sample(0.45);
    assert!((mid.opacity.unwrap() - 0.5).abs() < 1e-6);
    assert!((mid.translate_y.unwrap() - 15.0).abs() < 1e-5);

    let done = card.sample(0.7);
    assert_eq!(done.opacity, Some(1.0));
    assert_eq!(done.translate_y, Some(0.0));
}

#[test]
fn heading_and_footer_reveals_are_plain_fades() {
    let t = IntroTimeline::landing();
    for reveal in [&t.disciplines_heading_reveal, &t.footer_reveal] {
        assert!(reveal.y.is_none());
        assert_eq!(reveal.sample(0.0).opacity, Some(0.0));
        assert!((reveal.sample(0.15).opacity.unwrap() - 0.754_432_2).abs() < 1e-6);
        assert_eq!(reveal.sample(0.3).opacity, Some(1.0));
        assert_eq!(reveal.sample(0.3).translate_y, None);
    }
}

#[test]
fn reveals_do_not_extend_the_mount_timeline() {
    let t = IntroTimeline::landing();
    assert!((t.tweens_end_s() - 2.78).abs() < 1e-9);
}
