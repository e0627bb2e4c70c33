use super::*;

#[test]
fn rejects_degenerate_sizes() {
    let m = ScrollProgressMapper::default();
    assert!(render_chart(&m, 0, 10).is_err());
    assert!(render_chart(&m, 10, 1).is_err());
}

#[test]
fn chart_has_requested_dimensions() {
    let m = ScrollProgressMapper::default();
    let img = render_chart(&m, 101, 41).unwrap();
    assert_eq!(img.dimensions(), (101, 41));
}

#[test]
fn curves_land_where_expected() {
    let m = ScrollProgressMapper::default();
    let img = render_chart(&m, 101, 41).unwrap();

    // Slide three is fully opaque at the right edge: top row.
    assert_eq!(
        *img.get_pixel(100, 0),
        channel_color(ScrollChannel::SlideThreeOpacity)
    );
    // Several channels start at their maximum on the left edge; the last one drawn wins.
    assert_eq!(
        *img.get_pixel(0, 0),
        channel_color(ScrollChannel::SlideThreeOffset)
    );
    // Middleground travels to -150 (normalized -1): bottom row at the right edge.
    assert_eq!(
        *img.get_pixel(100, 40),
        channel_color(ScrollChannel::MiddlegroundY)
    );
}

#[test]
fn threshold_marker_is_drawn() {
    let m = ScrollProgressMapper::default();
    let img = render_chart(&m, 101, 41).unwrap();
    // Column 95 (progress 0.95), a row no curve reaches.
    assert_eq!(*img.get_pixel(95, 30), THRESHOLD);
}

#[test]
fn save_chart_writes_png() {
    let dir = std::path::PathBuf::from("target").join("chart_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("channels.png");
    let _ = std::fs::remove_file(&out);

    save_chart(&ScrollProgressMapper::default(), 64, 32, &out).unwrap();
    assert!(out.exists());
}
