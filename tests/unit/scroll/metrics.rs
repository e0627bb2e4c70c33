use super::*;

fn landing(scroll_y: f64) -> ScrollMetrics {
    // 300vh container at the top of a 1000px viewport, followed by a 400px footer.
    ScrollMetrics {
        scroll_y,
        container_top: 0.0,
        container_height: 3000.0,
        viewport_height: 1000.0,
        document_height: 3400.0,
    }
}

#[test]
fn container_progress_spans_scrollable_range() {
    assert_eq!(landing(0.0).progress(), Progress::START);
    assert_eq!(landing(1000.0).progress().get(), 0.5);
    assert_eq!(landing(2000.0).progress(), Progress::END);
}

#[test]
fn container_progress_clamps_past_the_end() {
    // Scrolling into the footer keeps the container pinned at its end.
    assert_eq!(landing(2400.0).progress(), Progress::END);
}

#[test]
fn page_progress_includes_footer() {
    assert_eq!(landing(1200.0).page_progress().get(), 0.5);
    assert_eq!(landing(2400.0).page_progress(), Progress::END);
}

#[test]
fn offset_container_starts_at_its_top() {
    let m = ScrollMetrics {
        container_top: 500.0,
        ..landing(250.0)
    };
    assert_eq!(m.progress(), Progress::START);
    assert_eq!(ScrollMetrics { scroll_y: 1500.0, ..m }.progress().get(), 0.5);
}

#[test]
fn zero_range_is_a_step() {
    let m = ScrollMetrics {
        scroll_y: 0.0,
        container_top: 100.0,
        container_height: 800.0,
        viewport_height: 1000.0,
        document_height: 800.0,
    };
    assert_eq!(m.progress(), Progress::START);
    assert_eq!(ScrollMetrics { scroll_y: 100.0, ..m }.progress(), Progress::END);
    assert_eq!(m.page_progress(), Progress::END);
}

#[test]
fn non_finite_geometry_normalizes() {
    let m = ScrollMetrics {
        scroll_y: f64::NAN,
        ..landing(0.0)
    };
    assert_eq!(m.progress(), Progress::START);
}
