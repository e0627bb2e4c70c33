use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ParallaxError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ParallaxError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        ParallaxError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ParallaxError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: ParallaxError = serde_json::from_str::<f64>("nope").unwrap_err().into();
    assert!(matches!(err, ParallaxError::Serde(_)));
}
