use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CrosstileError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CrosstileError::surface("x")
            .to_string()
            .contains("surface error:")
    );
    assert!(
        CrosstileError::engine("x")
            .to_string()
            .contains("engine error:")
    );
    assert!(
        CrosstileError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CrosstileError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
