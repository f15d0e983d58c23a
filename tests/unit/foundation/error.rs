use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ArError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ArError::ui("x").to_string().contains("ui error:"));
    assert!(ArError::render("x").to_string().contains("render error:"));
    assert!(ArError::encode("x").to_string().contains("encode error:"));
    assert!(
        ArError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ArError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
