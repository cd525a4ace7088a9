use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WordcycleError::invalid_config("x")
            .to_string()
            .contains("invalid config:")
    );
    assert!(
        WordcycleError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
    assert!(
        WordcycleError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WordcycleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn fmt_error_converts_to_other() {
    let err: WordcycleError = std::fmt::Error.into();
    assert!(matches!(err, WordcycleError::Other(_)));
}
