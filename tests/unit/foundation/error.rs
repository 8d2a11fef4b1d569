use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TraceError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(TraceError::config("x").to_string().contains("config error:"));
    assert!(
        TraceError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TraceError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(!err.is_input_error());
}

#[test]
fn json_errors_map_to_serde() {
    let err: TraceError = serde_json::from_str::<Vec<i64>>("[1, \"x\"]")
        .unwrap_err()
        .into();
    assert!(matches!(err, TraceError::Serde(_)));
    assert!(err.is_input_error());
}
