use super::*;

#[test]
fn speed_rejects_zero() {
    assert!(Speed::from_millis(0).is_err());
    assert_eq!(Speed::from_millis(250).unwrap().millis(), 250);
}

#[test]
fn speed_clamps_and_converts() {
    let s = Speed(5000).clamp(Speed(100), Speed(2500));
    assert_eq!(s, Speed(2500));
    assert_eq!(Speed(40).clamp(Speed(100), Speed(2500)), Speed(100));
    assert_eq!(Speed(700).as_duration(), Duration::from_millis(700));
}

#[test]
fn default_limits_are_valid() {
    TraceLimits::default().validate().unwrap();
    let bad = TraceLimits {
        max_queens: 0,
        ..TraceLimits::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn limits_deserialize_with_defaults() {
    let limits: TraceLimits = serde_json::from_str(r#"{ "max_queens": 6 }"#).unwrap();
    assert_eq!(limits.max_queens, 6);
    assert_eq!(limits.max_array_len, TraceLimits::default().max_array_len);
}

#[test]
fn counting_value_cap_must_be_non_negative() {
    assert_eq!(TraceLimits::default().max_counting_value, 99);
    let bad = TraceLimits {
        max_counting_value: -1,
        ..TraceLimits::default()
    };
    let err = bad.validate().unwrap_err();
    assert!(err.to_string().contains("max_counting_value"));
}
