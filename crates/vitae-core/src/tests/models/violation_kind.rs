use crate::ViolationKind;

use std::str::FromStr;

#[test]
fn test_violation_kind_round_trips_through_str() {
    for kind in ViolationKind::ALL {
        assert_eq!(ViolationKind::from_str(kind.as_str()).unwrap(), kind);
    }
}

#[test]
fn test_violation_kind_from_str_rejects_unknown() {
    assert!(ViolationKind::from_str("theft").is_err());
    assert!(ViolationKind::from_str("Violence").is_err());
}

#[test]
fn test_violation_kind_serializes_snake_case() {
    let json = serde_json::to_string(&ViolationKind::Abuse).unwrap();
    assert_eq!(json, "\"abuse\"");
}
