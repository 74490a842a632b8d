use crate::{Identity, ProfileUpdate};

use chrono::Utc;
use googletest::prelude::*;

#[test]
fn given_identity_when_password_differs_in_case_then_does_not_match() {
    let identity = Identity::new("ana@example.com", "Secret", "Ana", None);

    assert_that!(identity.password_matches("Secret"), eq(true));
    assert_that!(identity.password_matches("secret"), eq(false));
    assert_that!(identity.password_matches("Secret "), eq(false));
}

#[test]
fn given_partial_update_when_applied_then_only_given_fields_change() {
    let mut identity = Identity::new(
        "ana@example.com",
        "pw",
        "Ana",
        Some("555-0100".to_string()),
    );

    identity.apply(&ProfileUpdate::new().display_name("Ana Maria"));

    assert_that!(identity.display_name.as_str(), eq("Ana Maria"));
    assert_that!(identity.phone.as_deref(), some(eq("555-0100")));
    assert_that!(identity.email.as_str(), eq("ana@example.com"));
}

#[test]
fn given_identity_when_to_session_then_copies_profile_fields() {
    let identity = Identity::new("ana@example.com", "pw", "Ana", Some("555".to_string()));
    let now = Utc::now();

    let session = identity.to_session(now);

    assert_that!(session.email.as_str(), eq("ana@example.com"));
    assert_that!(session.display_name.as_str(), eq("Ana"));
    assert_that!(session.phone.as_deref(), some(eq("555")));
    assert_that!(session.authenticated_at, some(eq(now)));
}

#[test]
fn given_identity_when_debug_formatted_then_password_is_redacted() {
    let identity = Identity::new("ana@example.com", "hunter2", "Ana", None);

    let debug = format!("{identity:?}");

    assert_that!(debug, not(contains_substring("hunter2")));
    assert_that!(debug, contains_substring("<redacted>"));
}

#[test]
fn given_record_without_phone_when_deserialized_then_phone_is_none() {
    let json = r#"{"email":"a@b.c","password":"x","display_name":"A"}"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_that!(identity.phone, none());
}
