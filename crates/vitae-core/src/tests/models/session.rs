use crate::{ProfileUpdate, Session};

use chrono::{Duration, Utc};
use googletest::prelude::*;

#[test]
fn given_recent_session_when_checked_against_ttl_then_not_expired() {
    let now = Utc::now();
    let session = Session::new("a@b.c".into(), "A".into(), None, now - Duration::minutes(5));

    assert_that!(session.is_expired(Duration::hours(1), now), eq(false));
}

#[test]
fn given_old_session_when_checked_against_ttl_then_expired() {
    let now = Utc::now();
    let session = Session::new("a@b.c".into(), "A".into(), None, now - Duration::days(2));

    assert_that!(session.is_expired(Duration::days(1), now), eq(true));
}

#[test]
fn given_session_without_timestamp_when_checked_then_expired() {
    let json = r#"{"email":"a@b.c","display_name":"A"}"#;
    let session: Session = serde_json::from_str(json).unwrap();

    assert_that!(session.authenticated_at, none());
    assert_that!(session.is_expired(Duration::days(365), Utc::now()), eq(true));
}

#[test]
fn given_phone_update_when_applied_then_name_and_email_unchanged() {
    let mut session = Session::new("a@b.c".into(), "A".into(), None, Utc::now());

    session.apply(&ProfileUpdate::new().phone("555-0199"));

    assert_that!(session.phone.as_deref(), some(eq("555-0199")));
    assert_that!(session.display_name.as_str(), eq("A"));
    assert_that!(session.email.as_str(), eq("a@b.c"));
}
