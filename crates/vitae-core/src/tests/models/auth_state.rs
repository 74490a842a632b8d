use crate::{AuthState, Session};

use chrono::Utc;
use googletest::prelude::*;

fn session() -> Session {
    Session::new(
        "ana@example.com".to_string(),
        "Ana".to_string(),
        None,
        Utc::now(),
    )
}

#[test]
fn given_default_state_when_checked_then_unauthenticated() {
    let state = AuthState::default();

    assert_that!(state.is_authenticated(), eq(false));
    assert_that!(state.session(), none());
}

#[test]
fn given_some_session_when_converted_then_authenticated_with_session() {
    let state = AuthState::from(Some(session()));

    assert_that!(state.is_authenticated(), eq(true));
    assert_that!(
        state.session().map(|s| s.email.as_str()),
        some(eq("ana@example.com"))
    );
}

#[test]
fn given_authenticated_state_when_serialized_then_tagged_with_state_name() {
    let json = serde_json::to_value(AuthState::Authenticated(session())).unwrap();

    assert_that!(json["state"].as_str(), some(eq("authenticated")));
    assert_that!(json["session"]["display_name"].as_str(), some(eq("Ana")));
}
