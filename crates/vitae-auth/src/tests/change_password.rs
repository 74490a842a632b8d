use crate::tests::{EMAIL, NAME, PASSWORD, identity_table, new_store};

use googletest::prelude::*;

#[tokio::test]
async fn given_correct_current_password_when_change_password_then_new_one_logs_in() {
    let (store, backend) = new_store();
    store.register(EMAIL, PASSWORD, NAME, None).await;
    store.login(EMAIL, PASSWORD).await;

    let changed = store.change_password(PASSWORD, "n3w").await;

    assert_that!(changed, eq(true));
    assert_that!(
        identity_table(&backend).await.get(EMAIL).unwrap().password,
        eq("n3w")
    );
    store.logout().await;
    assert_that!(store.login(EMAIL, PASSWORD).await, eq(false));
    assert_that!(store.login(EMAIL, "n3w").await, eq(true));
}

#[tokio::test]
async fn given_wrong_current_password_when_change_password_then_false_and_secret_kept() {
    let (store, backend) = new_store();
    store.register(EMAIL, PASSWORD, NAME, None).await;
    store.login(EMAIL, PASSWORD).await;

    let changed = store.change_password("guess", "n3w").await;

    assert_that!(changed, eq(false));
    assert_that!(
        identity_table(&backend).await.get(EMAIL).unwrap().password,
        eq(PASSWORD)
    );
}

#[tokio::test]
async fn given_unauthenticated_when_change_password_then_false() {
    let (store, _backend) = new_store();
    store.register(EMAIL, PASSWORD, NAME, None).await;

    assert_that!(store.change_password(PASSWORD, "n3w").await, eq(false));
}

#[tokio::test]
async fn given_bootstrap_session_when_change_password_then_false() {
    let (store, _backend) = new_store();
    store.login("admin@email.com", "123").await;

    assert_that!(store.change_password("123", "456").await, eq(false));
    assert_that!(store.is_authenticated(), eq(true));
}

#[tokio::test]
async fn given_password_change_when_successful_then_session_untouched() {
    let (store, _backend) = new_store();
    store.register(EMAIL, PASSWORD, NAME, None).await;
    store.login(EMAIL, PASSWORD).await;
    let before = store.current_session();

    store.change_password(PASSWORD, "n3w").await;

    assert_that!(store.current_session(), eq(&before));
}
