use crate::{CoreError, ReportDraft, Session, ViolationKind, ViolationReport};

use chrono::Utc;
use googletest::prelude::*;

fn reporter() -> Session {
    Session::new(
        "ana@example.com".to_string(),
        "Ana".to_string(),
        Some("555-0100".to_string()),
        Utc::now(),
    )
}

#[test]
fn given_blank_description_when_drafting_then_validation_error() {
    let result = ReportDraft::new(ViolationKind::Other, "   ");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_new_draft_when_not_identified_then_anonymous() {
    let draft = ReportDraft::new(ViolationKind::Harassment, "at work").unwrap();

    assert_that!(draft.anonymous, eq(true));
}

#[test]
fn given_anonymous_draft_with_contact_when_finalized_then_identifying_fields_dropped() {
    let draft = ReportDraft::new(ViolationKind::Violence, "street assault")
        .unwrap()
        .with_contact(Some("Ana".into()), Some("555".into()));
    let reporter = reporter();

    let report = ViolationReport::from_draft(draft, Some(&reporter), Utc::now());

    assert_that!(report.anonymous, eq(true));
    assert_that!(report.contact_name, none());
    assert_that!(report.contact_phone, none());
    assert_that!(report.reporter_email, none());
}

#[test]
fn given_identified_draft_without_contact_when_finalized_then_uses_reporter_profile() {
    let draft = ReportDraft::new(ViolationKind::Discrimination, "denied service")
        .unwrap()
        .with_location("Recife")
        .identified();
    let reporter = reporter();

    let report = ViolationReport::from_draft(draft, Some(&reporter), Utc::now());

    assert_that!(report.contact_name.as_deref(), some(eq("Ana")));
    assert_that!(report.contact_phone.as_deref(), some(eq("555-0100")));
    assert_that!(report.reporter_email.as_deref(), some(eq("ana@example.com")));
    assert_that!(report.location.as_deref(), some(eq("Recife")));
}

#[test]
fn given_identified_draft_with_explicit_contact_when_finalized_then_keeps_draft_contact() {
    let draft = ReportDraft::new(ViolationKind::Exploitation, "unpaid labour")
        .unwrap()
        .identified()
        .with_contact(Some("Bruno".into()), None);
    let reporter = reporter();

    let report = ViolationReport::from_draft(draft, Some(&reporter), Utc::now());

    assert_that!(report.contact_name.as_deref(), some(eq("Bruno")));
    assert_that!(report.contact_phone.as_deref(), some(eq("555-0100")));
}
