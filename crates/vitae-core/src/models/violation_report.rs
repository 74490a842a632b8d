//! Violation report - a queued report as persisted on the device.

use crate::{ReportDraft, Session, ViolationKind};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationReport {
    pub id: Uuid,
    pub kind: ViolationKind,
    pub description: String,
    pub location: Option<String>,
    pub occurred_on: Option<NaiveDate>,
    pub anonymous: bool,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    /// Email of the session that submitted an identified report
    pub reporter_email: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl ViolationReport {
    /// Finalize a draft. Anonymous drafts lose every identifying field;
    /// identified drafts fall back to the reporter's profile for contact data.
    pub fn from_draft(
        draft: ReportDraft,
        reporter: Option<&Session>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        let (contact_name, contact_phone, reporter_email) = if draft.anonymous {
            (None, None, None)
        } else {
            (
                draft
                    .contact_name
                    .or_else(|| reporter.map(|s| s.display_name.clone())),
                draft
                    .contact_phone
                    .or_else(|| reporter.and_then(|s| s.phone.clone())),
                reporter.map(|s| s.email.clone()),
            )
        };

        Self {
            id: Uuid::new_v4(),
            kind: draft.kind,
            description: draft.description,
            location: draft.location,
            occurred_on: draft.occurred_on,
            anonymous: draft.anonymous,
            contact_name,
            contact_phone,
            reporter_email,
            submitted_at,
        }
    }
}
