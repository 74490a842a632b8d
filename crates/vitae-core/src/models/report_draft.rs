//! Report draft - a violation report before it is queued.

use crate::{CoreError, Result as CoreErrorResult, ViolationKind};

use chrono::NaiveDate;

/// Fields collected for a report. Drafts are anonymous unless
/// [`ReportDraft::identified`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDraft {
    pub kind: ViolationKind,
    pub description: String,
    pub location: Option<String>,
    pub occurred_on: Option<NaiveDate>,
    pub anonymous: bool,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
}

impl ReportDraft {
    /// Rejects a description that is empty after trimming.
    #[track_caller]
    pub fn new(kind: ViolationKind, description: impl Into<String>) -> CoreErrorResult<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(CoreError::validation("report description cannot be empty"));
        }

        Ok(Self {
            kind,
            description,
            location: None,
            occurred_on: None,
            anonymous: true,
            contact_name: None,
            contact_phone: None,
        })
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_occurred_on(mut self, date: NaiveDate) -> Self {
        self.occurred_on = Some(date);
        self
    }

    pub fn identified(mut self) -> Self {
        self.anonymous = false;
        self
    }

    pub fn with_contact(mut self, name: Option<String>, phone: Option<String>) -> Self {
        self.contact_name = name;
        self.contact_phone = phone;
        self
    }
}
