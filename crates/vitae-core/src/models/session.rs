//! Session record - the persisted view of the authenticated user.

use crate::ProfileUpdate;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Mirrors the profile fields of the active identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Absent on records written before timestamps were kept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticated_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(
        email: String,
        display_name: String,
        phone: Option<String>,
        authenticated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            display_name,
            phone,
            authenticated_at: Some(authenticated_at),
        }
    }

    /// Merge the profile fields of `update`. Email is untouched.
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(ref name) = update.display_name {
            self.display_name = name.clone();
        }
        if let Some(ref phone) = update.phone {
            self.phone = Some(phone.clone());
        }
    }

    /// A session without a timestamp counts as expired once a TTL applies.
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        match self.authenticated_at {
            Some(at) => now.signed_duration_since(at) > ttl,
            None => true,
        }
    }
}
