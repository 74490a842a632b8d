//! Identity record - one registered account in the local identity table.

use crate::{ProfileUpdate, Session};

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account, keyed by email in the identity table.
///
/// The password is stored and compared verbatim. `Debug` redacts it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique, case-sensitive, never changes after registration
    pub email: String,
    pub password: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Identity {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            display_name: display_name.into(),
            phone,
        }
    }

    /// Exact comparison: no normalization, case-sensitive.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
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

    /// Build the session record for a login of this identity.
    pub fn to_session(&self, authenticated_at: DateTime<Utc>) -> Session {
        Session::new(
            self.email.clone(),
            self.display_name.clone(),
            self.phone.clone(),
            authenticated_at,
        )
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .field("phone", &self.phone)
            .finish()
    }
}
