use std::fmt;

use chrono::{DateTime, Duration, Utc};
use vitae_core::Session;

const DEFAULT_BOOTSTRAP_EMAIL: &str = "admin@email.com";
const DEFAULT_BOOTSTRAP_PASSWORD: &str = "123";
const DEFAULT_BOOTSTRAP_NAME: &str = "Administrador";

/// Built-in administrative login. It never has a row in the identity
/// table and its email cannot be registered.
#[derive(Clone, PartialEq, Eq)]
pub struct BootstrapCredential {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl BootstrapCredential {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            display_name: display_name.into(),
        }
    }

    /// Exact match on both fields.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    pub fn to_session(&self, authenticated_at: DateTime<Utc>) -> Session {
        Session::new(
            self.email.clone(),
            self.display_name.clone(),
            None,
            authenticated_at,
        )
    }
}

impl Default for BootstrapCredential {
    fn default() -> Self {
        Self::new(
            DEFAULT_BOOTSTRAP_EMAIL,
            DEFAULT_BOOTSTRAP_PASSWORD,
            DEFAULT_BOOTSTRAP_NAME,
        )
    }
}

impl fmt::Debug for BootstrapCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapCredential")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AccountSettings {
    /// `None` disables the built-in administrative login
    pub bootstrap: Option<BootstrapCredential>,
    /// Sessions older than this are dropped at initialize; `None` keeps them forever
    pub session_ttl: Option<Duration>,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            bootstrap: Some(BootstrapCredential::default()),
            session_ttl: None,
        }
    }
}
