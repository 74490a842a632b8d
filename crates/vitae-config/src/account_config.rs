use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BOOTSTRAP_EMAIL, DEFAULT_BOOTSTRAP_ENABLED,
    DEFAULT_BOOTSTRAP_NAME, DEFAULT_BOOTSTRAP_PASSWORD,
};

use serde::Deserialize;

/// Built-in administrative login and session lifetime.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub bootstrap_enabled: bool,
    pub bootstrap_email: String,
    pub bootstrap_password: String,
    pub bootstrap_name: String,
    /// Sessions never expire when unset
    pub session_ttl_secs: Option<u64>,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            bootstrap_enabled: DEFAULT_BOOTSTRAP_ENABLED,
            bootstrap_email: String::from(DEFAULT_BOOTSTRAP_EMAIL),
            bootstrap_password: String::from(DEFAULT_BOOTSTRAP_PASSWORD),
            bootstrap_name: String::from(DEFAULT_BOOTSTRAP_NAME),
            session_ttl_secs: None,
        }
    }
}

impl AccountConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.bootstrap_enabled {
            if self.bootstrap_email.is_empty() {
                return Err(ConfigError::account(
                    "account.bootstrap_email cannot be empty when bootstrap is enabled",
                ));
            }
            if self.bootstrap_password.is_empty() {
                return Err(ConfigError::account(
                    "account.bootstrap_password cannot be empty when bootstrap is enabled",
                ));
            }
            if self.bootstrap_name.is_empty() {
                return Err(ConfigError::account(
                    "account.bootstrap_name cannot be empty when bootstrap is enabled",
                ));
            }
        }

        if self.session_ttl_secs == Some(0) {
            return Err(ConfigError::account(
                "account.session_ttl_secs must be greater than 0",
            ));
        }

        Ok(())
    }
}
