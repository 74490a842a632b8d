//! Composition root and command execution.

use crate::commands::Commands;
use crate::report_commands::ReportCommands;
use crate::{CliError, Result as CliErrorResult};

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use log::{info, warn};
use serde_json::{Value, json};
use vitae_auth::{AccountSettings, AccountStore, BootstrapCredential};
use vitae_config::{AccountConfig, Config};
use vitae_core::{ProfileUpdate, ReportDraft, ViolationKind};
use vitae_reports::ReportQueue;
use vitae_storage::{FileKeyValueStore, KeyValueStore};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result of one command: the JSON to print and whether it counts as success.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub value: Value,
    pub success: bool,
}

impl Outcome {
    fn new(value: Value, success: bool) -> Self {
        Self { value, success }
    }
}

pub struct App {
    accounts: AccountStore,
    reports: ReportQueue,
}

impl App {
    /// Build the stores over the configured data directory and restore any
    /// persisted session.
    pub async fn open(config: &Config) -> CliErrorResult<Self> {
        let storage_path = config.storage_path()?;
        let files = FileKeyValueStore::open(&storage_path).await?;
        info!("Using data directory {}", storage_path.display());

        let storage: Arc<dyn KeyValueStore> = Arc::new(files);
        Ok(Self::with_storage(storage, account_settings(&config.account)).await)
    }

    pub async fn with_storage(storage: Arc<dyn KeyValueStore>, settings: AccountSettings) -> Self {
        let accounts = AccountStore::new(Arc::clone(&storage), settings);
        accounts.initialize().await;

        Self {
            accounts,
            reports: ReportQueue::new(storage),
        }
    }

    pub async fn execute(&self, command: Commands) -> CliErrorResult<Outcome> {
        match command {
            Commands::Register {
                email,
                password,
                name,
                phone,
            } => {
                let registered = self
                    .accounts
                    .register(&email, &password, &name, phone.as_deref())
                    .await;
                Ok(Outcome::new(json!({ "registered": registered }), registered))
            }

            Commands::Login { email, password } => {
                let authenticated = self.accounts.login(&email, &password).await;
                Ok(Outcome::new(self.state_json()?, authenticated))
            }

            Commands::Logout => {
                self.accounts.logout().await;
                Ok(Outcome::new(self.state_json()?, true))
            }

            Commands::Whoami => Ok(Outcome::new(self.state_json()?, true)),

            Commands::UpdateProfile { name, phone } => {
                let update = ProfileUpdate {
                    display_name: name,
                    phone,
                };
                if update.is_empty() {
                    return Err(CliError::argument(
                        "update-profile needs --name and/or --phone",
                    ));
                }

                let updated = self.accounts.update_profile(update).await;
                Ok(Outcome::new(
                    json!({
                        "updated": updated,
                        "session": self.accounts.current_session(),
                    }),
                    updated,
                ))
            }

            Commands::ChangePassword { current, new } => {
                let changed = self.accounts.change_password(&current, &new).await;
                Ok(Outcome::new(json!({ "changed": changed }), changed))
            }

            Commands::Report { action } => self.execute_report(action).await,
        }
    }

    async fn execute_report(&self, action: ReportCommands) -> CliErrorResult<Outcome> {
        match action {
            ReportCommands::Submit {
                kind,
                description,
                location,
                date,
                identified,
                contact_name,
                contact_phone,
            } => {
                let kind: ViolationKind = kind.parse()?;
                let mut draft = ReportDraft::new(kind, description)?;

                if let Some(location) = location {
                    draft = draft.with_location(location);
                }
                if let Some(date) = date {
                    draft = draft.with_occurred_on(parse_date(&date)?);
                }

                let session = if identified {
                    let session = self.accounts.current_session();
                    if session.is_none() {
                        warn!("Identified report submitted without a session");
                    }
                    draft = draft.identified().with_contact(contact_name, contact_phone);
                    session
                } else {
                    None
                };

                match self.reports.submit(draft, session.as_ref()).await {
                    Some(report) => Ok(Outcome::new(serde_json::to_value(&report)?, true)),
                    None => Ok(Outcome::new(json!({ "submitted": false }), false)),
                }
            }

            ReportCommands::List => {
                let reports = self.reports.list().await;
                Ok(Outcome::new(serde_json::to_value(&reports)?, true))
            }
        }
    }

    fn state_json(&self) -> CliErrorResult<Value> {
        Ok(serde_json::to_value(self.accounts.state())?)
    }
}

/// Convert config types for vitae-auth.
pub fn account_settings(config: &AccountConfig) -> AccountSettings {
    let bootstrap = config.bootstrap_enabled.then(|| {
        BootstrapCredential::new(
            config.bootstrap_email.as_str(),
            config.bootstrap_password.as_str(),
            config.bootstrap_name.as_str(),
        )
    });

    let session_ttl = config.session_ttl_secs.and_then(|secs| {
        let ttl = i64::try_from(secs).ok().and_then(Duration::try_seconds);
        if ttl.is_none() {
            warn!("session_ttl_secs {secs} is out of range; sessions will not expire");
        }
        ttl
    });

    AccountSettings {
        bootstrap,
        session_ttl,
    }
}

#[track_caller]
fn parse_date(value: &str) -> CliErrorResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| CliError::argument(format!("invalid date '{value}' (expected YYYY-MM-DD): {e}")))
}
