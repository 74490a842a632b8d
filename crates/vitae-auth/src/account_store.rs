//! Account store - registered identities and the single device session.
//!
//! Two durable keys back the store: the identity table
//! ([`USERS_KEY`]) and the session record ([`CURRENT_USER_KEY`]). They are
//! independent; only [`AccountStore::update_profile`] writes both.
//!
//! ## Failure model
//!
//! No operation returns an error. Storage failures are logged and turn
//! the operation into its failure outcome (`false`, or "unauthenticated"
//! for [`AccountStore::initialize`]). Malformed persisted data counts as
//! absent when restoring a session.
//!
//! ## Concurrency
//!
//! Every operation that touches storage holds `write_lock` for its whole
//! read-modify-write. State is published through a `watch` channel, so
//! readers never wait on writers.

use crate::{AccountSettings, AuthError, Result as AuthResult};

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, error, info, warn};
use tokio::sync::{Mutex, watch};
use vitae_core::{AuthState, Identity, ProfileUpdate, Session};
use vitae_storage::keys::{CURRENT_USER_KEY, USERS_KEY};
use vitae_storage::{KeyValueStore, read_json, write_json};

/// Persisted identity table, keyed by email.
pub type IdentityTable = BTreeMap<String, Identity>;

pub struct AccountStore {
    storage: Arc<dyn KeyValueStore>,
    settings: AccountSettings,
    write_lock: Mutex<()>,
    state: watch::Sender<AuthState>,
}

impl AccountStore {
    /// Starts unauthenticated. Call [`AccountStore::initialize`] once to
    /// restore a persisted session.
    pub fn new(storage: Arc<dyn KeyValueStore>, settings: AccountSettings) -> Self {
        let (state, _) = watch::channel(AuthState::Unauthenticated);
        Self {
            storage,
            settings,
            write_lock: Mutex::new(()),
            state,
        }
    }

    /// Restore the persisted session, if any.
    pub async fn initialize(&self) {
        let _guard = self.write_lock.lock().await;

        let session = match self.load_session().await {
            Ok(Some(session)) => session,
            Ok(None) => {
                debug!("No persisted session");
                self.publish(AuthState::Unauthenticated);
                return;
            }
            Err(e) if e.is_corrupted() => {
                warn!("Ignoring malformed persisted session: {e}");
                self.publish(AuthState::Unauthenticated);
                return;
            }
            Err(e) => {
                error!("Failed to restore session: {e}");
                self.publish(AuthState::Unauthenticated);
                return;
            }
        };

        if let Some(ttl) = self.settings.session_ttl
            && session.is_expired(ttl, Utc::now())
        {
            info!("Persisted session for {} has expired", session.email);
            if let Err(e) = self.storage.remove(CURRENT_USER_KEY).await {
                warn!("Failed to remove expired session: {e}");
            }
            self.publish(AuthState::Unauthenticated);
            return;
        }

        info!("Restored session for {}", session.email);
        self.publish(AuthState::Authenticated(session));
    }

    /// Add an identity. Does not log the new account in.
    ///
    /// Returns `false` when the email is taken (exact match), is the
    /// bootstrap email, or storage fails.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
        phone: Option<&str>,
    ) -> bool {
        let _guard = self.write_lock.lock().await;

        if self.is_bootstrap_email(email) {
            info!("Registration rejected: {email} is reserved");
            return false;
        }

        let mut identities = match self.load_identities().await {
            Ok(identities) => identities,
            Err(e) => {
                error!("Registration of {email} failed: {e}");
                return false;
            }
        };

        if identities.contains_key(email) {
            info!("Registration rejected: {email} is already registered");
            return false;
        }

        identities.insert(
            email.to_string(),
            Identity::new(email, password, display_name, phone.map(str::to_string)),
        );

        match self.save_identities(&identities).await {
            Ok(()) => {
                info!("Registered {email}");
                true
            }
            Err(e) => {
                error!("Registration of {email} failed: {e}");
                false
            }
        }
    }

    /// Authenticate and persist the session.
    ///
    /// Unknown email, wrong password and storage failure all return `false`
    /// and leave the current state untouched.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let _guard = self.write_lock.lock().await;
        let now = Utc::now();

        let session = if let Some(ref bootstrap) = self.settings.bootstrap
            && bootstrap.matches(email, password)
        {
            bootstrap.to_session(now)
        } else {
            let identities = match self.load_identities().await {
                Ok(identities) => identities,
                Err(e) => {
                    error!("Login failed: {e}");
                    return false;
                }
            };

            match identities.get(email) {
                Some(identity) if identity.password_matches(password) => identity.to_session(now),
                _ => {
                    info!("Login failed: invalid credentials");
                    return false;
                }
            }
        };

        if let Err(e) = self.save_session(&session).await {
            error!("Login failed: {e}");
            return false;
        }

        info!("Logged in as {}", session.email);
        self.publish(AuthState::Authenticated(session));
        true
    }

    /// Clear the session. Safe to call when already logged out.
    pub async fn logout(&self) {
        let _guard = self.write_lock.lock().await;

        if let Some(session) = self.current_session() {
            info!("Logging out {}", session.email);
        }

        self.publish(AuthState::Unauthenticated);

        if let Err(e) = self.storage.remove(CURRENT_USER_KEY).await {
            error!("Failed to remove persisted session: {e}");
        }
    }

    /// Merge `update` into the session and, when one exists, the matching
    /// identity row. Email never changes.
    ///
    /// Returns `false` without side effects when nobody is logged in. When
    /// the session cannot be saved, the identity row is written back to its
    /// previous value before returning `false`.
    pub async fn update_profile(&self, update: ProfileUpdate) -> bool {
        let _guard = self.write_lock.lock().await;

        let Some(mut session) = self.current_session() else {
            debug!("Profile update rejected: not authenticated");
            return false;
        };

        session.apply(&update);

        // Table as it was before this update, once the new one is written.
        let mut replaced_identities = None;

        if !self.is_bootstrap_email(&session.email) {
            let mut identities = match self.load_identities().await {
                Ok(identities) => identities,
                Err(e) => {
                    error!("Profile update for {} failed: {e}", session.email);
                    return false;
                }
            };

            let previous = identities.clone();
            if let Some(identity) = identities.get_mut(&session.email) {
                identity.apply(&update);
                if let Err(e) = self.save_identities(&identities).await {
                    error!("Profile update for {} failed: {e}", session.email);
                    return false;
                }
                replaced_identities = Some(previous);
            } else {
                warn!(
                    "No identity row for {}; updating session only",
                    session.email
                );
            }
        }

        if let Err(e) = self.save_session(&session).await {
            error!("Profile update for {} failed: {e}", session.email);
            if let Some(previous) = replaced_identities
                && let Err(e) = self.save_identities(&previous).await
            {
                error!(
                    "Failed to restore identity row of {} after failed update: {e}",
                    session.email
                );
            }
            return false;
        }

        info!("Updated profile of {}", session.email);
        self.publish(AuthState::Authenticated(session));
        true
    }

    /// Replace the stored secret of the logged-in identity.
    ///
    /// Returns `false` when nobody is logged in, for the bootstrap identity,
    /// when no row exists, when `current` does not match, or on storage failure.
    pub async fn change_password(&self, current: &str, new: &str) -> bool {
        let _guard = self.write_lock.lock().await;

        let Some(session) = self.current_session() else {
            debug!("Password change rejected: not authenticated");
            return false;
        };

        if self.is_bootstrap_email(&session.email) {
            info!("Password change rejected: bootstrap identity");
            return false;
        }

        let mut identities = match self.load_identities().await {
            Ok(identities) => identities,
            Err(e) => {
                error!("Password change for {} failed: {e}", session.email);
                return false;
            }
        };

        let Some(identity) = identities.get_mut(&session.email) else {
            warn!("Password change rejected: no identity row for {}", session.email);
            return false;
        };

        if !identity.password_matches(current) {
            info!("Password change rejected for {}: wrong password", session.email);
            return false;
        }

        identity.password = new.to_string();

        match self.save_identities(&identities).await {
            Ok(()) => {
                info!("Changed password of {}", session.email);
                true
            }
            Err(e) => {
                error!("Password change for {} failed: {e}", session.email);
                false
            }
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn current_session(&self) -> Option<Session> {
        self.state.borrow().session().cloned()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    fn is_bootstrap_email(&self, email: &str) -> bool {
        self.settings
            .bootstrap
            .as_ref()
            .is_some_and(|bootstrap| bootstrap.email == email)
    }

    /// Notify subscribers only on an actual change.
    fn publish(&self, next: AuthState) {
        self.state.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    async fn load_identities(&self) -> AuthResult<IdentityTable> {
        read_json::<IdentityTable>(self.storage.as_ref(), USERS_KEY)
            .await
            .map(Option::unwrap_or_default)
            .map_err(AuthError::identity_table)
    }

    async fn save_identities(&self, identities: &IdentityTable) -> AuthResult<()> {
        write_json(self.storage.as_ref(), USERS_KEY, identities)
            .await
            .map_err(AuthError::identity_table)
    }

    async fn load_session(&self) -> AuthResult<Option<Session>> {
        read_json::<Session>(self.storage.as_ref(), CURRENT_USER_KEY)
            .await
            .map_err(AuthError::session_record)
    }

    async fn save_session(&self, session: &Session) -> AuthResult<()> {
        write_json(self.storage.as_ref(), CURRENT_USER_KEY, session)
            .await
            .map_err(AuthError::session_record)
    }
}
