//! Well-known storage keys.
//!
//! New keys must not collide with these once a leading `@` is dropped and
//! characters outside `[A-Za-z0-9_-]` become `_`, since the file store
//! names its files that way.

/// JSON object mapping email to identity record
pub const USERS_KEY: &str = "@vitae_users";

/// JSON session record, present only while authenticated
pub const CURRENT_USER_KEY: &str = "@vitae_current_user";

/// JSON array of queued violation reports
pub const REPORTS_KEY: &str = "@vitae_reports";
