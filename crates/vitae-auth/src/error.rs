use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use vitae_storage::StorageError;

/// Internal failures of the account store. These are logged and collapsed
/// into boolean outcomes at the public API; they never reach callers.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Identity table unavailable: {source} {location}")]
    IdentityTable {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },

    #[error("Session record unavailable: {source} {location}")]
    SessionRecord {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn identity_table(source: StorageError) -> Self {
        Self::IdentityTable {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn session_record(source: StorageError) -> Self {
        Self::SessionRecord {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The persisted data exists but does not decode.
    pub fn is_corrupted(&self) -> bool {
        match self {
            Self::IdentityTable { source, .. } | Self::SessionRecord { source, .. } => {
                source.is_corrupted()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
