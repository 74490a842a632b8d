use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use vitae_storage::StorageError;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report queue unavailable: {source} {location}")]
    Queue {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },
}

impl ReportError {
    #[track_caller]
    pub fn queue(source: StorageError) -> Self {
        Self::Queue {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_corrupted(&self) -> bool {
        match self {
            Self::Queue { source, .. } => source.is_corrupted(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
