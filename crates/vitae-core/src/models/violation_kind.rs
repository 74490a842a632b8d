use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Category of a reported human-rights violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Physical violence
    Violence,
    Discrimination,
    Harassment,
    /// Abuse of authority
    Abuse,
    Exploitation,
    Other,
}

impl ViolationKind {
    pub const ALL: [ViolationKind; 6] = [
        Self::Violence,
        Self::Discrimination,
        Self::Harassment,
        Self::Abuse,
        Self::Exploitation,
        Self::Other,
    ];

    /// Convert to storage string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Violence => "violence",
            Self::Discrimination => "discrimination",
            Self::Harassment => "harassment",
            Self::Abuse => "abuse",
            Self::Exploitation => "exploitation",
            Self::Other => "other",
        }
    }
}

impl FromStr for ViolationKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::InvalidViolationKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
