pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::auth_state::AuthState;
pub use models::identity::Identity;
pub use models::profile_update::ProfileUpdate;
pub use models::report_draft::ReportDraft;
pub use models::session::Session;
pub use models::violation_kind::ViolationKind;
pub use models::violation_report::ViolationReport;
