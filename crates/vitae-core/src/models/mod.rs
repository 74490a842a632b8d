pub mod auth_state;
pub mod identity;
pub mod profile_update;
pub mod report_draft;
pub mod session;
pub mod violation_kind;
pub mod violation_report;
