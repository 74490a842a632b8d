mod auth_state;
mod identity;
mod session;
mod violation_kind;
mod violation_report;
