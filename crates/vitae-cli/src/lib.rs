//! vitae-cli library
//!
//! Argument parsing, the composition root and command execution. The
//! `vitae` binary is a thin wrapper around [`App`].

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod report_commands;

#[cfg(test)]
mod tests;

pub use app::{App, Outcome, account_settings};
pub use cli::Cli;
pub use error::{CliError, Result};
