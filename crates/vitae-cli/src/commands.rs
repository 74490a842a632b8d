use crate::report_commands::ReportCommands;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account (does not log in)
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Log in and remember the session on this device
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the session on this device
    Logout,

    /// Show the current session
    Whoami,

    /// Change the display name and/or phone of the logged-in account
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Change the password of the logged-in account
    ChangePassword {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
    },

    /// Violation report operations
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
}
