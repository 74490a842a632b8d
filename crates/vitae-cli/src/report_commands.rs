use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Queue a violation report
    Submit {
        /// violence, discrimination, harassment, abuse, exploitation or other
        #[arg(long)]
        kind: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        location: Option<String>,
        /// Date of the incident (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Attach the logged-in account to the report
        #[arg(long)]
        identified: bool,
        #[arg(long, requires = "identified")]
        contact_name: Option<String>,
        #[arg(long, requires = "identified")]
        contact_phone: Option<String>,
    },
    /// List queued reports
    List,
}
