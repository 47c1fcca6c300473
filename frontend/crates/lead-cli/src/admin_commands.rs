use clap::Subcommand;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Delete every user account
    ResetUsers {
        /// Confirmation phrase, typed exactly
        #[arg(long)]
        confirm: String,
    },
}
