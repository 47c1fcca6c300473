use clap::Subcommand;

#[derive(Subcommand)]
pub enum TargetingCommands {
    /// Print the current targeting lists
    Show,
    /// Change targeting lists and save
    Edit {
        /// Comma-separated industries (replaces the current list)
        #[arg(long)]
        industries: Option<String>,
        /// Comma-separated job titles (replaces the current list)
        #[arg(long)]
        job_titles: Option<String>,
        /// Company size to toggle (repeatable)
        #[arg(long = "toggle-size")]
        toggle_sizes: Vec<String>,
        /// Job level to toggle (repeatable)
        #[arg(long = "toggle-level")]
        toggle_levels: Vec<String>,
    },
}
