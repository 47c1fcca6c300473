use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "lead")]
#[command(about = "LeadSite terminal client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (overrides api.base_url from config)
    #[arg(long, global = true)]
    pub(crate) api_url: Option<String>,

    /// Log at the configured level instead of warnings only
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
