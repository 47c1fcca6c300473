//! lead - LeadSite terminal client
//!
//! Drives the same flows as the web frontend against the configured
//! backend, keeping the session in `<config_dir>/session.json`.
//!
//! # Examples
//!
//! ```bash
//! # Sign in and check where the account stands
//! lead login --email owner@acme.test --password hunter2hunter2
//! lead status
//!
//! # Walk through onboarding step by step
//! lead onboard --interactive
//!
//! # Add a company size to the targeting lists
//! lead targeting edit --toggle-size 11-50
//! ```

mod admin_commands;
mod app;
mod cli;
mod commands;
mod error;
mod logger;
mod onboard_args;
mod prompt;
mod targeting_commands;


use crate::{
    admin_commands::AdminCommands,
    app::App,
    cli::Cli,
    commands::Commands,
    error::Result as CliErrorResult,
    targeting_commands::TargetingCommands,
};

use lead_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<()> {
    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    config.validate()?;

    let level = if cli.verbose {
        *config.logging.level
    } else {
        LevelFilter::Warn
    };
    logger::initialize(level, config.logging.colored)?;
    if cli.verbose {
        config.log_summary();
    }

    let app = App::new(config, cli.pretty)?;

    // Ctrl+C tears the running command down like closing a page would
    let scope = app.scope().clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            scope.unmount();
        }
    });

    let result = dispatch(&app, cli.command).await;

    if let Some(hint) = app.next_hint() {
        eprintln!("{hint}");
    }

    let output = result?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

async fn dispatch(app: &App, command: Commands) -> CliErrorResult<String> {
    match command {
        Commands::Signup {
            email,
            password,
            confirm_password,
            name,
        } => app.signup(email, password, confirm_password, name).await,
        Commands::Login { email, password } => app.login(email, password).await,
        Commands::Logout => Ok(app.logout()),
        Commands::Status => app.status().await,
        Commands::Onboard(args) => app.onboard(args).await,
        Commands::Targeting { action } => match action {
            TargetingCommands::Show => app.targeting_show().await,
            TargetingCommands::Edit {
                industries,
                job_titles,
                toggle_sizes,
                toggle_levels,
            } => {
                app.targeting_edit(industries, job_titles, toggle_sizes, toggle_levels)
                    .await
            }
        },
        Commands::ForgotPassword { email } => app.forgot_password(email).await,
        Commands::ResetPassword {
            token,
            password,
            confirm_password,
        } => app.reset_password(token, password, confirm_password).await,
        Commands::Unsubscribe { email, token } => app.unsubscribe(email, token).await,
        Commands::Admin { action } => match action {
            AdminCommands::ResetUsers { confirm } => app.reset_users(confirm).await,
        },
    }
}
