use crate::{
    admin_commands::AdminCommands, onboard_args::OnboardArgs,
    targeting_commands::TargetingCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create an account and start onboarding
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Defaults to --password
        #[arg(long)]
        confirm_password: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },

    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Check the stored session against the backend
    Status,

    /// Complete the onboarding wizard
    Onboard(OnboardArgs),

    /// Targeting preferences
    Targeting {
        #[command(subcommand)]
        action: TargetingCommands,
    },

    /// Email a password reset link
    ForgotPassword {
        #[arg(long)]
        email: String,
    },

    /// Set a new password using the emailed token
    ResetPassword {
        #[arg(long)]
        token: String,
        #[arg(long)]
        password: String,
        /// Defaults to --password
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// Remove an address from outreach
    Unsubscribe {
        #[arg(long)]
        email: String,
        /// Token from the unsubscribe link
        #[arg(long)]
        token: Option<String>,
    },

    /// Administrative operations
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}
