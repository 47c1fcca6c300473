//! Command handlers. Each one drives a flow from `lead-client` and turns
//! its outcome into terminal output.

use crate::error::{CliError, Result as CliErrorResult};
use crate::onboard_args::OnboardArgs;
use crate::prompt::{self, PromptOutcome};

use lead_client::flows::{admin, auth, guard, onboarding, targeting, unsubscribe};
use lead_client::{
    Client, Dispatcher, FileSessionStore, FlowOutcome, RecordingNavigator, SessionContext,
    ViewScope,
};
use lead_config::Config;
use lead_core::{
    AdminResetGate, ForgotPasswordForm, GuardState, LoginForm, OnboardingWizard,
    ResetPasswordForm, Route, SignupForm, TargetingEditor,
};

use std::future::Future;
use std::sync::Arc;

use log::info;
use serde_json::json;

pub(crate) struct App {
    config: Config,
    client: Client,
    dispatcher: Dispatcher,
    navigator: Arc<RecordingNavigator>,
    scope: ViewScope,
    pretty: bool,
}

impl App {
    pub(crate) fn new(config: Config, pretty: bool) -> CliErrorResult<Self> {
        let session_path = config.session_path()?;
        info!("Session file: {}", session_path.display());

        let session = SessionContext::new(Arc::new(FileSessionStore::new(session_path)));
        let navigator = Arc::new(RecordingNavigator::new());

        Ok(Self {
            client: Client::from_config(&config.api, session.clone()),
            dispatcher: Dispatcher::new(session, navigator.clone()),
            config,
            navigator,
            scope: ViewScope::new(),
            pretty,
        })
    }

    /// Scope every backend wait runs in. Unmounting it cancels the command.
    pub(crate) fn scope(&self) -> &ViewScope {
        &self.scope
    }

    /// Where the last flow sent the user, as a hint for the next command.
    pub(crate) fn next_hint(&self) -> Option<&'static str> {
        match self.navigator.last()? {
            Route::Login => Some("Run `lead login` to sign in."),
            Route::Onboarding => Some("Run `lead onboard` to finish setting up your business."),
            Route::Dashboard => Some("You're all set."),
            _ => None,
        }
    }

    async fn scoped<F: Future>(&self, future: F) -> CliErrorResult<F::Output> {
        self.scope.run(future).await.ok_or_else(CliError::cancelled)
    }

    // =========================================================================
    // Auth
    // =========================================================================

    pub(crate) async fn signup(
        &self,
        email: String,
        password: String,
        confirm_password: Option<String>,
        name: Option<String>,
    ) -> CliErrorResult<String> {
        let form = SignupForm {
            name,
            email,
            confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
            password,
        };
        let outcome = self.scoped(auth::signup(&form, &self.client, &self.dispatcher)).await?;
        settle(outcome)?;
        Ok("Account created.".to_string())
    }

    pub(crate) async fn login(&self, email: String, password: String) -> CliErrorResult<String> {
        let form = LoginForm::new(email, password);
        let outcome = self.scoped(auth::login(&form, &self.client, &self.dispatcher)).await?;
        settle(outcome)?;
        Ok("Logged in.".to_string())
    }

    pub(crate) fn logout(&self) -> String {
        auth::logout(&self.dispatcher);
        "Logged out.".to_string()
    }

    pub(crate) async fn forgot_password(&self, email: String) -> CliErrorResult<String> {
        let form = ForgotPasswordForm { email };
        let outcome = self.scoped(auth::forgot_password(&form, &self.client)).await?;
        Ok(settle(outcome)?.unwrap_or_default())
    }

    pub(crate) async fn reset_password(
        &self,
        token: String,
        password: String,
        confirm_password: Option<String>,
    ) -> CliErrorResult<String> {
        let form = ResetPasswordForm {
            token,
            confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
            password,
        };
        let outcome = self
            .scoped(auth::reset_password(&form, &self.client, &self.dispatcher))
            .await?;
        Ok(settle(outcome)?.unwrap_or_default())
    }

    // =========================================================================
    // Session guard
    // =========================================================================

    pub(crate) async fn status(&self) -> CliErrorResult<String> {
        let state = self.scoped(guard::check(&self.client, &self.dispatcher)).await?;

        Ok(match state {
            GuardState::Authorized => {
                let user = self
                    .dispatcher
                    .session()
                    .user_id()
                    .ok()
                    .flatten()
                    .unwrap_or_else(|| "unknown".to_string());
                format!("Signed in (user {user}).")
            }
            GuardState::RedirectOnboarding => "Signed in, onboarding not finished.".to_string(),
            GuardState::RedirectLogin | GuardState::Checking => "Not signed in.".to_string(),
        })
    }

    // =========================================================================
    // Onboarding
    // =========================================================================

    pub(crate) async fn onboard(&self, args: OnboardArgs) -> CliErrorResult<String> {
        let mut wizard = OnboardingWizard::new();
        for (field, value) in args.values() {
            wizard.set_field(field, value);
        }

        if args.interactive {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            if prompt::run_wizard(&mut wizard, &mut input, &mut output)? == PromptOutcome::Quit {
                return Err(CliError::cancelled());
            }
        } else {
            while !wizard.step().is_last() {
                let step = wizard.step();
                if !wizard.next() {
                    let error = wizard.error().unwrap_or_default();
                    return Err(CliError::failed(format!("{step}: {error}")));
                }
            }
        }

        let outcome = self
            .scoped(onboarding::submit(&mut wizard, &self.client, &self.dispatcher))
            .await?;
        settle(outcome)?;
        Ok("Profile saved.".to_string())
    }

    // =========================================================================
    // Targeting
    // =========================================================================

    async fn load_targeting(&self) -> CliErrorResult<TargetingEditor> {
        let mut editor = TargetingEditor::new();
        let outcome = self
            .scoped(targeting::load(&mut editor, &self.client, &self.dispatcher))
            .await?;
        settle(outcome)?;
        Ok(editor)
    }

    pub(crate) async fn targeting_show(&self) -> CliErrorResult<String> {
        let editor = self.load_targeting().await?;
        let draft = editor.draft();

        let value = json!({
            "target_industries": draft.target_industries,
            "target_company_sizes": draft.target_company_sizes,
            "target_job_titles": draft.target_job_titles,
            "target_job_levels": draft.target_job_levels,
        });
        self.render(&value)
    }

    pub(crate) async fn targeting_edit(
        &self,
        industries: Option<String>,
        job_titles: Option<String>,
        toggle_sizes: Vec<String>,
        toggle_levels: Vec<String>,
    ) -> CliErrorResult<String> {
        let mut editor = self.load_targeting().await?;

        let draft = editor.draft_mut();
        if let Some(text) = industries {
            draft.set_industries_input(text);
        }
        if let Some(text) = job_titles {
            draft.set_job_titles_input(text);
        }
        for size in &toggle_sizes {
            draft.toggle_company_size(size);
        }
        for level in &toggle_levels {
            draft.toggle_job_level(level);
        }

        let ttl = self.config.ui.success_banner_ttl();
        let outcome = self
            .scoped(targeting::save(&mut editor, &self.client, &self.dispatcher, ttl))
            .await?;
        settle(outcome)?;

        let now = std::time::Instant::now();
        Ok(editor
            .banner(now)
            .map(|banner| banner.message.clone())
            .unwrap_or_default())
    }

    // =========================================================================
    // Outreach / Admin
    // =========================================================================

    pub(crate) async fn unsubscribe(
        &self,
        email: String,
        token: Option<String>,
    ) -> CliErrorResult<String> {
        let outcome = self
            .scoped(unsubscribe::unsubscribe(&email, token.as_deref(), &self.client))
            .await?;
        Ok(settle(outcome)?.unwrap_or_default())
    }

    pub(crate) async fn reset_users(&self, confirm: String) -> CliErrorResult<String> {
        let gate = AdminResetGate::new(self.config.admin.confirmation_phrase.clone());
        let outcome = self
            .scoped(admin::reset_users(
                &gate,
                &confirm,
                self.config.admin.secret.as_deref(),
                &self.client,
                &self.dispatcher,
            ))
            .await?;
        Ok(settle(outcome)?.unwrap_or_default())
    }

    fn render(&self, value: &serde_json::Value) -> CliErrorResult<String> {
        Ok(if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        })
    }
}

/// Unwrap a flow outcome.
///
/// `Done` yields its value. A redirect onward (after login, signup or
/// onboarding) yields `None`. A redirect to login or a failure becomes an
/// error.
pub(crate) fn settle<T>(outcome: FlowOutcome<T>) -> CliErrorResult<Option<T>> {
    match outcome {
        FlowOutcome::Done(value) => Ok(Some(value)),
        FlowOutcome::Redirected(Route::Login) => {
            Err(CliError::failed("Not signed in or session expired."))
        }
        FlowOutcome::Redirected(route) => {
            info!("Continuing at {route}");
            Ok(None)
        }
        FlowOutcome::Failed(message) => Err(CliError::failed(message)),
    }
}
