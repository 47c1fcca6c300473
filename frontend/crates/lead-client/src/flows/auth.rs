//! Signup, login, logout and password reset.
//!
//! These run without a session, so a 401 here means bad credentials rather
//! than an expired session and is shown inline instead of redirecting.

use crate::{Client, ClientError, Dispatcher, FlowOutcome};

use lead_core::{
    AuthResponse, ErrorKind, ForgotPasswordForm, LoginForm, ResetPasswordForm, Route,
    SignupForm,
};

use log::{info, warn};
use serde_json::Value;

const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
const SESSION_STORE_FAILED_MESSAGE: &str = "Signed in, but the session could not be saved";
const RESET_LINK_SENT_MESSAGE: &str =
    "If an account exists for that email, a reset link has been sent.";
const PASSWORD_RESET_MESSAGE: &str = "Password updated. Please log in.";

pub async fn signup(form: &SignupForm, client: &Client, dispatcher: &Dispatcher) -> FlowOutcome {
    if let Err(e) = form.validate() {
        return FlowOutcome::Failed(e.user_message());
    }

    match client.signup(form).await {
        Ok(auth) => start_session(&auth, dispatcher, Route::Onboarding),
        Err(e) => FlowOutcome::Failed(public_failure(&e)),
    }
}

pub async fn login(form: &LoginForm, client: &Client, dispatcher: &Dispatcher) -> FlowOutcome {
    if let Err(e) = form.validate() {
        return FlowOutcome::Failed(e.user_message());
    }

    match client.login(form).await {
        Ok(auth) => start_session(&auth, dispatcher, Route::Dashboard),
        Err(e) => FlowOutcome::Failed(public_failure(&e)),
    }
}

/// End the session locally. The backend keeps no session state to revoke.
pub fn logout(dispatcher: &Dispatcher) -> FlowOutcome {
    dispatcher.session().clear_or_warn();
    dispatcher.navigate(Route::Login);
    FlowOutcome::Redirected(Route::Login)
}

/// Ask for a reset link. Returns the message to show.
pub async fn forgot_password(form: &ForgotPasswordForm, client: &Client) -> FlowOutcome<String> {
    if let Err(e) = form.validate() {
        return FlowOutcome::Failed(e.user_message());
    }

    match client.forgot_password(form).await {
        Ok(body) => FlowOutcome::Done(
            body_message(&body).unwrap_or_else(|| RESET_LINK_SENT_MESSAGE.to_string()),
        ),
        Err(e) => FlowOutcome::Failed(public_failure(&e)),
    }
}

/// Set a new password with the emailed token, then go to login.
pub async fn reset_password(
    form: &ResetPasswordForm,
    client: &Client,
    dispatcher: &Dispatcher,
) -> FlowOutcome<String> {
    if let Err(e) = form.validate() {
        return FlowOutcome::Failed(e.user_message());
    }

    match client.reset_password(form).await {
        Ok(_) => {
            info!("Password reset completed");
            dispatcher.navigate(Route::Login);
            FlowOutcome::Done(PASSWORD_RESET_MESSAGE.to_string())
        }
        Err(e) => FlowOutcome::Failed(public_failure(&e)),
    }
}

fn start_session(auth: &AuthResponse, dispatcher: &Dispatcher, landing: Route) -> FlowOutcome {
    if let Err(e) = dispatcher.session().establish(auth) {
        warn!("Failed to store session: {e}");
        return FlowOutcome::Failed(SESSION_STORE_FAILED_MESSAGE.to_string());
    }

    dispatcher.navigate(landing);
    FlowOutcome::Redirected(landing)
}

fn public_failure(error: &ClientError) -> String {
    match (error.kind(), error) {
        (ErrorKind::Unauthorized, ClientError::Unauthorized { message: None, .. }) => {
            INVALID_CREDENTIALS_MESSAGE.to_string()
        }
        _ => error.user_message(),
    }
}

pub(crate) fn body_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
