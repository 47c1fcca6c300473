use crate::flows::auth::body_message;
use crate::{Client, Dispatcher, FlowOutcome};

use lead_core::{AdminResetGate, Route};

use log::warn;

const RESET_DONE_MESSAGE: &str = "All users have been reset.";
const MISSING_SECRET_MESSAGE: &str = "Admin secret is not configured";

/// Reset every user once the confirmation phrase has been typed exactly.
pub async fn reset_users(
    gate: &AdminResetGate,
    confirmation: &str,
    admin_secret: Option<&str>,
    client: &Client,
    dispatcher: &Dispatcher,
) -> FlowOutcome<String> {
    if let Err(e) = gate.check(confirmation) {
        return FlowOutcome::Failed(e.user_message());
    }

    let Some(secret) = admin_secret.filter(|s| !s.is_empty()) else {
        return FlowOutcome::Failed(MISSING_SECRET_MESSAGE.to_string());
    };

    match client.reset_users(secret).await {
        Ok(body) => {
            warn!("Admin reset of all users completed");
            FlowOutcome::Done(body_message(&body).unwrap_or_else(|| RESET_DONE_MESSAGE.to_string()))
        }
        Err(e) if dispatcher.intercept(&e) => FlowOutcome::Redirected(Route::Login),
        Err(e) => FlowOutcome::Failed(e.user_message()),
    }
}
