//! Final step of the onboarding wizard.

use crate::{Client, Dispatcher, FlowOutcome};

use lead_core::{OnboardingWizard, Route, SAVE_PROFILE_FAILED_MESSAGE};

use log::{info, warn};

/// Submit the wizard from its last step.
///
/// Order matters: the token is checked before anything else, so a missing
/// session sends the user to login without touching the wizard or the
/// network. On success the user lands on the dashboard.
pub async fn submit(
    wizard: &mut OnboardingWizard,
    client: &Client,
    dispatcher: &Dispatcher,
) -> FlowOutcome {
    match client.session().token() {
        Ok(Some(_)) => {}
        Ok(None) => {
            dispatcher.navigate(Route::Login);
            return FlowOutcome::Redirected(Route::Login);
        }
        Err(e) => {
            warn!("Cannot read session: {e}");
            dispatcher.navigate(Route::Login);
            return FlowOutcome::Redirected(Route::Login);
        }
    }

    let payload = match wizard.begin_submit() {
        Ok(payload) => payload,
        Err(e) => return FlowOutcome::Failed(e.user_message()),
    };

    match client.save_profile(&payload).await {
        Ok(response) if response.success => {
            wizard.finish_submit(Ok(()));
            info!("Onboarding complete for {}", payload.business_name);
            dispatcher.navigate(Route::Dashboard);
            FlowOutcome::Redirected(Route::Dashboard)
        }
        Ok(response) => {
            let message = response
                .message
                .unwrap_or_else(|| SAVE_PROFILE_FAILED_MESSAGE.to_string());
            wizard.finish_submit(Err(message.clone()));
            FlowOutcome::Failed(message)
        }
        Err(e) => {
            let message = e.user_message();
            wizard.finish_submit(Err(message.clone()));
            if dispatcher.intercept(&e) {
                return FlowOutcome::Redirected(Route::Login);
            }
            warn!("Profile save failed: {e}");
            FlowOutcome::Failed(message)
        }
    }
}
