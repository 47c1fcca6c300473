//! Targeting preferences page.

use crate::{Client, Dispatcher, FlowOutcome};

use lead_core::{Route, SAVE_TARGETING_FAILED_MESSAGE, TargetingEditor};

use std::time::{Duration, Instant};

use log::{info, warn};

/// Fetch the profile and seed the editor.
pub async fn load(
    editor: &mut TargetingEditor,
    client: &Client,
    dispatcher: &Dispatcher,
) -> FlowOutcome {
    match client.fetch_profile().await {
        Ok(lookup) => {
            editor.load(lookup);
            FlowOutcome::Done(())
        }
        Err(e) if dispatcher.intercept(&e) => {
            editor.discard();
            FlowOutcome::Redirected(Route::Login)
        }
        Err(e) => {
            warn!("Targeting load failed: {e}");
            let message = e.user_message();
            editor.fail_load(message.clone());
            FlowOutcome::Failed(message)
        }
    }
}

/// Merge the draft into the fetched profile and save it.
///
/// `success_ttl` is how long the success banner stays up.
pub async fn save(
    editor: &mut TargetingEditor,
    client: &Client,
    dispatcher: &Dispatcher,
    success_ttl: Duration,
) -> FlowOutcome {
    let merged = match editor.begin_save() {
        Ok(merged) => merged,
        Err(e) => {
            warn!("Targeting save refused: {e}");
            return FlowOutcome::Failed(e.user_message());
        }
    };

    match client.save_profile(&merged).await {
        Ok(response) if response.success => {
            info!("Targeting saved for {}", merged.display_name());
            editor.finish_save(Ok(()), Instant::now(), success_ttl);
            FlowOutcome::Done(())
        }
        Ok(response) => {
            let message = response
                .message
                .unwrap_or_else(|| SAVE_TARGETING_FAILED_MESSAGE.to_string());
            editor.finish_save(Err(message.clone()), Instant::now(), success_ttl);
            FlowOutcome::Failed(message)
        }
        Err(e) if dispatcher.intercept(&e) => {
            editor.discard();
            FlowOutcome::Redirected(Route::Login)
        }
        Err(e) => {
            warn!("Targeting save failed: {e}");
            let message = e.user_message();
            editor.finish_save(Err(message.clone()), Instant::now(), success_ttl);
            FlowOutcome::Failed(message)
        }
    }
}
