//! Session guard for protected views.

use crate::{Client, ClientError, Dispatcher};

use lead_core::{GuardDecision, GuardState};

use log::{debug, warn};

/// Validate the stored session against the backend.
///
/// With no token the backend is never contacted. The returned state is
/// terminal; any redirect and session wipe it implies has already happened.
pub async fn check(client: &Client, dispatcher: &Dispatcher) -> GuardState {
    let outcome = client.fetch_profile().await;

    match &outcome {
        Ok(lookup) => debug!("Guard lookup: {lookup:?}"),
        Err(e) => warn!("Guard profile fetch failed: {e}"),
    }

    let decision = GuardDecision::from_lookup(outcome.as_ref().map_err(ClientError::kind));
    dispatcher.apply(decision)
}
