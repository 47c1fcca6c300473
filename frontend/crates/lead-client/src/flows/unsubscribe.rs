use crate::flows::auth::body_message;
use crate::{Client, FlowOutcome};

use log::info;

const UNSUBSCRIBED_MESSAGE: &str = "You have been unsubscribed.";

/// Remove an address from outreach. No session needed.
pub async fn unsubscribe(email: &str, token: Option<&str>, client: &Client) -> FlowOutcome<String> {
    let email = email.trim();
    if email.is_empty() {
        return FlowOutcome::Failed("Email is required".to_string());
    }

    match client.unsubscribe(email, token).await {
        Ok(body) => {
            info!("Unsubscribed {email}");
            FlowOutcome::Done(body_message(&body).unwrap_or_else(|| UNSUBSCRIBED_MESSAGE.to_string()))
        }
        Err(e) => FlowOutcome::Failed(e.user_message()),
    }
}
