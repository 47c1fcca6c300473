use lead_client::{Client, SessionContext};
use lead_config::Config;

/// Shared handler state.
///
/// The client carries an empty session: every proxied call supplies the
/// caller's token explicitly.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: Client,
    pub admin_secret: Option<String>,
}

impl AppState {
    pub fn new(client: Client, admin_secret: Option<String>) -> Self {
        Self {
            client,
            admin_secret,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Client::from_config(&config.api, SessionContext::in_memory()),
            config.admin.secret.clone(),
        )
    }
}
