use crate::{ConfigError, ConfigErrorResult, DEFAULT_CONFIRMATION_PHRASE};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Shared secret forwarded to the backend as `X-Admin-Secret`
    pub secret: Option<String>,
    /// Phrase an operator must type before a reset is issued
    pub confirmation_phrase: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            secret: None,
            confirmation_phrase: String::from(DEFAULT_CONFIRMATION_PHRASE),
        }
    }
}

impl AdminConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.confirmation_phrase.trim().is_empty() {
            return Err(ConfigError::admin(
                "admin.confirmation_phrase must not be empty",
            ));
        }

        if let Some(secret) = &self.secret
            && secret.trim().is_empty()
        {
            return Err(ConfigError::admin("admin.secret must not be blank when set"));
        }

        Ok(())
    }
}
