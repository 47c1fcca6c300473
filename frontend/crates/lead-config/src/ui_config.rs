use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SUCCESS_BANNER_SECS, MAX_SUCCESS_BANNER_SECS,
    MIN_SUCCESS_BANNER_SECS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a success banner stays visible
    pub success_banner_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            success_banner_secs: DEFAULT_SUCCESS_BANNER_SECS,
        }
    }
}

impl UiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_SUCCESS_BANNER_SECS..=MAX_SUCCESS_BANNER_SECS).contains(&self.success_banner_secs)
        {
            return Err(ConfigError::ui(format!(
                "ui.success_banner_secs must be {}-{}, got {}",
                MIN_SUCCESS_BANNER_SECS, MAX_SUCCESS_BANNER_SECS, self.success_banner_secs
            )));
        }
        Ok(())
    }

    pub fn success_banner_ttl(&self) -> Duration {
        Duration::from_secs(self.success_banner_secs)
    }
}
