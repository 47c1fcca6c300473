use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_AUTH_PREFIX};

use serde::Deserialize;

/// Where the remote backend lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend base URL (e.g. "https://api.leadsite.io")
    pub base_url: String,
    /// Prefix for signup/login/password endpoints (`/api/auth` or `/auth`)
    pub auth_prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            auth_prefix: String::from(DEFAULT_AUTH_PREFIX),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if !self.auth_prefix.starts_with('/') {
            return Err(ConfigError::api(format!(
                "api.auth_prefix must start with '/', got '{}'",
                self.auth_prefix
            )));
        }

        Ok(())
    }

    /// Full path for an auth endpoint, e.g. `auth_path("login")` -> `/api/auth/login`
    pub fn auth_path(&self, endpoint: &str) -> String {
        format!("{}/{}", self.auth_prefix.trim_end_matches('/'), endpoint)
    }
}
