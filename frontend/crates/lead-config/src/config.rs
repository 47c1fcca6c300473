use crate::{
    AdminConfig, ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, LoggingConfig, SessionConfig, UiConfig, WebConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub web: WebConfig,
    pub admin: AdminConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for LEADSITE_CONFIG_DIR env var, else use ./.leadsite/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply LEADSITE_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: LEADSITE_CONFIG_DIR env var > ./.leadsite/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        self.web.validate()?;
        self.admin.validate()?;
        self.ui.validate()?;
        Ok(())
    }

    /// Absolute path of the session storage file.
    pub fn session_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.file))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(filename) = &self.logging.file else {
            return Ok(None);
        };
        Ok(Some(
            Self::config_dir()?.join(&self.logging.dir).join(filename),
        ))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.web.host, self.web.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (auth prefix {})",
            self.api.base_url, self.api.auth_prefix
        );
        info!("  session: {}", self.session.file);
        info!("  web: {}:{}", self.web.host, self.web.port);
        info!(
            "  admin: secret {}",
            if self.admin.secret.is_some() {
                "configured"
            } else {
                "missing"
            }
        );
        info!("  ui: success banner {}s", self.ui.success_banner_secs);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("LEADSITE_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_string("LEADSITE_API_AUTH_PREFIX", &mut self.api.auth_prefix);

        // Session
        Self::apply_env_string("LEADSITE_SESSION_FILE", &mut self.session.file);

        // Web
        Self::apply_env_string("LEADSITE_WEB_HOST", &mut self.web.host);
        Self::apply_env_parse("LEADSITE_WEB_PORT", &mut self.web.port);

        // Admin
        Self::apply_env_option_string("LEADSITE_ADMIN_SECRET", &mut self.admin.secret);
        Self::apply_env_string(
            "LEADSITE_ADMIN_CONFIRMATION_PHRASE",
            &mut self.admin.confirmation_phrase,
        );

        // Ui
        Self::apply_env_parse(
            "LEADSITE_UI_SUCCESS_BANNER_SECS",
            &mut self.ui.success_banner_secs,
        );

        // Logging
        Self::apply_env_parse("LEADSITE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("LEADSITE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("LEADSITE_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
