mod admin_config;
mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod ui_config;
mod web_config;

#[cfg(test)]
mod tests;

pub use admin_config::AdminConfig;
pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use ui_config::UiConfig;
pub use web_config::WebConfig;

const CONFIG_DIR_ENV: &str = "LEADSITE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".leadsite";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_AUTH_PREFIX: &str = "/api/auth";

const DEFAULT_SESSION_FILENAME: &str = "session.json";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;

const DEFAULT_CONFIRMATION_PHRASE: &str = "RESET ALL USERS";

const DEFAULT_SUCCESS_BANNER_SECS: u64 = 3;
const MIN_SUCCESS_BANNER_SECS: u64 = 1;
const MAX_SUCCESS_BANNER_SECS: u64 = 60;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
