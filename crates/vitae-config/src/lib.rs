mod account_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use account_config::AccountConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "VITAE_CONFIG_DIR";
const DEFAULT_CONFIG_DIRNAME: &str = ".vitae";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_DIR: &str = "data";

const DEFAULT_BOOTSTRAP_ENABLED: bool = true;
const DEFAULT_BOOTSTRAP_EMAIL: &str = "admin@email.com";
const DEFAULT_BOOTSTRAP_PASSWORD: &str = "123";
const DEFAULT_BOOTSTRAP_NAME: &str = "Administrador";

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
