//! Application configuration.

/// Config file schema and defaults.
pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Loading and seeding `config.toml`.
pub mod storage;

pub use app_config::{ApiConfig, AppConfig, LogLevel, ThemeConfig, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
