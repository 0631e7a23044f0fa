//! Infrastructure layer with external service adapters.

/// Comparison service HTTP client.
pub mod api;
/// Detail page launcher.
pub mod browser;
/// Application configuration.
pub mod config;

pub use api::CompareClient;
pub use browser::{BrowserError, BrowserService};
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
