use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line overrides, applied on top of the config file.
#[derive(Debug, Parser)]
#[command(
    name = "lettucewatch",
    version,
    about = "Compare two Letterboxd watchlists and swipe through the movies you both want to see",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the comparison service.
    #[arg(long, value_name = "URL", env = "LETTUCEWATCH_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
