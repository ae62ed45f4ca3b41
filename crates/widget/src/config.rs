use std::{env, fs, path::Path};

use eyre::{Result, WrapErr};
use slotbook_core::models::config::BookingConfig;
use tracing::Level;

/// Environment variable naming the JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "SLOTBOOK_CONFIG";

/// Load the widget configuration from the file named by `SLOTBOOK_CONFIG`.
///
/// The file holds a [`BookingConfig`] in the widget's JSON wire form.
/// Contract validation happens later, at widget construction; this only
/// reads and parses.
pub fn load_config() -> Result<BookingConfig> {
    let path = env::var(CONFIG_ENV_VAR)
        .wrap_err("SLOTBOOK_CONFIG environment variable not set")?;
    load_config_from(&path)
}

/// Load the widget configuration from an explicit path.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<BookingConfig> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&raw)
        .wrap_err_with(|| format!("Failed to parse config file {}", path.display()))
}

/// Log level from the `LOG_LEVEL` environment variable (default: info).
pub fn log_level() -> Level {
    match env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
