mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Loads configuration from the YAML file at `CONFIG_PATH` (default
/// `config.yaml`), falling back to defaults when the file is absent.
/// `GEMINI_API_KEY` and `PORT` environment variables override the file.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => {
            debug!("Loading configuration from: {}", config_path);
            serde_yaml::from_str(&config_str)?
        }
        Err(_) => {
            debug!("No configuration file at {}, using defaults", config_path);
            Config::default()
        }
    };

    if let Ok(api_key) = env::var("GEMINI_API_KEY") {
        config.gemini.api_key = api_key;
    }

    if let Ok(port) = env::var("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    if config.gemini.api_key.is_empty() {
        return Err(Error::config(
            "Missing Gemini API key: set GEMINI_API_KEY or gemini.api_key in the config file",
        ));
    }

    Ok(config)
}
