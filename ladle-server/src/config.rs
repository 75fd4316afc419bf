//! Server configuration from the environment

use std::env;
use tracing::{info, warn};

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the server binds to
    pub addr: String,

    /// Store URL handed to `ladle_core::store::open`
    pub store_url: String,
}

impl Config {
    /// Load configuration, falling back to defaults for anything unset
    ///
    /// A `.env` file in the working directory is applied first when present.
    pub fn load() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file loaded: {}", e);
        }

        Self {
            addr: env_or("LADLE_ADDR", "0.0.0.0:8080"),
            store_url: env_or("LADLE_STORE_URL", "memory:"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            info!("{} not set, using default: {}", key, default);
            default.to_string()
        }
    }
}
