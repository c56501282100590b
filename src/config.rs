use std::env;
use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Result, anyhow};

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the HTTP server binds on.
    pub port: u16,
    /// Optional path to a JSON snapshot loaded into the store at boot.
    pub snapshot_path: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            port: env_or("SEARCH_PORT", "8080")?,
            snapshot_path: env::var("SEARCH_SNAPSHOT").ok(),
        })
    }
}

/// Reads `key` from the environment, falling back to `default`, then
/// parses. A present but malformed value fails startup.
fn env_or<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = match env::var(key) {
        Ok(value) => value,
        Err(_) => {
            tracing::info!("{} not set, using default {}", key, default);
            default.to_string()
        }
    };
    raw.parse()
        .map_err(|err| anyhow!("invalid {} value {:?}: {}", key, raw, err))
}
