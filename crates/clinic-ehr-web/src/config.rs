//! Runtime configuration.
//!
//! The only external knob is the listening port, read from `PORT`. The
//! database path is a fixed default so the binary and tests share one
//! config type.

use std::env;
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_PATH: &str = "health.db";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_path: PathBuf,
}

impl ServerConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("invalid PORT value: {value:?}"))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            port,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }
}
