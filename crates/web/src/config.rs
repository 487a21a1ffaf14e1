use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use storage::StorageBackend;

const DEFAULT_DATA_DIR: &str = "data/gc";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub api_keys: String,
    pub admin_username: String,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match var("PORT") {
            Some(port) => port.parse().context("PORT must be a number")?,
            None => 8080,
        };

        let storage = match var("STORAGE_BACKEND").as_deref().unwrap_or("file") {
            "file" => StorageBackend::JsonFile {
                dir: PathBuf::from(var("DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.into())),
            },
            "memory" => StorageBackend::Memory,
            other => bail!("Unknown STORAGE_BACKEND '{}', expected 'file' or 'memory'", other),
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            storage,
            api_keys: var("API_KEYS").unwrap_or_default(),
            admin_username: var("ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string()),
            admin_password: var("ADMIN_PASSWORD").filter(|p| !p.is_empty()),
        })
    }
}
