//! Application configuration
//!
//! Environment variables:
//! - `STOREFRONT_HOST`: address to bind (default `0.0.0.0`)
//! - `STOREFRONT_PORT`: port to bind (default `8000`)
//! - `STOREFRONT_CATALOG`: optional JSON catalog file; the built-in catalog is
//!   used when unset
//! - `STOREFRONT_LOG`: log filter used when `RUST_LOG` is unset (default `info`)

use crate::catalog::{data::builtin_catalog, provider::Catalog, provider::CatalogError};
use std::{env, path::PathBuf};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("STOREFRONT_PORT must be a port number, got `{0}`")]
    InvalidPort(String),
}

/// Server configuration for the HTTP listener
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Bind address as "host:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog_path: Option<PathBuf>,
    pub log_filter: String,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, treating empty values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("STOREFRONT_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            server: ServerConfig {
                host: get("STOREFRONT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
            catalog_path: get("STOREFRONT_CATALOG").map(PathBuf::from),
            log_filter: get("STOREFRONT_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    /// Builds the catalog this configuration points at.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading catalog file");
                Catalog::from_json_file(path)
            }
            None => builtin_catalog(),
        }
    }
}
