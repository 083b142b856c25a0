//! Server configuration
//!
//! Loaded from a TOML file with environment variable overrides.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use errand_core::DatabaseConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "127.0.0.1:8080")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Task store configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Secret used to validate inbound credentials
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            database: DatabaseConfig::default(),
            jwt_secret: default_jwt_secret(),
        }
    }
}

// Configuration error types
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found")]
    #[diagnostic(
        code(errand::config::file_not_found),
        help("Create a configuration file at one of the expected locations")
    )]
    FileNotFound { searched_paths: Vec<PathBuf> },

    #[error("Failed to read configuration file")]
    #[diagnostic(code(errand::config::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    #[error("Failed to parse configuration")]
    #[diagnostic(code(errand::config::parse_failed))]
    ParseFailed {
        path: PathBuf,
        #[source]
        cause: toml::de::Error,
    },
}

impl ServerConfig {
    /// Load configuration from file with environment variable overrides
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ConfigError::ReadFailed {
                    path: path.to_path_buf(),
                    cause: e,
                })?;

        let mut config: ServerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
                path: path.to_path_buf(),
                cause: e,
            })?;

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load configuration from default locations
    pub async fn load_default() -> Result<Self, ConfigError> {
        let search_paths = vec![
            PathBuf::from("errand.toml"),
            PathBuf::from("config/errand.toml"),
            dirs::config_dir()
                .map(|d| d.join("errand/errand.toml"))
                .unwrap_or_default(),
            PathBuf::from("/etc/errand/errand.toml"),
        ];

        for path in &search_paths {
            if path.exists() {
                return Self::load(path).await;
            }
        }

        Err(ConfigError::FileNotFound {
            searched_paths: search_paths,
        })
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(addr) = std::env::var("ERRAND_BIND_ADDRESS") {
            self.bind_address = addr;
        }

        if let Ok(secret) = std::env::var("ERRAND_JWT_SECRET") {
            self.jwt_secret = secret;
        }

        if let Ok(path) = std::env::var("ERRAND_DATABASE_PATH") {
            self.database = DatabaseConfig::Embedded { path };
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_jwt_secret() -> String {
    "change-me-in-production".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = ServerConfig::default();

        let serialized = toml::to_string(&config).unwrap();
        let deserialized: ServerConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(deserialized.bind_address, config.bind_address);
        assert_eq!(deserialized.jwt_secret, config.jwt_secret);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080");

        let config: ServerConfig = toml::from_str(
            r#"
            bind_address = "0.0.0.0:3000"

            [database]
            type = "embedded"
            path = "/var/lib/errand/errand.db"
        "#,
        )
        .unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        match config.database {
            DatabaseConfig::Embedded { path } => {
                assert_eq!(path, "/var/lib/errand/errand.db")
            }
            _ => panic!("Expected embedded config"),
        }
    }
}
