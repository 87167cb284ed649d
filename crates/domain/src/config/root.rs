use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::local_records::LocalRecord;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::wire::encode_name;

const LOCAL_CONFIG_PATH: &str = "flipdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/flipdns/config.toml";

/// Main configuration structure for flipdns
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen addresses and query-processing limits
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Optional SQLite backing for the record store
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Static A records served from the start
    #[serde(default)]
    pub records: Vec<LocalRecord>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            database: DatabaseConfig::default(),
            records: vec![LocalRecord::new("example.com", "192.168.2.143", Some(60))],
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. flipdns.toml in current directory
    /// 3. /etc/flipdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.web_enabled && self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Invalid bind address '{}'",
                self.server.bind_address
            )));
        }

        for record in &self.records {
            encode_name(&record.normalized_domain()).map_err(|e| {
                ConfigError::Validation(format!(
                    "Record '{}' ({}) has an invalid domain: {}",
                    record.domain, record.ip, e
                ))
            })?;
        }

        Ok(())
    }

    /// Get the path to the configuration file that `load` would pick up
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
