use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::responder::ResponderConfig;
use super::server::ServerConfig;
use crate::Record;

const LOCAL_CONFIG_PATH: &str = "ferrous-mdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-mdns/config.toml";

/// Main configuration structure for Ferrous mDNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Socket configuration (port, group, interface)
    #[serde(default)]
    pub server: ServerConfig,

    /// Response suppression settings
    #[serde(default)]
    pub responder: ResponderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Records advertised from start-up
    #[serde(default)]
    pub records: Vec<Record>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-mdns.toml in current directory
    /// 3. /etc/ferrous-mdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(interface) = overrides.interface {
            self.server.interface = Some(interface);
        }
        if let Some(window) = overrides.cache_window_ms {
            self.responder.cache_window_ms = window;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.multicast {
            if self.server.port == 0 {
                return Err(ConfigError::Validation(
                    "Port cannot be 0 in multicast mode".to_string(),
                ));
            }
            if !self.server.multicast_address.is_multicast() {
                return Err(ConfigError::Validation(format!(
                    "{} is not a multicast address",
                    self.server.multicast_address
                )));
            }
        }

        if self.server.max_packet_size == 0 {
            return Err(ConfigError::Validation(
                "max_packet_size cannot be 0".to_string(),
            ));
        }

        if let Some(record) = self.records.iter().find(|r| r.name.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "{} record has an empty name",
                record.record_type()
            )));
        }

        if let Some((record, named)) = self
            .records
            .iter()
            .find_map(|r| r.data.shadowed_type().map(|named| (r, named)))
        {
            return Err(ConfigError::Validation(format!(
                "Record '{}' uses an opaque payload for {}; use type = \"{}\"",
                record.name, named, named
            )));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<IpAddr>,
    pub interface: Option<Ipv4Addr>,
    pub cache_window_ms: Option<u64>,
    pub log_level: Option<String>,
}
