use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::store::StoreConfig;

const LOCAL_CONFIG_PATH: &str = "bramble-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/bramble-dns/config.toml";

/// Main configuration structure for Bramble DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listen addresses and ports
    #[serde(default)]
    pub server: ServerConfig,

    /// Record snapshot location
    #[serde(default)]
    pub store: StoreConfig,

    /// Upstream forwarding
    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. bramble-dns.toml in current directory
    /// 3. /etc/bramble-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
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
        if let Some(dir) = overrides.rw_dir {
            self.store.rw_dir = dir;
        }
        if let Some(forwarders) = overrides.forwarders {
            if !forwarders.is_empty() {
                self.dns.forwarders = forwarders;
            }
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        self.server.dns_addr()?;

        if self.dns.forwarders.is_empty() {
            return Err(ConfigError::Validation(
                "No forwarders configured".to_string(),
            ));
        }

        self.dns.forwarder_addrs()?;

        if self.store.rw_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "Store directory cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub rw_dir: Option<PathBuf>,
    pub forwarders: Option<Vec<String>>,
    pub log_level: Option<String>,
}
