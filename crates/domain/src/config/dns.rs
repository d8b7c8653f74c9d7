use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

use super::errors::ConfigError;

pub const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upstream resolvers, tried all at once for every cache miss.
    ///
    /// Entries are `ip:port` or a bare IP, which implies port 53.
    #[serde(default = "default_forwarders")]
    pub forwarders: Vec<String>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            forwarders: default_forwarders(),
        }
    }
}

impl DnsConfig {
    pub fn forwarder_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.forwarders
            .iter()
            .map(|raw| parse_forwarder(raw))
            .collect()
    }
}

fn parse_forwarder(raw: &str) -> Result<SocketAddr, ConfigError> {
    let raw = raw.trim();
    if let Ok(addr) = raw.parse::<SocketAddr>() {
        return Ok(addr);
    }
    raw.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| ConfigError::Validation(format!("Invalid forwarder address '{}'", raw)))
}

fn default_forwarders() -> Vec<String> {
    vec!["1.1.1.1:53".to_string()]
}
