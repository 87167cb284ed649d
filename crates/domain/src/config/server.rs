use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_web_port")]
    pub web_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_true")]
    pub web_enabled: bool,

    /// Upper bound on queries being processed at once. `0` means unbounded;
    /// when the bound is hit new datagrams are dropped.
    #[serde(default)]
    pub max_in_flight: usize,

    /// Deadline for a single record-store lookup in milliseconds. `0`
    /// disables the deadline.
    #[serde(default)]
    pub lookup_timeout_ms: u64,
}

impl ServerConfig {
    pub fn dns_addr(&self) -> String {
        self.socket_addr(self.dns_port)
    }

    pub fn web_addr(&self) -> String {
        self.socket_addr(self.web_port)
    }

    fn socket_addr(&self, port: u16) -> String {
        if self.bind_address.contains(':') {
            format!("[{}]:{}", self.bind_address, port)
        } else {
            format!("{}:{}", self.bind_address, port)
        }
    }

    pub fn lookup_timeout(&self) -> Option<Duration> {
        (self.lookup_timeout_ms > 0).then(|| Duration::from_millis(self.lookup_timeout_ms))
    }

    pub fn in_flight_limit(&self) -> Option<usize> {
        (self.max_in_flight > 0).then_some(self.max_in_flight)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: default_dns_port(),
            web_port: default_web_port(),
            bind_address: default_bind_address(),
            web_enabled: true,
            max_in_flight: 0,
            lookup_timeout_ms: 0,
        }
    }
}

fn default_dns_port() -> u16 {
    53
}

fn default_web_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_true() -> bool {
    true
}
