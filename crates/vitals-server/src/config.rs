use std::net::SocketAddr;

/// Default bind host when `VITALS_HOST` is not set.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port when `VITALS_PORT` is not set.
pub const DEFAULT_PORT: u16 = 8080;

/// Startup configuration error. Any of these terminates the process.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid VITALS_PORT {0:?}: {1}")]
    InvalidPort(String, std::num::ParseIntError),

    #[error("invalid listen address {0:?}: {1}")]
    InvalidAddr(String, std::net::AddrParseError),
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
}

impl ListenConfig {
    /// Read the listen address from the environment, falling back to the
    /// defaults (all interfaces, port 8080).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("VITALS_HOST").ok(),
            std::env::var("VITALS_PORT").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port {
            Some(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidPort(raw, e))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// Resolve the configured host and port to a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| ConfigError::InvalidAddr(addr, e))
    }
}
