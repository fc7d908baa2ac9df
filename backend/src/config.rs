use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "frontend/dist";
const CATALOG_FILE: &str = "resources.json";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),
    #[error("Invalid HOST value '{0}'")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Built frontend (trunk `dist/`), served with an `index.html` fallback.
    pub static_dir: PathBuf,
    pub catalog_path: PathBuf,
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|port| *port != 0)
                .ok_or(ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let host = match non_empty("HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let static_dir = non_empty("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let catalog_path = non_empty("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| static_dir.join(CATALOG_FILE));

        Ok(Self {
            host,
            port,
            static_dir,
            catalog_path,
            sentry_dsn: non_empty("SENTRY_DSN"),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
