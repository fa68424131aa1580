//! Server configuration from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5100;
pub const DEFAULT_DATABASE_PATH: &str = "dogshelter.db";
pub const DEFAULT_SITE_BASE_URL: &str = "https://tailspinshelter.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// SQLite file, or `:memory:`
    pub database_path: PathBuf,
    /// Absolute site URL used for sitemap locations, without trailing `/`
    pub site_base_url: String,
    /// Built frontend served for non-API paths
    pub static_dir: Option<PathBuf>,
    /// Insert demo breeds and dogs into an empty database
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            site_base_url: DEFAULT_SITE_BASE_URL.to_string(),
            static_dir: None,
            seed_demo_data: true,
        }
    }
}

fn invalid(key: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value, "expected true or false")),
    }
}

impl ServerConfig {
    /// Read configuration from process environment (after loading `.env`)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a key lookup; missing keys use defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("BIND_ADDR") {
            config.bind_addr = value.parse().map_err(|e| invalid("BIND_ADDR", &value, e))?;
        }
        if let Some(value) = lookup("PORT") {
            config.port = value.parse().map_err(|e| invalid("PORT", &value, e))?;
        }
        if let Some(value) = lookup("DATABASE_PATH").filter(|v| !v.trim().is_empty()) {
            config.database_path = PathBuf::from(value);
        }
        if let Some(value) = lookup("SITE_BASE_URL") {
            let trimmed = value.trim().trim_end_matches('/');
            if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                return Err(invalid("SITE_BASE_URL", &value, "must start with http:// or https://"));
            }
            config.site_base_url = trimmed.to_string();
        }
        config.static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        if let Some(value) = lookup("SEED_DEMO_DATA") {
            config.seed_demo_data = parse_bool("SEED_DEMO_DATA", &value)?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
