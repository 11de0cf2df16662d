use std::env;
use thiserror::Error;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 5000;
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

/// Raised when an environment variable holds a value we cannot use
#[derive(Debug, Error)]
#[error("{var} must be a valid port number, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source (used by tests).
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(env_vars::HOST)
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| defaults::HOST.to_string());

        let port = match lookup(env_vars::PORT) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError {
                var: env_vars::PORT,
                value: raw,
            })?,
            None => defaults::PORT,
        };

        Ok(Self { host, port })
    }

    /// Address tuple for `HttpServer::bind`
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
