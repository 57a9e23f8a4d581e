use std::env;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind
    pub host: String,

    /// TCP port to bind
    pub port: u16,

    /// Single origin allowed for cross-origin requests, any origin when unset
    pub allowed_origin: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port '{0}'")]
    InvalidPort(String),
    #[error("invalid allowed origin '{0}', expected e.g. http://localhost:5500")]
    InvalidOrigin(String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origin: None,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// # Environment
    /// * `QUIZGEN_HOST` - bind address, default `127.0.0.1`
    /// * `QUIZGEN_PORT` - bind port, default `8000`
    /// * `QUIZGEN_ALLOWED_ORIGIN` - CORS origin, default any
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(host) = non_empty(lookup("QUIZGEN_HOST")) {
            config.host = host;
        }

        if let Some(port) = non_empty(lookup("QUIZGEN_PORT")) {
            config.port = parse_port(&port)?;
        }

        if let Some(origin) = non_empty(lookup("QUIZGEN_ALLOWED_ORIGIN")) {
            config.allowed_origin = Some(parse_origin(&origin)?);
        }

        Ok(config)
    }

    /// Apply a port given on the command line
    pub fn with_port_arg(mut self, arg: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(port) = arg {
            self.port = parse_port(port)?;
        }
        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort(value.to_string()))
}

/// An origin is a scheme and host, plus an optional port, with no path
fn parse_origin(value: &str) -> Result<String, ConfigError> {
    let host = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"));

    match host {
        Some(host)
            if !host.is_empty()
                && !host.contains('/')
                && host.chars().all(|c| c.is_ascii_graphic()) =>
        {
            Ok(value.to_string())
        }
        _ => Err(ConfigError::InvalidOrigin(value.to_string())),
    }
}
