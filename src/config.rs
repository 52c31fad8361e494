// src/config.rs
use std::{env, fmt, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    host: String,
    port: u16,
    is_development: bool,
    proxy_header: Option<String>,
    database: DatabaseConfig,
    log_fields: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub driver: DatabaseDriver,
    pub dsn: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatabaseDriver {
    Sqlite,
    Postgres,
}

impl FromStr for DatabaseDriver {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(ConfigError::Invalid(format!(
                "DB_DRIVER must be sqlite or postgres, got {other:?}"
            ))),
        }
    }
}

impl fmt::Display for DatabaseDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => f.write_str("sqlite"),
            Self::Postgres => f.write_str("postgres"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_dsn() -> String {
    "sqlite::memory:".into()
}

fn default_log_fields() -> Vec<String> {
    ["ip", "latency", "status", "method", "url", "error"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty("HOST").unwrap_or_else(default_host);
        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid(format!("PORT must be a port number, got {raw:?}")))?,
            None => default_port(),
        };
        let is_development = non_empty("IS_DEVELOPMENT").is_some_and(|v| parse_bool(&v));
        let proxy_header = non_empty("PROXY_HEADER").map(|v| v.trim().to_string());

        let driver = match non_empty("DB_DRIVER") {
            Some(raw) => raw.parse::<DatabaseDriver>()?,
            None => DatabaseDriver::Sqlite,
        };
        let dsn = non_empty("DB_DSN").unwrap_or_else(default_dsn);

        let log_fields = non_empty("LOG_FIELDS")
            .map(|v| parse_list(&v))
            .unwrap_or_else(default_log_fields);

        Ok(Self {
            host,
            port,
            is_development,
            proxy_header,
            database: DatabaseConfig { driver, dsn },
            log_fields,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.is_development
    }

    /// Header trusted to carry the client address when running behind a proxy.
    pub fn proxy_header(&self) -> Option<&str> {
        self.proxy_header.as_deref()
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }

    pub fn log_fields(&self) -> &[String] {
        &self.log_fields
    }
}
