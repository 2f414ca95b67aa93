// region:    --- Imports
use sqlx::postgres::PgConnectOptions;
use std::net::SocketAddr;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid data source name '{0}', expected host[:port]/database")]
    InvalidDsn(String),

    #[error("invalid listen address: {0}")]
    InvalidAddr(String),
}
// endregion: --- Errors

// region:    --- Config
/// Database credentials and connection target.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    /// `host[:port]/database`
    pub dsn: String,
}

impl DatabaseConfig {
    /// Builds driver connect options from the data source name.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let invalid = || ConfigError::InvalidDsn(self.dsn.clone());

        let (address, database) = self.dsn.split_once('/').ok_or_else(invalid)?;
        if database.is_empty() || database.contains('/') {
            return Err(invalid());
        }

        let (host, port) = match address.rsplit_once(':') {
            Some((host, port)) => (host, Some(port.parse::<u16>().map_err(|_| invalid())?)),
            None => (address, None),
        };
        if host.is_empty() {
            return Err(invalid());
        }

        let mut options = PgConnectOptions::new()
            .host(host)
            .username(&self.user)
            .password(&self.password)
            .database(database);
        if let Some(port) = port {
            options = options.port(port);
        }
        Ok(options)
    }
}

/// Process configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub bootstrap_schema: bool,
    pub host: String,
    pub port: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let required = |key: &'static str| std::env::var(key).map_err(|_| ConfigError::Missing(key));

        let database = DatabaseConfig {
            user: required("AUCTION_DB_USER")?,
            password: required("AUCTION_DB_PASSWORD")?,
            dsn: required("AUCTION_DB_DSN")?,
        };
        let bootstrap_schema = std::env::var("AUCTION_DB_BOOTSTRAP")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            database,
            bootstrap_schema,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("APP_PORT").unwrap_or_else(|_| "3000".into()),
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddr(addr))
    }
}
// endregion: --- Config

// endregion: --- Tests
