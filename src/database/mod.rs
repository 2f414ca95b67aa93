use crate::config::{ConfigError, DatabaseConfig};
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection, Executor};
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, warn};

/// Opens one connection per unit of work. There is no pool.
#[derive(Clone)]
pub struct DatabaseManager {
    options: PgConnectOptions,
}

impl DatabaseManager {
    /// Creates a manager from the static database configuration
    pub fn new(config: &DatabaseConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            options: config.connect_options()?,
        })
    }

    /// Opens a fresh connection
    pub async fn connect(&self) -> Result<PgConnection, sqlx::Error> {
        debug!("{:<12} --> opening connection", "Database");
        self.options.connect().await
    }

    /// Runs `f` on a fresh connection and closes it on every exit path.
    ///
    /// A failed connect is returned as is; there is nothing to close then.
    pub async fn with_connection<F, R, E>(&self, f: F) -> Result<R, E>
    where
        F: for<'c> FnOnce(
            &'c mut PgConnection,
        ) -> Pin<Box<dyn Future<Output = Result<R, E>> + Send + 'c>>,
        E: From<sqlx::Error>,
    {
        let mut conn = self.connect().await?;
        let result = f(&mut conn).await;
        if let Err(e) = conn.close().await {
            warn!("{:<12} --> failed to close connection: {}", "Database", e);
        }
        result
    }

    /// Applies the bundled reference schema
    pub async fn initialize_database(&self) -> Result<(), sqlx::Error> {
        let schema_sql = include_str!("../../sql/schema.sql");
        self.with_connection(|conn| {
            Box::pin(async move {
                // the procedure bodies contain semicolons, so the file is sent as one batch
                conn.execute(schema_sql).await?;
                Ok::<_, sqlx::Error>(())
            })
        })
        .await
    }
}
