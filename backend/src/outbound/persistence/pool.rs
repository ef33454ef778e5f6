//! bb8-backed connection pool for the SQLite item store.
//!
//! SQLite only speaks a synchronous API, so every pooled connection is a
//! [`SyncConnectionWrapper`] that shifts Diesel work onto the blocking thread
//! pool while the handlers stay on the async runtime. The pool size defaults
//! are deliberately small: a file-backed SQLite database admits one writer at
//! a time, so a large pool buys contention rather than throughput.

use std::time::Duration;

use diesel::sqlite::SqliteConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;

/// Async-compatible SQLite connection used throughout the persistence layer.
pub type AsyncSqliteConnection = SyncConnectionWrapper<SqliteConnection>;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MIN_IDLE: u32 = 1;
const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while building the pool or checking out a connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// The pool could not be constructed at startup.
    #[error("could not build SQLite connection pool: {message}")]
    Build { message: String },

    /// No connection became available within the checkout timeout.
    #[error("could not check out SQLite connection: {message}")]
    Checkout { message: String },
}

/// Sizing and timeout knobs for [`DbPool`].
///
/// ```
/// use std::time::Duration;
///
/// use backend::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("items.db").with_checkout_timeout(Duration::from_secs(5));
/// assert_eq!(config.database_url(), "items.db");
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_connections: u32,
    min_idle: Option<u32>,
    checkout_timeout: Duration,
}

impl PoolConfig {
    /// Configuration for the store at `database_url`, sized for a
    /// single-writer SQLite file: five connections at most, one kept idle,
    /// thirty-second checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_idle: Some(DEFAULT_MIN_IDLE),
            checkout_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }

    /// Cap the number of open connections.
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Keep at least this many connections idle, or `None` to let the pool
    /// drain completely between requests.
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Bound how long a checkout may wait for a free connection.
    pub fn with_checkout_timeout(mut self, timeout: Duration) -> Self {
        self.checkout_timeout = timeout;
        self
    }

    /// The configured database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Cloneable handle to the shared SQLite connection pool.
///
/// ```no_run
/// use backend::outbound::persistence::{DbPool, PoolConfig};
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = DbPool::new(PoolConfig::new("items.db")).await?;
/// let _conn = pool.get().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DbPool {
    pool: Pool<AsyncSqliteConnection>,
}

impl DbPool {
    /// Build the pool described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when the pool cannot be constructed, for
    /// example because the database path is not writable.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager =
            AsyncDieselConnectionManager::<AsyncSqliteConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_connections)
            .min_idle(config.min_idle)
            .connection_timeout(config.checkout_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::Build {
                message: err.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Check out a connection.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] when no connection becomes available
    /// within the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncSqliteConnection>, PoolError> {
        self.pool.get().await.map_err(|err| PoolError::Checkout {
            message: err.to_string(),
        })
    }
}
