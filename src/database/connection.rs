use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::{PgPool, Postgres};
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::config::AppConfig;

use super::{StoreError, StoreResult};

#[derive(Debug, Clone)]
pub struct Database {
    pub pool: PgPool,
    pub query_timeout: Duration,
    host: String,
    port: u16,
    connect_timeout: Duration,
}

impl Database {
    /// Builds the pool without touching the network. Connections are opened on first
    /// use, so a missing db never holds up or kills startup.
    pub fn connect_lazy(config: &AppConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .database(&config.db_name)
            .username(&config.db_user)
            .password(&config.db_password);

        info!(
            "lazy postgres pool for {}:{}/{} (max {} connections)",
            config.db_host, config.db_port, config.db_name, config.db_max_connections
        );

        let connect_timeout = Duration::from_secs(config.db_acquire_timeout_secs);

        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(connect_timeout)
            .connect_lazy_with(options);

        Self {
            pool,
            query_timeout: Duration::from_secs(config.db_query_timeout_secs),
            host: config.db_host.clone(),
            port: config.db_port,
            connect_timeout,
        }
    }

    /// Checks a connection out of the pool, it goes back when the guard drops.
    ///
    /// An idle connection is handed out straight away. Otherwise the pool would open
    /// one and sqlx keeps retrying a refused connect until the acquire deadline, so one
    /// plain tcp connect goes first and a refusal comes back as `Unavailable` at once.
    pub async fn acquire(&self) -> StoreResult<PoolConnection<Postgres>> {
        if let Some(conn) = self.pool.try_acquire() {
            return Ok(conn);
        }

        self.ensure_reachable().await?;

        Ok(self.pool.acquire().await?)
    }

    // single attempt, no backoff
    async fn ensure_reachable(&self) -> StoreResult<()> {
        let addr = (self.host.as_str(), self.port);

        match tokio::time::timeout(self.connect_timeout, TcpStream::connect(addr)).await {
            Ok(Ok(_stream)) => Ok(()),
            Ok(Err(e)) => {
                debug!("postgres at {}:{} refused: {e}", self.host, self.port);
                Err(StoreError::Unavailable(e.to_string()))
            }
            Err(_) => Err(StoreError::Unavailable(format!(
                "connect to {}:{} took longer than {:?}",
                self.host, self.port, self.connect_timeout
            ))),
        }
    }

    /// Runs one statement on a pooled connection, binding `params` in order as text.
    pub async fn query(&self, sql: &str, params: &[&str]) -> StoreResult<Vec<PgRow>> {
        let mut conn = self.acquire().await?;

        let mut query = sqlx::query(sql);
        for param in params {
            query = query.bind(*param);
        }

        // conn is released on both arms when it falls out of scope
        let rows = query.fetch_all(&mut *conn).await?;

        Ok(rows)
    }

    /// Returns (open, idle, max) connection counts
    pub fn pool_stats(&self) -> (u32, usize, u32) {
        (
            self.pool.size(),
            self.pool.num_idle(),
            self.pool.options().get_max_connections(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use clap::Parser;

    use super::*;

    fn unreachable_database() -> Database {
        // nothing listens on port 1
        let config = AppConfig::try_parse_from([
            "backend-api",
            "--db-host",
            "127.0.0.1",
            "--db-port",
            "1",
        ])
        .unwrap();
        Database::connect_lazy(&config)
    }

    #[tokio::test]
    async fn refused_connect_fails_once_and_fast() {
        let database = unreachable_database();

        let start = Instant::now();
        let result = database.acquire().await;

        assert!(matches!(result, Err(StoreError::Unavailable(_))));
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn failed_query_leaves_no_connection_behind() {
        let database = unreachable_database();

        for _ in 0..3 {
            let result = database.query("SELECT $1::text AS echoed", &["hello"]).await;
            assert!(matches!(result, Err(StoreError::Unavailable(_))));
        }

        let (open, idle, max) = database.pool_stats();
        assert_eq!(open, 0);
        assert_eq!(idle, 0);
        assert_eq!(max, 10);
    }
}
