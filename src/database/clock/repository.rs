use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use tracing::debug;

use crate::database::{Database, StoreError, StoreResult};

use super::ClockRepository;

#[async_trait]
impl ClockRepository for Database {
    async fn current_time(&self) -> StoreResult<DateTime<Utc>> {
        let rows = tokio::time::timeout(
            self.query_timeout,
            self.query("SELECT NOW() AS current_time", &[]),
        )
        .await
        .map_err(|_| StoreError::Timeout(self.query_timeout))??;

        let row = rows
            .first()
            .ok_or_else(|| StoreError::Query("NOW() returned no rows".to_string()))?;

        let now: DateTime<Utc> = row.try_get("current_time")?;

        let (open, idle, max) = self.pool_stats();
        debug!("db clock read {now}, pool {open}/{max} open, {idle} idle");

        Ok(now)
    }
}
