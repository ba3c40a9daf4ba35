use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::automock;

use crate::database::StoreResult;

pub type DynClockRepository = Arc<dyn ClockRepository + Send + Sync>;

// the only thing we read from postgres is its clock, doubling as the liveness probe
#[automock]
#[async_trait]
pub trait ClockRepository {
    async fn current_time(&self) -> StoreResult<DateTime<Utc>>;
}
