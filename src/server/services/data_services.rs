use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use crate::database::clock::DynClockRepository;
use crate::server::dtos::data_dto::{DataResponse, SampleRecord};

const LIVE_RECORDS: u32 = 3;
const DEGRADED_RECORDS: u32 = 2;

pub type DynDataService = Arc<dyn DataServiceTrait + Send + Sync>;

#[automock]
#[async_trait]
pub trait DataServiceTrait {
    /// Never fails: a store problem turns into the degraded payload.
    async fn get_data(&self) -> DataResponse;
}

#[derive(Clone)]
pub struct DataService {
    repository: DynClockRepository,
}

impl DataService {
    pub fn new(repository: DynClockRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DataServiceTrait for DataService {
    async fn get_data(&self) -> DataResponse {
        // one attempt, no retries
        match self.repository.current_time().await {
            Ok(now) => {
                info!("db clock ok, stamping sample data with {now}");
                DataResponse {
                    records: (1..=LIVE_RECORDS)
                        .map(|id| SampleRecord::stamped(id, now))
                        .collect(),
                    degraded: false,
                }
            }
            Err(e) => {
                warn!("db unreachable, serving degraded sample data: {e}");
                DataResponse {
                    records: (1..=DEGRADED_RECORDS)
                        .map(SampleRecord::disconnected)
                        .collect(),
                    degraded: true,
                }
            }
        }
    }
}
