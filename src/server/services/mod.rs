use std::sync::Arc;

use tracing::info;

use crate::{
    config::AppConfig,
    database::{Database, clock::DynClockRepository},
};

use self::{
    data_services::{DataService, DynDataService},
    health_services::{DynHealthService, HealthService},
    metrics_services::{DynMetricsService, MetricsService},
};

pub mod data_services;
pub mod health_services;
pub mod metrics_services;

// list of services that we are using
#[derive(Clone)]
pub struct Services {
    pub health: DynHealthService,
    pub metrics: DynMetricsService,
    pub data: DynDataService,
    pub config: Arc<AppConfig>,
}

impl Services {
    pub fn new(db: Database, config: Arc<AppConfig>) -> Self {
        Self::with_clock(Arc::new(db) as DynClockRepository, config)
    }

    // split out so tests can hand in a mocked clock instead of a pool
    pub fn with_clock(clock: DynClockRepository, config: Arc<AppConfig>) -> Self {
        info!("starting services...");

        let health = Arc::new(HealthService::new()) as DynHealthService;
        let metrics = Arc::new(MetricsService::new(config.cargo_env)) as DynMetricsService;
        let data = Arc::new(DataService::new(clock)) as DynDataService;

        Self {
            health,
            metrics,
            data,
            config,
        }
    }
}
