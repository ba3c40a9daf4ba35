use std::sync::Arc;

use mockall::automock;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};
use tracing::warn;

use crate::config::CargoEnv;
use crate::server::dtos::metrics_dto::{MemoryUsage, ResourceSample};
use crate::server::get_uptime_seconds;
use crate::server::utils::alloc_utils::{HeapStats, heap_stats};

pub type DynMetricsService = Arc<dyn MetricsServiceTrait + Send + Sync>;

#[automock]
pub trait MetricsServiceTrait {
    fn get_metrics(&self) -> ResourceSample;
}

#[derive(Clone)]
pub struct MetricsService {
    environment: CargoEnv,
}

impl MetricsService {
    pub fn new(environment: CargoEnv) -> Self {
        Self { environment }
    }
}

impl MetricsServiceTrait for MetricsService {
    fn get_metrics(&self) -> ResourceSample {
        // no failure mode here, a broken stats read just reports zeros
        let heap = heap_stats().unwrap_or_else(|e| {
            warn!("couldn't read jemalloc stats: {e}");
            HeapStats::default()
        });

        ResourceSample {
            uptime: get_uptime_seconds(),
            memory: MemoryUsage::from_bytes(resident_bytes(), heap.allocated, heap.active),
            environment: self.environment.as_str().to_string(),
        }
    }
}

// fresh System every call, only our own pid and only its memory gets refreshed
fn resident_bytes() -> u64 {
    let Ok(pid) = sysinfo::get_current_pid() else {
        return 0;
    };

    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing().with_memory(),
    );

    system.process(pid).map(|process| process.memory()).unwrap_or(0)
}
