use std::sync::Arc;

use chrono::Utc;
use mockall::automock;

use crate::server::dtos::health_dto::{HealthStatus, SERVICE_NAME, ServiceIdentity};
use crate::server::get_app_version;

pub type DynHealthService = Arc<dyn HealthServiceTrait + Send + Sync>;

// liveness only, never goes near the db so a k8s probe can't be failed by postgres
#[automock]
pub trait HealthServiceTrait {
    fn get_health(&self) -> ServiceIdentity;
}

#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }
}

impl HealthServiceTrait for HealthService {
    fn get_health(&self) -> ServiceIdentity {
        ServiceIdentity {
            status: HealthStatus::Healthy,
            service: SERVICE_NAME.to_string(),
            timestamp: Utc::now(),
            version: get_app_version().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_identity_and_current_time() {
        let before = Utc::now();
        let identity = HealthService::new().get_health();

        assert_eq!(identity.status, HealthStatus::Healthy);
        assert_eq!(identity.service, "backend-api");
        assert_eq!(identity.version, "1.0.0");
        assert!(identity.timestamp >= before);
    }
}
