use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "backend-api";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Liveness payload for `/api/health`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ServiceIdentity {
    pub status: HealthStatus,
    pub service: String,
    #[serde(with = "super::iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn serializes_like_the_frontend_expects() {
        let identity = ServiceIdentity {
            status: HealthStatus::Healthy,
            service: SERVICE_NAME.to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            version: "1.0.0".to_string(),
        };

        let json = serde_json::to_value(&identity).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "status": "healthy",
                "service": "backend-api",
                "timestamp": "2026-01-02T03:04:05.000Z",
                "version": "1.0.0"
            })
        );
    }
}
