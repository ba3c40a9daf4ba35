use axum::routing::get;
use axum::{Extension, Json, Router};
use tracing::debug;

use crate::server::dtos::health_dto::ServiceIdentity;
use crate::server::services::Services;

pub struct HealthController;

impl HealthController {
    pub fn app() -> Router {
        Router::new().route("/health", get(Self::health_endpoint))
    }

    // probes hit this every few seconds, keep it out of info
    pub async fn health_endpoint(Extension(services): Extension<Services>) -> Json<ServiceIdentity> {
        debug!("received liveness probe");

        Json(services.health.get_health())
    }
}
