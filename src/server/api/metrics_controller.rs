use axum::routing::get;
use axum::{Extension, Json, Router};
use tracing::debug;

use crate::server::dtos::metrics_dto::ResourceSample;
use crate::server::services::Services;

pub struct MetricsController;

impl MetricsController {
    pub fn app() -> Router {
        Router::new().route("/metrics", get(Self::metrics_endpoint))
    }

    pub async fn metrics_endpoint(Extension(services): Extension<Services>) -> Json<ResourceSample> {
        let sample = services.metrics.get_metrics();
        debug!(
            "sampled process: uptime {:.1}s, rss {} MB",
            sample.uptime, sample.memory.rss
        );

        Json(sample)
    }
}
