pub mod data_controller;
pub mod health_controller;
pub mod metrics_controller;

use axum::Router;

/*
*    api/health  - GET - liveness, {status, service, timestamp, version}, never touches the db
*    api/metrics - GET - {uptime, memory: {rss, heapUsed, heapTotal}, environment}, sizes in MB
*    api/data    - GET - 3 sample records stamped with the db clock, or 2 records carrying a
*                        "Database not connected" note when postgres can't be reached
* */
pub fn app() -> Router {
    Router::new()
        .merge(health_controller::HealthController::app())
        .merge(metrics_controller::MetricsController::app())
        .merge(data_controller::DataController::app())
}
