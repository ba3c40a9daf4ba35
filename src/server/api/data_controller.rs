use axum::http::StatusCode;
use axum::routing::get;
use axum::{Extension, Json, Router};
use tracing::info;

use crate::server::dtos::data_dto::SampleRecord;
use crate::server::services::Services;

pub struct DataController;

impl DataController {
    pub fn app() -> Router {
        Router::new().route("/data", get(Self::get_data_endpoint))
    }

    pub async fn get_data_endpoint(
        Extension(services): Extension<Services>,
    ) -> (StatusCode, Json<Vec<SampleRecord>>) {
        info!("received request for sample data");

        let response = services.data.get_data().await;

        // degraded is still a 200 unless DEGRADED_STATUS says otherwise, the frontend reads
        // the note field rather than the status
        let status = if response.degraded {
            StatusCode::from_u16(services.config.degraded_status).unwrap_or(StatusCode::OK)
        } else {
            StatusCode::OK
        };

        (status, Json(response.records))
    }
}
